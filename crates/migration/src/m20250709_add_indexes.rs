use sea_orm_migration::prelude::*;

use crate::m20250709_create_all_tables::{CourseStudents, CourseTags, Students};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Exact name lookups for the studentName filter
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_name")
                    .table(Students::Table)
                    .col(Students::Name)
                    .to_owned(),
            )
            .await?;

        // Tag membership filter
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_tags_tag")
                    .table(CourseTags::Table)
                    .col(CourseTags::Tag)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_tags_course_id")
                    .table(CourseTags::Table)
                    .col(CourseTags::CourseId)
                    .to_owned(),
            )
            .await?;

        // Indexes on course_students for faster many-to-many lookups
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_students_course_id")
                    .table(CourseStudents::Table)
                    .col(CourseStudents::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_students_student_id")
                    .table(CourseStudents::Table)
                    .col(CourseStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_course_students_student_id",
            "idx_course_students_course_id",
            "idx_course_tags_course_id",
            "idx_course_tags_tag",
            "idx_students_name",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
