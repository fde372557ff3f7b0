use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .char_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).text().not_null())
                    .col(ColumnDef::new(Students::StudentNumber).big_integer())
                    .col(ColumnDef::new(Students::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .char_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).text().not_null())
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(ColumnDef::new(Courses::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_tags table, one row per tag in write order
        manager
            .create_table(
                Table::create()
                    .table(CourseTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseTags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseTags::CourseId).char_len(24).not_null())
                    .col(ColumnDef::new(CourseTags::Tag).text().not_null())
                    .col(ColumnDef::new(CourseTags::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_tags-course_id")
                            .from(CourseTags::Table, CourseTags::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_students table (many-to-many). No foreign key on
        // student_id: deleting a student leaves its references in place.
        manager
            .create_table(
                Table::create()
                    .table(CourseStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseStudents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::CourseId)
                            .char_len(24)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::StudentId)
                            .char_len(24)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseStudents::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_students-course_id")
                            .from(CourseStudents::Table, CourseStudents::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    Id,
    Name,
    StudentNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum CourseTags {
    Table,
    Id,
    CourseId,
    Tag,
    Position,
}

#[derive(DeriveIden)]
pub enum CourseStudents {
    Table,
    Id,
    CourseId,
    StudentId,
    Position,
}
