use crate::{
    entities::{course_students, course_tags, courses},
    services::{
        course::{CourseRecord, CourseService},
        reference::ReferenceResolver,
    },
};
use log::debug;
use models::course_data::CourseFilter;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait,
};

pub struct QueryCourseService;

impl QueryCourseService {
    /// Build the course selection for the given filters
    ///
    /// A student name that matches nobody does not narrow the result: the
    /// filter is dropped rather than producing an empty list.
    pub async fn build_condition<C: ConnectionTrait>(
        db: &C,
        filter: &CourseFilter,
    ) -> Result<Condition, DbErr> {
        let mut condition = Condition::all();

        if let Some(tag) = &filter.tag {
            let tagged = course_tags::Entity::find()
                .select_only()
                .column(course_tags::Column::CourseId)
                .filter(course_tags::Column::Tag.eq(tag.as_str()))
                .into_query();

            condition = condition.add(courses::Column::Id.in_subquery(tagged));
        }

        if let Some(name) = &filter.student_name {
            if ReferenceResolver::any_student_named(db, name).await? {
                let enrolled = course_students::Entity::find()
                    .select_only()
                    .column(course_students::Column::CourseId)
                    .filter(
                        course_students::Column::StudentId
                            .in_subquery(ReferenceResolver::students_named(name)),
                    )
                    .into_query();

                condition = condition.add(courses::Column::Id.in_subquery(enrolled));
            } else {
                debug!("No student named {name:?}, ignoring the student name filter");
            }
        }

        Ok(condition)
    }

    /// List courses matching the filters, oldest first
    pub async fn list<C: ConnectionTrait>(
        db: &C,
        filter: &CourseFilter,
    ) -> Result<Vec<CourseRecord>, DbErr> {
        let condition = Self::build_condition(db, filter).await?;

        let courses = courses::Entity::find()
            .filter(condition)
            .order_by_asc(courses::Column::CreatedAt)
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;

        debug!("Course filter {filter:?} matched {} courses", courses.len());

        CourseService::with_relations(db, courses).await
    }
}
