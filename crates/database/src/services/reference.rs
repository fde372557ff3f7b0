use crate::{
    entities::{course_students, students},
    error::ServiceError,
};
use log::warn;
use models::ObjectId;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, sea_query::SelectStatement,
};
use std::collections::{HashMap, HashSet};

/// Translates between course -> student references and the student table
pub struct ReferenceResolver;

impl ReferenceResolver {
    /// The number of ids bound into a single `IN (...)` list
    pub const BATCH_SIZE: usize = 1000;

    /// Fails with the first id (in the given order) that has no student behind it
    pub async fn ensure_students_exist<C: ConnectionTrait>(
        db: &C,
        ids: &[ObjectId],
    ) -> Result<(), ServiceError> {
        let mut existing: HashSet<String> = HashSet::new();

        for batch in ids.chunks(Self::BATCH_SIZE) {
            let found = students::Entity::find()
                .select_only()
                .column(students::Column::Id)
                .filter(students::Column::Id.is_in(batch.iter().map(ObjectId::to_string)))
                .into_tuple::<String>()
                .all(db)
                .await?;
            existing.extend(found);
        }

        match ids.iter().find(|id| !existing.contains(&id.to_string())) {
            Some(missing) => {
                warn!("Rejected reference to unknown student {missing}");
                Err(ServiceError::MissingStudent(*missing))
            }
            None => Ok(()),
        }
    }

    /// Student ids referenced by each course, in write order
    ///
    /// Only ids are returned; student rows are never joined in, so dangling
    /// references show up as-is.
    pub async fn students_by_course<C: ConnectionTrait>(
        db: &C,
        course_ids: &[String],
    ) -> Result<HashMap<String, Vec<String>>, DbErr> {
        let mut by_course: HashMap<String, Vec<String>> = HashMap::new();

        for batch in course_ids.chunks(Self::BATCH_SIZE) {
            let rows = course_students::Entity::find()
                .filter(course_students::Column::CourseId.is_in(batch.iter().cloned()))
                .order_by_asc(course_students::Column::CourseId)
                .order_by_asc(course_students::Column::Position)
                .all(db)
                .await?;

            for row in rows {
                by_course
                    .entry(row.course_id)
                    .or_default()
                    .push(row.student_id);
            }
        }

        Ok(by_course)
    }

    /// Whether any student has exactly this name (case-sensitive)
    pub async fn any_student_named<C: ConnectionTrait>(db: &C, name: &str) -> Result<bool, DbErr> {
        let found = students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::Name.eq(name))
            .into_tuple::<String>()
            .one(db)
            .await?;

        Ok(found.is_some())
    }

    /// Sub-select of the ids of every student with exactly this name
    pub fn students_named(name: &str) -> SelectStatement {
        students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::Name.eq(name))
            .into_query()
    }
}
