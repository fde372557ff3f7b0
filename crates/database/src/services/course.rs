use crate::{
    entities::{course_students, course_tags, courses},
    error::ServiceError,
    services::reference::ReferenceResolver,
};
use chrono::Utc;
use log::info;
use models::{
    ObjectId,
    course_data::{CourseChanges, NewCourse},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

/// A course row together with its tags and student references
#[derive(Clone, Debug, PartialEq)]
pub struct CourseRecord {
    pub course: courses::Model,
    pub tags: Vec<String>,
    pub students: Vec<String>,
}

pub struct CourseService;

impl CourseService {
    /// The number of tag or student rows written in a single insert
    const BATCH_SIZE: usize = 1000;

    /// Persists a new course after checking every student reference
    ///
    /// Nothing is written if any referenced student is missing.
    pub async fn create(
        db: &DatabaseConnection,
        course: NewCourse,
    ) -> Result<ObjectId, ServiceError> {
        ReferenceResolver::ensure_students_exist(db, &course.students).await?;

        let id = ObjectId::new();
        let now = Utc::now().naive_utc();
        let txn = db.begin().await?;

        courses::ActiveModel {
            id: Set(id.to_string()),
            name: Set(course.name),
            description: Set(course.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        Self::write_tags(&txn, &id, course.tags).await?;
        Self::write_students(&txn, &id, &course.students).await?;

        txn.commit().await?;

        info!("Created course {id}");
        Ok(id)
    }

    pub async fn get<C: ConnectionTrait>(
        db: &C,
        id: &ObjectId,
    ) -> Result<Option<CourseRecord>, DbErr> {
        let Some(course) = courses::Entity::find_by_id(id.to_string()).one(db).await? else {
            return Ok(None);
        };

        Ok(Self::with_relations(db, vec![course]).await?.pop())
    }

    /// Applies a partial update
    ///
    /// A missing course is reported before any student reference is checked.
    /// `tags` and `students` replace the stored lists when present.
    pub async fn update(
        db: &DatabaseConnection,
        id: &ObjectId,
        changes: CourseChanges,
    ) -> Result<(), ServiceError> {
        let course = courses::Entity::find_by_id(id.to_string())
            .one(db)
            .await?
            .ok_or(ServiceError::CourseNotFound)?;

        if let Some(students) = &changes.students {
            ReferenceResolver::ensure_students_exist(db, students).await?;
        }

        let txn = db.begin().await?;

        let mut course: courses::ActiveModel = course.into();
        if let Some(name) = changes.name {
            course.name = Set(name);
        }
        if let Some(description) = changes.description {
            course.description = Set(description);
        }
        course.updated_at = Set(Utc::now().naive_utc());
        course.update(&txn).await?;

        if let Some(tags) = changes.tags {
            course_tags::Entity::delete_many()
                .filter(course_tags::Column::CourseId.eq(id.to_string()))
                .exec(&txn)
                .await?;
            Self::write_tags(&txn, id, tags).await?;
        }

        if let Some(students) = changes.students {
            course_students::Entity::delete_many()
                .filter(course_students::Column::CourseId.eq(id.to_string()))
                .exec(&txn)
                .await?;
            Self::write_students(&txn, id, &students).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    /// Removes the course along with its tags and student references
    pub async fn delete(db: &DatabaseConnection, id: &ObjectId) -> Result<(), ServiceError> {
        let txn = db.begin().await?;

        course_tags::Entity::delete_many()
            .filter(course_tags::Column::CourseId.eq(id.to_string()))
            .exec(&txn)
            .await?;
        course_students::Entity::delete_many()
            .filter(course_students::Column::CourseId.eq(id.to_string()))
            .exec(&txn)
            .await?;

        let result = courses::Entity::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;

        // Dropping the transaction rolls it back
        if result.rows_affected == 0 {
            return Err(ServiceError::CourseNotFound);
        }

        txn.commit().await?;

        info!("Deleted course {id}");
        Ok(())
    }

    /// Attaches tags and student references to each course, keeping input order
    pub async fn with_relations<C: ConnectionTrait>(
        db: &C,
        courses: Vec<courses::Model>,
    ) -> Result<Vec<CourseRecord>, DbErr> {
        if courses.is_empty() {
            return Ok(vec![]);
        }

        let course_ids: Vec<String> = courses.iter().map(|c| c.id.clone()).collect();

        let (mut tags_by_course, mut students_by_course) = futures::try_join!(
            Self::tags_by_course(db, &course_ids),
            ReferenceResolver::students_by_course(db, &course_ids),
        )?;

        Ok(courses
            .into_iter()
            .map(|course| CourseRecord {
                tags: tags_by_course.remove(&course.id).unwrap_or_default(),
                students: students_by_course.remove(&course.id).unwrap_or_default(),
                course,
            })
            .collect())
    }

    async fn tags_by_course<C: ConnectionTrait>(
        db: &C,
        course_ids: &[String],
    ) -> Result<HashMap<String, Vec<String>>, DbErr> {
        let mut by_course: HashMap<String, Vec<String>> = HashMap::new();

        for batch in course_ids.chunks(Self::BATCH_SIZE) {
            let rows = course_tags::Entity::find()
                .filter(course_tags::Column::CourseId.is_in(batch.iter().cloned()))
                .order_by_asc(course_tags::Column::CourseId)
                .order_by_asc(course_tags::Column::Position)
                .all(db)
                .await?;

            for row in rows {
                by_course.entry(row.course_id).or_default().push(row.tag);
            }
        }

        Ok(by_course)
    }

    async fn write_tags(
        txn: &DatabaseTransaction,
        course_id: &ObjectId,
        tags: Vec<String>,
    ) -> Result<(), DbErr> {
        let rows: Vec<course_tags::ActiveModel> = tags
            .into_iter()
            .enumerate()
            .map(|(position, tag)| course_tags::ActiveModel {
                course_id: Set(course_id.to_string()),
                tag: Set(tag),
                position: Set(position as i32),
                ..Default::default()
            })
            .collect();

        for batch in rows.chunks(Self::BATCH_SIZE) {
            course_tags::Entity::insert_many(batch.to_vec())
                .exec(txn)
                .await?;
        }

        Ok(())
    }

    async fn write_students(
        txn: &DatabaseTransaction,
        course_id: &ObjectId,
        students: &[ObjectId],
    ) -> Result<(), DbErr> {
        let rows: Vec<course_students::ActiveModel> = students
            .iter()
            .enumerate()
            .map(|(position, student_id)| course_students::ActiveModel {
                course_id: Set(course_id.to_string()),
                student_id: Set(student_id.to_string()),
                position: Set(position as i32),
                ..Default::default()
            })
            .collect();

        for batch in rows.chunks(Self::BATCH_SIZE) {
            course_students::Entity::insert_many(batch.to_vec())
                .exec(txn)
                .await?;
        }

        Ok(())
    }
}
