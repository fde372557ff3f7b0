use crate::{entities::students, error::ServiceError};
use chrono::Utc;
use log::info;
use models::{
    ObjectId,
    student_data::{NewStudent, StudentChanges},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct StudentService;

impl StudentService {
    /// Persists a new student and returns its generated id
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        student: NewStudent,
    ) -> Result<ObjectId, DbErr> {
        let id = ObjectId::new();
        let now = Utc::now().naive_utc();

        students::ActiveModel {
            id: Set(id.to_string()),
            name: Set(student.name),
            student_number: Set(student.student_number),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created student {id}");
        Ok(id)
    }

    pub async fn get<C: ConnectionTrait>(
        db: &C,
        id: &ObjectId,
    ) -> Result<Option<students::Model>, DbErr> {
        students::Entity::find_by_id(id.to_string()).one(db).await
    }

    /// All students, oldest first
    pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<students::Model>, DbErr> {
        students::Entity::find()
            .order_by_asc(students::Column::CreatedAt)
            .order_by_asc(students::Column::Id)
            .all(db)
            .await
    }

    /// Overwrites only the fields present in `changes`
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: &ObjectId,
        changes: StudentChanges,
    ) -> Result<(), ServiceError> {
        let student = Self::get(db, id)
            .await?
            .ok_or(ServiceError::StudentNotFound)?;

        if changes.is_empty() {
            return Ok(());
        }

        let mut student: students::ActiveModel = student.into();
        if let Some(name) = changes.name {
            student.name = Set(name);
        }
        if let Some(student_number) = changes.student_number {
            student.student_number = Set(student_number);
        }
        student.updated_at = Set(Utc::now().naive_utc());

        student.update(db).await?;
        Ok(())
    }

    /// Removes the student. Courses that reference it are left untouched.
    pub async fn delete<C: ConnectionTrait>(db: &C, id: &ObjectId) -> Result<(), ServiceError> {
        let result = students::Entity::delete_by_id(id.to_string())
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::StudentNotFound);
        }

        info!("Deleted student {id}");
        Ok(())
    }
}
