use models::ObjectId;
use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the service layer
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Student not found")]
    StudentNotFound,

    #[error("Course not found")]
    CourseNotFound,

    /// A course referenced a student that is not in the store
    #[error("Student with ID {0} does not exist")]
    MissingStudent(ObjectId),

    #[error(transparent)]
    Db(#[from] DbErr),
}
