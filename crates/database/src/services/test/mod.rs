use crate::entities::{course_students, course_tags, courses, students};
use models::{
    ObjectId,
    course_data::NewCourse,
    student_data::NewStudent,
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};

use super::{course::CourseService, student::StudentService};

mod course;

/// Fresh in-memory SQLite database with every table created from the entities
async fn setup() -> Result<DatabaseConnection, DbErr> {
    // A single pooled connection keeps every query on the same in-memory database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;

    create_table(&db, students::Entity).await?;
    create_table(&db, courses::Entity).await?;
    create_table(&db, course_tags::Entity).await?;
    create_table(&db, course_students::Entity).await?;

    Ok(db)
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let stmt = Schema::new(backend).create_table_from_entity(entity);
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

async fn student(db: &DatabaseConnection, name: &str) -> ObjectId {
    StudentService::create(db, NewStudent::new(name.to_string(), None).unwrap())
        .await
        .unwrap()
}

async fn course(
    db: &DatabaseConnection,
    name: &str,
    tags: &[&str],
    students: &[ObjectId],
) -> ObjectId {
    let course = NewCourse {
        name: name.to_string(),
        description: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        students: students.to_vec(),
    };

    CourseService::create(db, course).await.unwrap()
}
