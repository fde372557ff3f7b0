use crate::routes::{course, health, student};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        student::get_students,
        student::create_student,
        student::get_student,
        student::update_student,
        student::delete_student,
        course::create_course,
        course::get_courses,
        course::get_course,
        course::update_course,
        course::delete_course
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Students", description = "Student related endpoints"),
        (name = "Courses", description = "Course related endpoints"),
    ),
    info(
        title = "Student Course API",
        version = "1.0.0",
        description = "CRUD API for students and the courses that reference them",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
