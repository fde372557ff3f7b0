use crate::{
    dtos::{
        message::{CreatedResponse, ErrorResponse, MessageResponse},
        student::{CreateStudentRequest, StudentResponse, UpdateStudentRequest},
    },
    error::AppError,
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use database::{ServiceError, services::student::StudentService};
use models::ObjectId;

/// List every student
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = Vec<StudentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = StudentService::list(&state.db).await?;

    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = CreatedResponse),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(request) = payload?;

    let id = StudentService::create(&state.db, request.try_into()?).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Student successfully created".to_string(),
            id: id.to_string(),
        }),
    ))
}

/// Get a student by ID
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "24-character hex student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Malformed ID", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StudentResponse>, AppError> {
    let Path(id) = path?;
    let id: ObjectId = id.parse()?;

    let student = StudentService::get(&state.db, &id)
        .await?
        .ok_or(ServiceError::StudentNotFound)?;

    Ok(Json(student.into()))
}

/// Update some fields of a student
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "24-character hex student ID")
    ),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Malformed ID or invalid fields", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateStudentRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    let id: ObjectId = id.parse()?;
    let Json(request) = payload?;

    StudentService::update(&state.db, &id, request.try_into()?).await?;

    Ok(Json(MessageResponse::new("Student successfully updated")))
}

/// Delete a student. Courses referencing it keep the reference.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "24-character hex student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Malformed ID", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    let id: ObjectId = id.parse()?;

    StudentService::delete(&state.db, &id).await?;

    Ok(Json(MessageResponse::new("Student successfully deleted")))
}
