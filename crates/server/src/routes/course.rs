use crate::{
    dtos::{
        course::{CourseQueryParams, CourseResponse, CreateCourseRequest, UpdateCourseRequest},
        message::{CreatedResponse, ErrorResponse, MessageResponse},
    },
    error::AppError,
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use database::{
    ServiceError,
    services::{course::CourseService, query_course::QueryCourseService},
};
use models::{ObjectId, course_data::CourseFilter};

/// Create a course
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CreatedResponse),
        (status = 400, description = "A referenced student does not exist", body = ErrorResponse),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(request) = payload?;

    let id = CourseService::create(&state.db, request.try_into()?).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Course successfully created".to_string(),
            id: id.to_string(),
        }),
    ))
}

/// List courses, optionally filtered by tag and student name
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "Matching courses", body = Vec<CourseResponse>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
    query: Result<Query<CourseQueryParams>, QueryRejection>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let Query(params) = query?;
    let filter = CourseFilter::from(params);

    let courses = QueryCourseService::list(&state.db, &filter).await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Get a course by ID
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "24-character hex course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Malformed ID", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CourseResponse>, AppError> {
    let Path(id) = path?;
    let id: ObjectId = id.parse()?;

    let course = CourseService::get(&state.db, &id)
        .await?
        .ok_or(ServiceError::CourseNotFound)?;

    Ok(Json(course.into()))
}

/// Update some fields of a course
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "24-character hex course ID")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = MessageResponse),
        (status = 400, description = "A referenced student does not exist", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Malformed ID or invalid fields", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    let id: ObjectId = id.parse()?;
    let Json(request) = payload?;

    CourseService::update(&state.db, &id, request.try_into()?).await?;

    Ok(Json(MessageResponse::new("Course successfully updated")))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "24-character hex course ID")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Malformed ID", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    let id: ObjectId = id.parse()?;

    CourseService::delete(&state.db, &id).await?;

    Ok(Json(MessageResponse::new("Course successfully deleted")))
}
