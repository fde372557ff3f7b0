use crate::{
    doc::ApiDoc,
    routes::{course, health, student},
    state::AppState,
};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router with every route and middleware attached
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route(
            "/students",
            get(student::get_students).post(student::create_student),
        )
        .route(
            "/students/{id}",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/courses",
            get(course::get_courses).post(course::create_course),
        )
        .route(
            "/courses/{id}",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
