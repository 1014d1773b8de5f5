pub mod courses;
pub mod dtos;
pub mod search;

use axum::{Json, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::health;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        search::search,
        search::list_categories,
        search::search_category,
        search::search_security,
        courses::save_course,
        courses::list_courses,
    ),
    components(schemas(
        health::HealthResponse,
        dtos::ErrorResponse,
        dtos::SearchResponse,
        dtos::CourseResult,
        dtos::CategoryResponse,
        dtos::SaveCourseRequest,
        dtos::SavedCourseResponse,
        dtos::SavedCourseListResponse,
        crate::entities::SaveOutcome,
    )),
    tags(
        (name = "health", description = "Liveness and storage status"),
        (name = "search", description = "Concurrent course search across platforms"),
        (name = "courses", description = "Per-user saved course lists")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/v1/search", get(search::search))
        .route("/v1/categories", get(search::list_categories))
        .route("/v1/categories/{key}", get(search::search_category))
        .route("/v1/security", get(search::search_security))
        .route(
            "/v1/users/{user_id}/courses",
            get(courses::list_courses).post(courses::save_course),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
