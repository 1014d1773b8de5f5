use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{
    api::dtos::{
        ErrorResponse, SAVED_LIST_LIMIT, SaveCourseRequest, SavedCourseListResponse,
        SavedCourseResponse,
    },
    app_state::AppState,
    entities::SaveOutcome,
};

#[utoipa::path(
    post,
    path = "/v1/users/{user_id}/courses",
    tag = "courses",
    params(("user_id" = i64, Path, description = "Chat user id")),
    request_body = SaveCourseRequest,
    responses(
        (status = 201, description = "Course saved", body = SaveOutcome),
        (status = 400, description = "Invalid course", body = ErrorResponse),
        (status = 409, description = "Course already on the list", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn save_course(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<SaveCourseRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    match state
        .saved_courses
        .save(user_id, payload.title.trim(), &payload.url)
        .await
    {
        Ok(SaveOutcome::Saved) => (StatusCode::CREATED, Json(SaveOutcome::Saved)).into_response(),
        Ok(SaveOutcome::AlreadySaved) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("Course already saved")),
        )
            .into_response(),
        Err(err) => {
            error!(user_id, error = %err, "failed to save course");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to save course")),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/users/{user_id}/courses",
    tag = "courses",
    params(("user_id" = i64, Path, description = "Chat user id")),
    responses(
        (status = 200, description = "Saved courses, oldest first", body = SavedCourseListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_courses(State(state): State<AppState>, Path(user_id): Path<i64>) -> Response {
    match state.saved_courses.list(user_id).await {
        Ok(courses) => {
            let total = courses.len();
            let courses = courses
                .into_iter()
                .take(SAVED_LIST_LIMIT)
                .map(SavedCourseResponse::from)
                .collect();
            Json(SavedCourseListResponse { total, courses }).into_response()
        }
        Err(err) => {
            error!(user_id, error = %err, "failed to list saved courses");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to load saved courses")),
            )
                .into_response()
        }
    }
}
