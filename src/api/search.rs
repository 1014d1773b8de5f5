use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    api::dtos::{CategoryResponse, ErrorResponse, SearchParams, SearchResponse, TypeParams},
    app_state::AppState,
    catalog::Category,
    search::{CourseType, SearchRequest},
};

fn bad_request(error: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error))).into_response()
}

fn parse_course_type(raw: Option<&str>) -> Result<CourseType, Response> {
    raw.unwrap_or_default()
        .parse()
        .map_err(|err: crate::search::ParseCourseTypeError| bad_request(err.to_string()))
}

fn with_type_suffix(header: &str, course_type: CourseType) -> String {
    match course_type {
        CourseType::All => header.to_string(),
        CourseType::Free => format!("{header} (free)"),
        CourseType::Paid => format!("{header} (paid)"),
    }
}

#[utoipa::path(
    get,
    path = "/v1/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Aggregated results, possibly empty", body = SearchResponse),
        (status = 400, description = "Missing term or unknown type", body = ErrorResponse)
    )
)]
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let term = params.q.as_deref().map(str::trim).unwrap_or_default();
    if term.is_empty() {
        return bad_request("Tell us what you want to learn, e.g. ?q=python");
    }
    let course_type = match parse_course_type(params.course_type.as_deref()) {
        Ok(course_type) => course_type,
        Err(response) => return response,
    };

    let listings = state
        .aggregator
        .search(&SearchRequest::new(term, course_type))
        .await;

    Json(SearchResponse::from_listings(
        with_type_suffix(term, course_type),
        listings,
    ))
    .into_response()
}

#[utoipa::path(
    get,
    path = "/v1/categories",
    tag = "search",
    responses(
        (status = 200, description = "Browsable categories", body = [CategoryResponse])
    )
)]
pub async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(Category::builtin().iter().map(CategoryResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/v1/categories/{key}",
    tag = "search",
    params(
        ("key" = String, Path, description = "Category key, e.g. devops"),
        TypeParams
    ),
    responses(
        (status = 200, description = "Aggregated results for every term of the category", body = SearchResponse),
        (status = 400, description = "Unknown type", body = ErrorResponse),
        (status = 404, description = "Unknown category", body = ErrorResponse)
    )
)]
pub async fn search_category(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<TypeParams>,
) -> Response {
    let Some(category) = Category::find(&key) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("Unknown category '{key}'"))),
        )
            .into_response();
    };
    let course_type = match parse_course_type(params.course_type.as_deref()) {
        Ok(course_type) => course_type,
        Err(response) => return response,
    };

    let listings = state
        .aggregator
        .search_category(category, course_type)
        .await;

    Json(SearchResponse::from_listings(
        with_type_suffix(category.label, course_type),
        listings,
    ))
    .into_response()
}

#[utoipa::path(
    get,
    path = "/v1/security",
    tag = "search",
    params(TypeParams),
    responses(
        (status = 200, description = "Security and pentest courses", body = SearchResponse),
        (status = 400, description = "Unknown type", body = ErrorResponse)
    )
)]
pub async fn search_security(
    State(state): State<AppState>,
    Query(params): Query<TypeParams>,
) -> Response {
    let course_type = match parse_course_type(params.course_type.as_deref()) {
        Ok(course_type) => course_type,
        Err(response) => return response,
    };

    let listings = state.aggregator.search_security(course_type).await;

    Json(SearchResponse::from_listings(
        with_type_suffix("Pentest & Ethical Hacking", course_type),
        listings,
    ))
    .into_response()
}
