use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Landing view: a random, possibly repeating sample.
pub async fn featured(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let items = services.list_featured();
    (StatusCode::OK, Json(dto::items_to_json(&items))).into_response()
}

pub async fn list_all(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let items = services.list_all();
    (StatusCode::OK, Json(dto::items_to_json(&items))).into_response()
}

pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::SearchRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.search(&body.keyword) {
        Ok(items) => (StatusCode::OK, Json(dto::items_to_json(&items))).into_response(),
        Err(e) => errors::catalogue_error_to_response(e),
    }
}

pub async fn filter(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::FilterRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let filter = match errors::parse_status_filter(&body.status) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match services.filter(filter) {
        Ok(items) => (StatusCode::OK, Json(dto::items_to_json(&items))).into_response(),
        Err(e) => errors::catalogue_error_to_response(e),
    }
}
