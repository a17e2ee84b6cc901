use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use rental_catalogue::ItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Rent one item; responds with every item currently rented.
pub async fn rent(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::RentRequest>, JsonRejection>,
) -> axum::response::Response {
    // A malformed id cannot name any item, so it is reported like a miss.
    let item_id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "item_not_found",
                errors::ITEM_NOT_FOUND_MESSAGE,
            );
        }
    };

    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.rent(&item_id, body.num_days) {
        Ok(rented) => (StatusCode::OK, Json(dto::items_to_json(&rented))).into_response(),
        Err(e) => errors::catalogue_error_to_response(e),
    }
}

pub async fn return_all(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.return_all() {
        Ok(items) => (StatusCode::OK, Json(dto::items_to_json(&items))).into_response(),
        Err(e) => errors::catalogue_error_to_response(e),
    }
}
