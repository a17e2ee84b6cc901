use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use rental_catalogue::{CatalogueError, RentalStatus, StatusFilter};
use rental_core::DomainError;

pub const ITEM_NOT_FOUND_MESSAGE: &str = "This item can not be found!";

/// Map an expected catalogue outcome to its user-facing error response.
pub fn catalogue_error_to_response(err: CatalogueError) -> axum::response::Response {
    match err {
        CatalogueError::NoResults { .. } => {
            json_error(StatusCode::NOT_FOUND, "no_results", "No items found!")
        }
        CatalogueError::EmptyResult(RentalStatus::Rented) => json_error(
            StatusCode::NOT_FOUND,
            "empty_result",
            "Your rental list is empty!",
        ),
        CatalogueError::EmptyResult(RentalStatus::Available) => json_error(
            StatusCode::NOT_FOUND,
            "empty_result",
            "There's no more item to rent!",
        ),
        CatalogueError::ItemNotFound(_) | CatalogueError::NotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "item_not_found", ITEM_NOT_FOUND_MESSAGE)
        }
        CatalogueError::MinimumRentalNotMet { .. } => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "minimum_rental_not_met",
            "You did not meet the minimum requirement!",
        ),
        CatalogueError::NothingToReturn => json_error(
            StatusCode::CONFLICT,
            "nothing_to_return",
            "You do not have any item to return!",
        ),
        CatalogueError::Domain(e) => domain_error_to_response(e),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_status_filter(s: &str) -> Result<StatusFilter, axum::response::Response> {
    s.parse().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_filter",
            "status must be one of: rented, available, all",
        )
    })
}

/// Malformed request bodies get the same JSON error shape as domain failures.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_request", rejection.body_text())
}
