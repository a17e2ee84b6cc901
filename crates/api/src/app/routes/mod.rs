use axum::{
    Router,
    routing::{get, post},
};

pub mod catalogue;
pub mod rentals;
pub mod system;

/// Router for the catalogue endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(catalogue::featured))
        .route("/rental-catalogue", get(catalogue::list_all))
        .route("/search", post(catalogue::search))
        .route("/filter", post(catalogue::filter))
        .route("/rental-catalogue/:id", post(rentals::rent))
        .route("/return", post(rentals::return_all))
}
