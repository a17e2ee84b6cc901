//! HTTP API: server, routing, and request/response mapping for the rental
//! catalogue.

pub mod app;
pub mod config;
pub mod middleware;
