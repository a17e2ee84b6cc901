//! Rental catalogue domain module.
//!
//! This crate contains the business rules for browsing, searching and renting
//! items, implemented as deterministic domain logic over an in-memory store
//! (no IO, no HTTP).

pub mod error;
pub mod item;
pub mod query;
pub mod rental;
pub mod seed;
pub mod store;

pub use error::{CatalogueError, CatalogueResult};
pub use item::{Item, RentalStatus, StatusFilter};
pub use query::{filter_by_status, sample_random, sample_random_with, search};
pub use rental::{rent, return_all};
pub use rental_core::ItemId;
pub use seed::{SEED_ITEMS, SeedItem, seed_items};
pub use store::CatalogueStore;
