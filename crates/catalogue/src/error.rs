//! Catalogue outcomes that are expected, recoverable failures.

use thiserror::Error;

use rental_core::{DomainError, ItemId};

use crate::item::RentalStatus;

pub type CatalogueResult<T> = Result<T, CatalogueError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// Store lookup miss.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// A keyword search matched nothing.
    #[error("no items match '{keyword}'")]
    NoResults { keyword: String },

    /// A status filter selected nothing.
    #[error("no {0} items")]
    EmptyResult(RentalStatus),

    /// The rent target does not exist.
    #[error("item {0} cannot be rented: not found")]
    ItemNotFound(ItemId),

    #[error("item {item_id} requires at least {minimum} days (requested {requested})")]
    MinimumRentalNotMet {
        item_id: ItemId,
        requested: i64,
        minimum: u32,
    },

    #[error("no rented items to return")]
    NothingToReturn,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
