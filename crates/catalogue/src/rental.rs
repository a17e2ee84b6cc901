//! Rent / return state transitions.
//!
//! Each operation takes the store lock once, so the precondition check and
//! the mutation it guards cannot interleave with another request.

use rental_core::{Entity, ItemId};

use crate::error::{CatalogueError, CatalogueResult};
use crate::item::Item;
use crate::store::CatalogueStore;

/// Rent `item_id` for `num_days`.
///
/// On success returns every currently rented item, in catalogue order.
/// Renting an item that is already rented succeeds and leaves it rented.
pub fn rent(store: &CatalogueStore, item_id: &ItemId, num_days: i64) -> CatalogueResult<Vec<Item>> {
    store.write(|items| {
        let item = items
            .iter()
            .find(|i| i.has_id(item_id))
            .ok_or(CatalogueError::ItemNotFound(*item_id))?;

        if !item.accepts_rental_of(num_days) {
            return Err(CatalogueError::MinimumRentalNotMet {
                item_id: *item_id,
                requested: num_days,
                minimum: item.min_rental_days(),
            });
        }
        CatalogueStore::apply_rented(items, item_id, true)?;

        Ok(items.iter().filter(|i| i.is_rented()).cloned().collect())
    })
}

/// Return every rented item.
///
/// Fails with `NothingToReturn` (and changes nothing) when no item is rented;
/// otherwise marks the whole catalogue available and returns it.
pub fn return_all(store: &CatalogueStore) -> CatalogueResult<Vec<Item>> {
    store.write(|items| {
        if !items.iter().any(Item::is_rented) {
            return Err(CatalogueError::NothingToReturn);
        }
        let rented: Vec<ItemId> = items
            .iter()
            .filter(|i| i.is_rented())
            .map(Item::id_typed)
            .collect();
        for id in &rented {
            CatalogueStore::apply_rented(items, id, false)?;
        }
        Ok(items.to_vec())
    })
}
