//! Authoritative in-memory item list.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rental_core::{DomainError, Entity, ItemId};

use crate::error::{CatalogueError, CatalogueResult};
use crate::item::Item;
use crate::seed;

/// The catalogue: items in insertion order, unique by id.
///
/// All access is serialized through one lock so that check-then-mutate
/// sequences (rent, return-all) are atomic with respect to each other.
/// There is no insertion or deletion after construction, and rental flags
/// can only be changed through [`crate::rental`]:
///
/// ```compile_fail
/// use rental_catalogue::{CatalogueStore, ItemId};
///
/// let store = CatalogueStore::seeded().unwrap();
/// let mut items = store.all();
/// CatalogueStore::apply_rented(&mut items, &ItemId::new(), true).unwrap();
/// ```
#[derive(Debug)]
pub struct CatalogueStore {
    items: Mutex<Vec<Item>>,
}

impl CatalogueStore {
    pub fn new(items: Vec<Item>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id_typed()) {
                return Err(DomainError::validation(format!(
                    "duplicate item id {}",
                    item.id_typed()
                )));
            }
        }

        Ok(Self {
            items: Mutex::new(items),
        })
    }

    /// Store populated with the fixed seed set.
    pub fn seeded() -> Result<Self, DomainError> {
        Self::new(seed::seed_items()?)
    }

    /// Snapshot of one item.
    pub fn find_by_id(&self, id: &ItemId) -> CatalogueResult<Item> {
        self.read(|items| items.iter().find(|i| i.has_id(id)).cloned())
            .ok_or(CatalogueError::NotFound(*id))
    }

    /// Snapshot of every item in insertion order.
    pub fn all(&self) -> Vec<Item> {
        self.read(|items| items.to_vec())
    }

    pub fn len(&self) -> usize {
        self.read(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single mutation primitive: flip one item's rental flag on a list
    /// the caller already holds under the store lock (see `write`).
    pub(crate) fn apply_rented(items: &mut [Item], id: &ItemId, rented: bool) -> CatalogueResult<()> {
        match items.iter_mut().find(|i| i.has_id(id)) {
            Some(item) => {
                item.set_rented(rented);
                Ok(())
            }
            None => Err(CatalogueError::NotFound(*id)),
        }
    }

    /// Locking shorthand for tests that need to stage rental state directly.
    #[cfg(test)]
    pub(crate) fn set_rented(&self, id: &ItemId, rented: bool) -> CatalogueResult<()> {
        self.write(|items| Self::apply_rented(items, id, rented))
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&[Item]) -> R) -> R {
        f(&self.lock())
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut [Item]) -> R) -> R {
        f(&mut self.lock())
    }

    // Poisoning is ignored: every update is a single flag write, so the list
    // is consistent even after a panicking holder.
    fn lock(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item::new(ItemId::new(), name, "img/x.jpg", 1).unwrap()
    }

    #[test]
    fn seeded_store_holds_six_items_in_order() {
        let store = CatalogueStore::seeded().unwrap();
        let names: Vec<String> = store.all().iter().map(|i| i.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Acer A4581 Laptop",
                "Apple iPhone 14 Plus",
                "Google Pixel Phone",
                "JBL Headphone",
                "Apple MacBook Pro 13\"",
                "Samsung Flip Phone",
            ]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = item("A");
        let b = a.clone();
        let err = CatalogueStore::new(vec![a, b]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn find_by_id_returns_matching_item() {
        let a = item("A");
        let b = item("B");
        let id = b.id_typed();
        let store = CatalogueStore::new(vec![a, b]).unwrap();

        assert_eq!(store.find_by_id(&id).unwrap().name(), "B");
    }

    #[test]
    fn find_by_id_misses_with_not_found() {
        let store = CatalogueStore::new(vec![item("A")]).unwrap();
        let missing = ItemId::new();
        assert_eq!(
            store.find_by_id(&missing).unwrap_err(),
            CatalogueError::NotFound(missing)
        );
    }

    #[test]
    fn set_rented_updates_only_target() {
        let a = item("A");
        let b = item("B");
        let id = a.id_typed();
        let store = CatalogueStore::new(vec![a, b]).unwrap();

        store.set_rented(&id, true).unwrap();

        let all = store.all();
        assert!(all[0].is_rented());
        assert!(!all[1].is_rented());
    }

    #[test]
    fn apply_rented_under_write_reports_missing_item() {
        let a = item("A");
        let id = a.id_typed();
        let store = CatalogueStore::new(vec![a]).unwrap();
        let missing = ItemId::new();

        let result = store.write(|items| {
            CatalogueStore::apply_rented(items, &id, true)?;
            CatalogueStore::apply_rented(items, &missing, true)
        });

        assert_eq!(result.unwrap_err(), CatalogueError::NotFound(missing));
        assert!(store.find_by_id(&id).unwrap().is_rented());
    }

    #[test]
    fn snapshots_do_not_alias_store_state() {
        let a = item("A");
        let id = a.id_typed();
        let store = CatalogueStore::new(vec![a]).unwrap();

        let before = store.all();
        store.set_rented(&id, true).unwrap();

        assert!(!before[0].is_rented());
        assert!(store.find_by_id(&id).unwrap().is_rented());
    }

    #[test]
    fn empty_store_is_allowed() {
        let store = CatalogueStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }
}
