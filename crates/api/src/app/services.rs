//! The catalogue operations offered to HTTP handlers.
//!
//! Handlers never touch the store directly; everything goes through
//! `AppServices`, which owns the process-wide catalogue and logs outcomes.

use rental_catalogue::{
    CatalogueError, CatalogueResult, CatalogueStore, Item, ItemId, StatusFilter, query, rental,
};
use rental_core::DomainError;

#[derive(Debug)]
pub struct AppServices {
    store: CatalogueStore,
    featured_count: usize,
}

impl AppServices {
    pub fn new(store: CatalogueStore, featured_count: usize) -> Self {
        Self {
            store,
            featured_count,
        }
    }

    /// Services over the fixed seed catalogue.
    pub fn seeded(featured_count: usize) -> Result<Self, DomainError> {
        let store = CatalogueStore::seeded()?;
        tracing::info!(items = store.len(), "catalogue seeded");
        Ok(Self::new(store, featured_count))
    }

    /// Random sample for the landing view (may repeat items).
    pub fn list_featured(&self) -> Vec<Item> {
        query::sample_random(&self.store, self.featured_count)
    }

    pub fn list_all(&self) -> Vec<Item> {
        self.store.all()
    }

    pub fn search(&self, keyword: &str) -> CatalogueResult<Vec<Item>> {
        let result = query::search(&self.store, keyword);
        match &result {
            Ok(items) => tracing::debug!(keyword, hits = items.len(), "search"),
            Err(e) => tracing::debug!(keyword, error = %e, "search found nothing"),
        }
        result
    }

    pub fn filter(&self, filter: StatusFilter) -> CatalogueResult<Vec<Item>> {
        let result = query::filter_by_status(&self.store, filter);
        if let Err(e) = &result {
            tracing::debug!(filter = filter.as_str(), error = %e, "filter is empty");
        }
        result
    }

    pub fn rent(&self, item_id: &ItemId, num_days: i64) -> CatalogueResult<Vec<Item>> {
        let result = rental::rent(&self.store, item_id, num_days);
        match &result {
            Ok(rented) => tracing::info!(
                item_id = %item_id,
                num_days,
                rented = rented.len(),
                "item rented"
            ),
            Err(e) => tracing::debug!(item_id = %item_id, num_days, error = %e, "rent rejected"),
        }
        result
    }

    pub fn return_all(&self) -> CatalogueResult<Vec<Item>> {
        let result = rental::return_all(&self.store);
        match &result {
            Ok(items) => tracing::info!(items = items.len(), "all rentals returned"),
            Err(CatalogueError::NothingToReturn) => tracing::debug!("return with nothing rented"),
            Err(e) => tracing::warn!(error = %e, "return failed"),
        }
        result
    }
}
