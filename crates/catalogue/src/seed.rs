//! Fixed catalogue contents loaded at startup.

use rental_core::{DomainError, ItemId};

use crate::item::Item;

/// Static description of a seeded item (ids are assigned per store).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedItem {
    pub name: &'static str,
    pub image_path: &'static str,
    pub min_rental_days: u32,
}

pub const SEED_ITEMS: [SeedItem; 6] = [
    SeedItem {
        name: "Acer A4581 Laptop",
        image_path: "img/acer-notebook.jpg",
        min_rental_days: 14,
    },
    SeedItem {
        name: "Apple iPhone 14 Plus",
        image_path: "img/apple-iphone14plus.jpg",
        min_rental_days: 7,
    },
    SeedItem {
        name: "Google Pixel Phone",
        image_path: "img/google-pixel.jpg",
        min_rental_days: 30,
    },
    SeedItem {
        name: "JBL Headphone",
        image_path: "img/jbl-headphone.jpg",
        min_rental_days: 2,
    },
    SeedItem {
        name: "Apple MacBook Pro 13\"",
        image_path: "img/macbook-pro-13inch.jpg",
        min_rental_days: 2,
    },
    SeedItem {
        name: "Samsung Flip Phone",
        image_path: "img/samsung-flip.jpg",
        min_rental_days: 2,
    },
];

/// Materialize the seed set with freshly generated ids, all available.
pub fn seed_items() -> Result<Vec<Item>, DomainError> {
    SEED_ITEMS
        .iter()
        .map(|s| Item::new(ItemId::new(), s.name, s.image_path, s.min_rental_days))
        .collect()
}
