use serde::{Deserialize, Deserializer};

use rental_catalogue::Item;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    /// `rented`, `available` or `all` (the `*-items` spellings are accepted too).
    #[serde(alias = "results")]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct RentRequest {
    /// A JSON integer, or a string holding one (form-style clients post text).
    #[serde(alias = "numDays", deserialize_with = "int_or_string")]
    pub num_days: i64,
}

fn int_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Days {
        Number(i64),
        Text(String),
    }

    match Days::deserialize(deserializer)? {
        Days::Number(n) => Ok(n),
        Days::Text(s) => s.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("num_days must be an integer, got '{s}'"))
        }),
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id_typed().to_string(),
        "name": item.name(),
        "image_path": item.image_path(),
        "min_rental_days": item.min_rental_days(),
        "is_rented": item.is_rented(),
    })
}

pub fn items_to_json(items: &[Item]) -> serde_json::Value {
    serde_json::json!({
        "count": items.len(),
        "items": items.iter().map(item_to_json).collect::<Vec<_>>(),
    })
}
