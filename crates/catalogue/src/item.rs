use core::str::FromStr;

use rental_core::{DomainError, Entity, ItemId};

/// Rental state of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RentalStatus {
    Available,
    Rented,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Available => "available",
            RentalStatus::Rented => "rented",
        }
    }
}

impl core::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which slice of the catalogue a status query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Rented,
    Available,
    All,
}

impl StatusFilter {
    /// Whether an item in `status` belongs to this filter.
    pub fn admits(&self, status: RentalStatus) -> bool {
        match self {
            StatusFilter::Rented => status == RentalStatus::Rented,
            StatusFilter::Available => status == RentalStatus::Available,
            StatusFilter::All => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Rented => "rented",
            StatusFilter::Available => "available",
            StatusFilter::All => "all",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    /// Accepts both the short names and the `*-items` form values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rented" | "rented-items" => Ok(StatusFilter::Rented),
            "available" | "available-items" => Ok(StatusFilter::Available),
            "all" | "all-items" => Ok(StatusFilter::All),
            other => Err(DomainError::validation(format!(
                "unknown status filter '{other}' (expected one of: rented, available, all)"
            ))),
        }
    }
}

/// A rentable item.
///
/// Everything except the rental flag is fixed at construction. The flag is
/// only flipped by the store, on behalf of the rental workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    image_path: String,
    min_rental_days: u32,
    is_rented: bool,
}

impl Item {
    /// Build an available item, validating its fixed attributes.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        image_path: impl Into<String>,
        min_rental_days: u32,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let image_path = image_path.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if image_path.trim().is_empty() {
            return Err(DomainError::validation("image path cannot be empty"));
        }
        if min_rental_days == 0 {
            return Err(DomainError::validation(
                "minimum rental period must be at least one day",
            ));
        }

        Ok(Self {
            id,
            name,
            image_path,
            min_rental_days,
            is_rented: false,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn min_rental_days(&self) -> u32 {
        self.min_rental_days
    }

    pub fn is_rented(&self) -> bool {
        self.is_rented
    }

    pub fn status(&self) -> RentalStatus {
        if self.is_rented {
            RentalStatus::Rented
        } else {
            RentalStatus::Available
        }
    }

    /// True when a rental of `num_days` satisfies the minimum period.
    pub fn accepts_rental_of(&self, num_days: i64) -> bool {
        num_days >= i64::from(self.min_rental_days)
    }

    /// Case-insensitive substring match against the display name.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    pub(crate) fn set_rented(&mut self, rented: bool) {
        self.is_rented = rented;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
