use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marketplace product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Engine Parts")]
    EngineParts,
    #[serde(rename = "Brake System")]
    BrakeSystem,
    #[serde(rename = "Tires & Wheels")]
    TiresWheels,
    #[serde(rename = "Suspension & Steering")]
    SuspensionSteering,
    #[serde(rename = "Electrical & Lighting")]
    ElectricalLighting,
    #[serde(rename = "Body Parts")]
    BodyParts,
    #[serde(rename = "Transmission")]
    Transmission,
    #[serde(rename = "Exhaust System")]
    ExhaustSystem,
    #[serde(rename = "Cooling System")]
    CoolingSystem,
    #[serde(rename = "Interior & Accessories")]
    InteriorAccessories,
}

impl Category {
    /// Categories in listing order.
    pub const ALL: [Category; 10] = [
        Category::EngineParts,
        Category::BrakeSystem,
        Category::TiresWheels,
        Category::SuspensionSteering,
        Category::ElectricalLighting,
        Category::BodyParts,
        Category::Transmission,
        Category::ExhaustSystem,
        Category::CoolingSystem,
        Category::InteriorAccessories,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::EngineParts => "Engine Parts",
            Category::BrakeSystem => "Brake System",
            Category::TiresWheels => "Tires & Wheels",
            Category::SuspensionSteering => "Suspension & Steering",
            Category::ElectricalLighting => "Electrical & Lighting",
            Category::BodyParts => "Body Parts",
            Category::Transmission => "Transmission",
            Category::ExhaustSystem => "Exhaust System",
            Category::CoolingSystem => "Cooling System",
            Category::InteriorAccessories => "Interior & Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Result ordering for catalog searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
}

/// Price bounds pulled out of a message. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Public profile of the seller, denormalized onto each listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

/// A product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Listing ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Asking price in naira.
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Inactive listings are hidden from search.
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub seller: SellerProfile,
}

fn default_active() -> bool {
    true
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, seller: SellerProfile) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: String::new(),
            price,
            category: None,
            image_url: None,
            is_active: true,
            created_at: Utc::now(),
            seller,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn listed_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Parameters of a catalog search. Unset fields do not filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub verified_only: bool,
    #[serde(default)]
    pub sort: SortKey,
}
