// Mess model: one searchable catalog entry

use crate::models::{Location, MessId, Price, SubscriptionPlan, Timing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuisineType {
    NorthIndian,
    SouthIndian,
    Gujarati,
    Maharashtrian,
    Chinese,
    Continental,
    Mixed,
}

impl CuisineType {
    pub const ALL: [CuisineType; 7] = [
        CuisineType::NorthIndian,
        CuisineType::SouthIndian,
        CuisineType::Gujarati,
        CuisineType::Maharashtrian,
        CuisineType::Chinese,
        CuisineType::Continental,
        CuisineType::Mixed,
    ];

    /// Human readable label, also matched by free-text queries
    pub fn label(&self) -> &'static str {
        match self {
            CuisineType::NorthIndian => "North Indian",
            CuisineType::SouthIndian => "South Indian",
            CuisineType::Gujarati => "Gujarati",
            CuisineType::Maharashtrian => "Maharashtrian",
            CuisineType::Chinese => "Chinese",
            CuisineType::Continental => "Continental",
            CuisineType::Mixed => "Mixed",
        }
    }
}

/// Price tier of a mess
///
/// Tiers are ordered from cheapest to most expensive so that sorting by price
/// sorts by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    Budget,
    Moderate,
    Premium,
}

impl PriceRange {
    /// Classifies a per-meal rate: budget below 150, premium above 300
    pub fn for_meal_rate(meal_rate: Price) -> Self {
        if meal_rate < 150.0 {
            PriceRange::Budget
        } else if meal_rate <= 300.0 {
            PriceRange::Moderate
        } else {
            PriceRange::Premium
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Pickup,
    Delivery,
    DineIn,
}

/// Represents a mess as supplied by the catalog provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mess {
    /// Unique identifier for the mess
    pub id: MessId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Geographic location and postal address
    pub location: Location,

    pub cuisine: BTreeSet<CuisineType>,

    pub is_veg: bool,

    #[serde(default)]
    pub is_non_veg: bool,

    pub price_range: PriceRange,

    pub service_types: BTreeSet<ServiceType>,

    /// Average rating in [0, 5]
    pub rating: f64,

    #[serde(default)]
    pub total_reviews: u32,

    #[serde(default)]
    pub featured: bool,

    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Weekly opening hours, one entry per weekday
    pub timings: Vec<Timing>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscription_plans: Vec<SubscriptionPlan>,
}

fn default_active() -> bool {
    true
}

impl Mess {
    /// Creates an active vegetarian mess with no cuisine, services or hours
    pub fn new<S: Into<String>>(id: S, name: S, location: Location, price_range: PriceRange) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            location,
            cuisine: BTreeSet::new(),
            is_veg: true,
            is_non_veg: false,
            price_range,
            service_types: BTreeSet::new(),
            rating: 0.0,
            total_reviews: 0,
            featured: false,
            is_active: true,
            timings: Vec::new(),
            subscription_plans: Vec::new(),
        }
    }

    pub fn with_cuisine(mut self, cuisine: &[CuisineType]) -> Self {
        self.cuisine = cuisine.iter().copied().collect();
        self
    }

    pub fn with_services(mut self, services: &[ServiceType]) -> Self {
        self.service_types = services.iter().copied().collect();
        self
    }

    pub fn with_rating(mut self, rating: f64, total_reviews: u32) -> Self {
        self.rating = rating;
        self.total_reviews = total_reviews;
        self
    }

    /// Sets the veg / non-veg flags
    pub fn with_diet(mut self, is_veg: bool, is_non_veg: bool) -> Self {
        self.is_veg = is_veg;
        self.is_non_veg = is_non_veg;
        self
    }

    pub fn with_timings(mut self, timings: Vec<Timing>) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_plans(mut self, plans: Vec<SubscriptionPlan>) -> Self {
        self.subscription_plans = plans;
        self
    }

    /// Checks if at least one subscription plan is open for sign-up
    pub fn offers_subscription(&self) -> bool {
        self.subscription_plans.iter().any(|plan| plan.is_active)
    }

    pub fn area(&self) -> &str {
        &self.location.area
    }

    /// Checks if the mess serves any of the given cuisines
    pub fn serves_any(&self, cuisines: &BTreeSet<CuisineType>) -> bool {
        !self.cuisine.is_disjoint(cuisines)
    }

    /// Checks if the mess offers any of the given service types
    pub fn offers_any(&self, services: &BTreeSet<ServiceType>) -> bool {
        !self.service_types.is_disjoint(services)
    }

    /// Case-insensitive substring match on name, description, area and cuisine
    pub fn matches_text(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.location.area.to_lowercase().contains(&needle)
            || self
                .cuisine
                .iter()
                .any(|c| c.label().to_lowercase().contains(&needle))
    }
}
