// Search criteria for the mess catalog

use crate::error::{invalid, EngineResult};
use crate::models::{Coordinate, CuisineType, PriceRange, ServiceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Rating,
    Distance,
    Price,
    Popularity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptions {
    pub field: SortField,
    pub order: SortOrder,
}

/// Filter criteria; every `None` (or empty set) leaves that dimension unconstrained
///
/// Dimensions are combined with AND, values inside a set with OR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Free-text match on name, description, area and cuisine
    pub query: Option<String>,
    pub cuisine: Option<BTreeSet<CuisineType>>,
    pub price_range: Option<BTreeSet<PriceRange>>,
    pub service_types: Option<BTreeSet<ServiceType>>,
    pub is_veg_only: Option<bool>,
    pub is_non_veg_only: Option<bool>,
    /// Exact area name; an empty string is unconstrained
    pub area: Option<String>,
    pub origin: Option<Coordinate>,
    /// Only used together with `origin`
    pub radius_km: Option<f64>,
    pub min_rating: Option<f64>,
    /// `Some(true)` keeps only messes marked active
    pub active_only: Option<bool>,
    /// `Some(true)` keeps only messes offering an active subscription plan
    pub has_subscription: Option<bool>,
    pub sort: Option<SortOptions>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn cuisine(mut self, cuisine: &[CuisineType]) -> Self {
        self.cuisine = Some(cuisine.iter().copied().collect());
        self
    }

    pub fn price_range(mut self, ranges: &[PriceRange]) -> Self {
        self.price_range = Some(ranges.iter().copied().collect());
        self
    }

    pub fn service_types(mut self, services: &[ServiceType]) -> Self {
        self.service_types = Some(services.iter().copied().collect());
        self
    }

    pub fn veg_only(mut self) -> Self {
        self.is_veg_only = Some(true);
        self
    }

    pub fn non_veg_only(mut self) -> Self {
        self.is_non_veg_only = Some(true);
        self
    }

    pub fn area<S: Into<String>>(mut self, area: S) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn near(mut self, origin: Coordinate, radius_km: f64) -> Self {
        self.origin = Some(origin);
        self.radius_km = Some(radius_km);
        self
    }

    pub fn origin(mut self, origin: Coordinate) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = Some(true);
        self
    }

    pub fn with_subscription(mut self) -> Self {
        self.has_subscription = Some(true);
        self
    }

    pub fn sort_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some(SortOptions { field, order });
        self
    }

    /// Radius of the proximity filter, present only when an origin is set too
    pub fn proximity(&self) -> Option<(Coordinate, f64)> {
        match (self.origin, self.radius_km) {
            (Some(origin), Some(radius)) => Some((origin, radius)),
            _ => None,
        }
    }

    /// Rejects malformed numeric criteria before any entry is inspected
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(radius) = self.radius_km {
            if !radius.is_finite() || radius < 0.0 {
                return invalid(format!("radius must be a non-negative distance, got {}", radius));
            }
        }
        if let Some(origin) = self.origin {
            if !origin.is_valid() {
                return invalid(format!(
                    "origin ({}, {}) is outside the valid coordinate range",
                    origin.latitude, origin.longitude
                ));
            }
        }
        if let Some(rating) = self.min_rating {
            if !(0.0..=5.0).contains(&rating) {
                return invalid(format!("minimum rating must lie in [0, 5], got {}", rating));
            }
        }
        Ok(())
    }
}
