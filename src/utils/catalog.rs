use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::CatalogError;
use crate::models::{
    uniform_week, Coordinate, CuisineType, DataIntegrityWarning, Day, Location, Mess, PriceRange,
    ServiceType, SubscriptionPlan, Timing, WarningKind,
};

/// Entries of one catalog fetch plus the entries that had to be skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub entries: Vec<Mess>,
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Supplies catalog snapshots to the search engine
pub trait CatalogProvider {
    fn fetch_catalog(&self) -> Result<Vec<Mess>, CatalogError>;

    /// Like `fetch_catalog`, also reporting entries dropped while loading
    fn fetch_snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(CatalogSnapshot {
            entries: self.fetch_catalog()?,
            warnings: Vec::new(),
        })
    }
}

/// Catalog held in memory, returned as-is on every fetch
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<Mess>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<Mess>) -> Self {
        Self { entries }
    }
}

impl CatalogProvider for StaticCatalog {
    fn fetch_catalog(&self) -> Result<Vec<Mess>, CatalogError> {
        Ok(self.entries.clone())
    }
}

/// Catalog read from a JSON array of messes on every fetch
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn fetch_catalog(&self) -> Result<Vec<Mess>, CatalogError> {
        Ok(load_catalog(&self.path)?.entries)
    }

    fn fetch_snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        load_catalog(&self.path)
    }
}

pub fn load_catalog(path: &Path) -> Result<CatalogSnapshot, CatalogError> {
    let json = fs::read_to_string(path)?;
    let snapshot = parse_catalog(&json)?;
    log::info!(
        "Loaded {} messes from {} ({} skipped)",
        snapshot.entries.len(),
        path.display(),
        snapshot.warnings.len()
    );
    Ok(snapshot)
}

/// Parses a JSON array of messes, skipping entries that do not deserialize
///
/// Only a document that is not an array at all is an error.
pub fn parse_catalog(json: &str) -> Result<CatalogSnapshot, CatalogError> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let mut snapshot = CatalogSnapshot::default();

    for (index, value) in values.into_iter().enumerate() {
        let mess_id = entry_id(&value, index);
        match serde_json::from_value::<Mess>(value) {
            Ok(mess) => snapshot.entries.push(mess),
            Err(err) => {
                let warning = DataIntegrityWarning {
                    mess_id,
                    kind: WarningKind::MalformedEntry {
                        index,
                        reason: err.to_string(),
                    },
                };
                log::warn!("{}", warning);
                snapshot.warnings.push(warning);
            }
        }
    }

    Ok(snapshot)
}

// id of a raw entry, falling back to its position in the array
fn entry_id(value: &Value, index: usize) -> String {
    match value.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("#{}", index),
    }
}

pub fn save_catalog(path: &Path, entries: &[Mess]) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    log::info!("Saved {} messes to {}", entries.len(), path.display());
    Ok(())
}

/// Centre of the synthetic catalog (Pune)
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 18.5204,
    longitude: 73.8567,
};

pub const AREAS: [&str; 12] = [
    "Koregaon Park",
    "Viman Nagar",
    "Kothrud",
    "Deccan",
    "Shivaji Nagar",
    "Hadapsar",
    "Wakad",
    "Baner",
    "Aundh",
    "Magarpatta",
    "Kalyani Nagar",
    "FC Road",
];

const NAME_PREFIXES: [&str; 8] = [
    "Annapurna", "Aai's", "Swad", "Ghar Ka", "Tiffin", "Sai", "Shree", "Pune",
];
const NAME_SUFFIXES: [&str; 5] = ["Mess", "Kitchen", "Bhojanalay", "Tiffins", "Thali House"];

/// Generates a deterministic catalog of `size` messes around Pune
///
/// The same seed always yields the same catalog.
pub fn generate_catalog(size: usize, seed: u64) -> Vec<Mess> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..size)
        .map(|i| {
            let coordinate = Coordinate::new(
                DEFAULT_CENTER.latitude + rng.gen_range(-0.08..0.08),
                DEFAULT_CENTER.longitude + rng.gen_range(-0.08..0.08),
            );
            let area = AREAS[rng.gen_range(0..AREAS.len())];
            let name = format!(
                "{} {}",
                NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())],
                NAME_SUFFIXES[rng.gen_range(0..NAME_SUFFIXES.len())]
            );
            let price_range = [PriceRange::Budget, PriceRange::Moderate, PriceRange::Premium]
                [rng.gen_range(0..3)];

            let cuisine_count = rng.gen_range(1..=3);
            let cuisine: Vec<CuisineType> = CuisineType::ALL
                .choose_multiple(&mut rng, cuisine_count)
                .copied()
                .collect();

            let mut services = vec![ServiceType::Pickup];
            if rng.gen_bool(0.7) {
                services.push(ServiceType::Delivery);
            }
            if rng.gen_bool(0.3) {
                services.push(ServiceType::DineIn);
            }

            let is_veg = rng.gen_bool(0.6);
            let is_non_veg = !is_veg || rng.gen_bool(0.3);

            let mut timings = uniform_week("08:00", "21:30");
            if rng.gen_bool(0.4) {
                timings[6] = Timing::closed(Day::Sunday);
            }

            let mut mess = Mess::new(
                format!("mess-{}", i + 1),
                name,
                Location::new(coordinate, area).with_address(
                    format!("{} Lane, {}", i + 1, area),
                    String::from("Pune"),
                    format!("4110{:02}", rng.gen_range(1..60u32)),
                ),
                price_range,
            )
            .with_cuisine(&cuisine)
            .with_services(&services)
            .with_diet(is_veg, is_non_veg)
            .with_rating(f64::from(rng.gen_range(30..=50u32)) / 10.0, rng.gen_range(0..500))
            .with_timings(timings);
            mess.featured = rng.gen_bool(0.1);
            if rng.gen_bool(0.5) {
                let monthly_price = match price_range {
                    PriceRange::Budget => 3000.0,
                    PriceRange::Moderate => 5400.0,
                    PriceRange::Premium => 9000.0,
                };
                mess.subscription_plans = vec![SubscriptionPlan::new(
                    format!("{}-monthly", mess.id),
                    mess.id.clone(),
                    String::from("Monthly Plan"),
                    30,
                    monthly_price,
                    2,
                )];
            }
            mess
        })
        .collect()
}
