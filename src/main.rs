use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use serde::de::DeserializeOwned;
use std::env;
use std::path::PathBuf;

use mess_discovery::algorithms::SearchEngine;
use mess_discovery::models::{
    Coordinate, CuisineType, FilterSpec, PriceRange, ServiceType, SortField, SortOrder,
};
use mess_discovery::utils::catalog::{generate_catalog, JsonFileCatalog, StaticCatalog};
use mess_discovery::utils::clock::SystemClock;
use mess_discovery::utils::distance::format_distance;
use mess_discovery::MessSearch;

/// Search a mess catalog by cuisine, price, service, diet, area and distance.
/// {n}Without --catalog a synthetic catalog around Pune is generated.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON file holding an array of messes
    #[arg(short, long, env = "MESS_CATALOG")]
    catalog: Option<PathBuf>,
    /// Number of messes in the synthetic catalog
    #[arg(long, default_value_t = 40)]
    size: usize,
    /// Seed of the synthetic catalog
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Free-text match on name, description, area or cuisine
    #[arg(short, long)]
    query: Option<String>,
    /// Cuisines, comma separated (e.g. north_indian,gujarati)
    #[arg(long, value_delimiter = ',', value_parser = parse_enum::<CuisineType>)]
    cuisine: Vec<CuisineType>,
    /// Price ranges, comma separated (budget, moderate, premium)
    #[arg(long, value_delimiter = ',', value_parser = parse_enum::<PriceRange>)]
    price: Vec<PriceRange>,
    /// Service types, comma separated (pickup, delivery, dine_in)
    #[arg(long, value_delimiter = ',', value_parser = parse_enum::<ServiceType>)]
    service: Vec<ServiceType>,
    #[arg(long)]
    veg_only: bool,
    #[arg(long, conflicts_with = "veg_only")]
    non_veg_only: bool,
    /// Exact area name
    #[arg(long)]
    area: Option<String>,
    /// Latitude of the search origin
    #[arg(long, env = "MESS_ORIGIN_LAT", allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,
    /// Longitude of the search origin
    #[arg(long, env = "MESS_ORIGIN_LON", allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,
    /// Search radius around the origin in km
    #[arg(long, env = "MESS_RADIUS_KM", default_value_t = 10.0)]
    radius: f64,
    #[arg(long)]
    min_rating: Option<f64>,
    /// Hide messes marked inactive
    #[arg(long)]
    active_only: bool,
    /// Only messes offering an active subscription plan
    #[arg(long)]
    with_subscription: bool,
    /// Sort by rating, distance, price or popularity
    #[arg(long, value_parser = parse_enum::<SortField>)]
    sort: Option<SortField>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,
    /// Evaluate opening hours at this local time ("YYYY-MM-DD HH:MM")
    #[arg(long, value_parser = parse_instant)]
    at: Option<NaiveDateTime>,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
    /// Enable verbose logging{n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

fn parse_enum<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_string()))
        .map_err(|_| format!("unknown value '{}'", value))
}

fn parse_instant(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").map_err(|e| e.to_string())
}

fn logger_init(verbose: bool) {
    if verbose {
        env::set_var("RUST_LOG", "debug");
    }

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module(
            "mess_discovery",
            if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
                == "debug"
            {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();
}

impl Args {
    fn filter_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new()
            .cuisine(&self.cuisine)
            .price_range(&self.price)
            .service_types(&self.service);
        spec.query = self.query.clone();
        spec.area = self.area.clone();
        spec.min_rating = self.min_rating;
        if self.veg_only {
            spec = spec.veg_only();
        }
        if self.non_veg_only {
            spec = spec.non_veg_only();
        }
        if self.active_only {
            spec = spec.active_only();
        }
        if self.with_subscription {
            spec = spec.with_subscription();
        }
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            spec = spec.near(Coordinate::new(lat, lon), self.radius);
        }
        if let Some(field) = self.sort {
            let order = if self.desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            };
            spec = spec.sort_by(field, order);
        }
        spec
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger_init(args.verbose);

    let spec = args.filter_spec();
    log::debug!("Filter: {:?}", spec);

    let outcome = match &args.catalog {
        Some(path) => MessSearch::new(JsonFileCatalog::new(path), SystemClock)
            .search(&spec, args.at)
            .with_context(|| format!("search over {} failed", path.display()))?,
        None => {
            log::info!(
                "No catalog given, generating {} messes (seed {})",
                args.size,
                args.seed
            );
            MessSearch::new(
                StaticCatalog::new(generate_catalog(args.size, args.seed)),
                SystemClock,
            )
            .search(&spec, args.at)?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.is_empty() {
        println!("No messes match the current filters.");
    }
    for (i, result) in outcome.results.iter().enumerate() {
        let mess = &result.mess;
        println!(
            "{:>3}. {} ({}) - {}",
            i + 1,
            mess.name,
            mess.area(),
            if result.is_open_now { "open" } else { "closed" }
        );
        println!(
            "     rating {:.1} ({} reviews), {:?}{}",
            mess.rating,
            mess.total_reviews,
            mess.price_range,
            result
                .distance_km
                .map(|d| format!(", {} away", format_distance(d)))
                .unwrap_or_default()
        );
    }
    if !outcome.warnings.is_empty() {
        println!("{} catalog warnings, see log output", outcome.warnings.len());
    }

    Ok(())
}
