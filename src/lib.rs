// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::search::{search, MessSearch};
pub use algorithms::SearchEngine;
pub use error::{CatalogError, EngineError, EngineResult};
pub use models::{AnnotatedResult, Coordinate, FilterSpec, Mess, SearchOutcome, SubscriptionPlan};
