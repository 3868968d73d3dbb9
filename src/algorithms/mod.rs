pub mod filter;
pub mod integrity;
pub mod search;

use chrono::NaiveDateTime;

use crate::error::EngineResult;
use crate::models::{FilterSpec, SearchOutcome};

/// Query interface consumed by the presentation layer
pub trait SearchEngine {
    /// Search the current catalog; `instant` defaults to the engine's clock
    fn search(
        &self,
        spec: &FilterSpec,
        instant: Option<NaiveDateTime>,
    ) -> EngineResult<SearchOutcome>;
}
