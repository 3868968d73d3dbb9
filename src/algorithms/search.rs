use std::time::Instant;

use chrono::NaiveDateTime;
use rayon::prelude::*;

use crate::algorithms::filter::filter_candidates;
use crate::algorithms::integrity::check_catalog;
use crate::algorithms::SearchEngine;
use crate::error::EngineResult;
use crate::models::{AnnotatedResult, FilterSpec, Mess, SearchOutcome};
use crate::utils::catalog::CatalogProvider;
use crate::utils::clock::Clock;
use crate::utils::schedule::is_open_at;

/// Answers one query against a catalog snapshot at a given instant
///
/// Filters the snapshot, marks each surviving mess open or closed at
/// `instant` and attaches its distance when the filter carries an origin.
/// Anomalies in the snapshot come back as warnings, never as errors.
pub fn search(
    entries: &[Mess],
    spec: &FilterSpec,
    instant: NaiveDateTime,
) -> EngineResult<SearchOutcome> {
    let started = Instant::now();
    let candidates = filter_candidates(entries, spec)?;

    let warnings = check_catalog(entries);
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    // order-preserving collect keeps the output identical to a sequential run
    let results: Vec<AnnotatedResult> = candidates
        .par_iter()
        .map(|candidate| AnnotatedResult {
            mess: candidate.mess.clone(),
            is_open_now: is_open_at(&candidate.mess.timings, instant),
            distance_km: candidate.distance_km,
        })
        .collect();

    log::debug!(
        "search at {} returned {} results ({} warnings) in {:.2?}",
        instant,
        results.len(),
        warnings.len(),
        started.elapsed()
    );

    Ok(SearchOutcome { results, warnings })
}

/// Search engine bound to a catalog provider and a clock
pub struct MessSearch<P, C> {
    provider: P,
    clock: C,
}

impl<P: CatalogProvider, C: Clock> MessSearch<P, C> {
    pub fn new(provider: P, clock: C) -> Self {
        Self { provider, clock }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: CatalogProvider, C: Clock> SearchEngine for MessSearch<P, C> {
    fn search(
        &self,
        spec: &FilterSpec,
        instant: Option<NaiveDateTime>,
    ) -> EngineResult<SearchOutcome> {
        spec.validate()?;
        let snapshot = self.provider.fetch_snapshot()?;
        if snapshot.entries.is_empty() {
            log::info!("catalog provider returned no messes");
        }
        let instant = instant.unwrap_or_else(|| self.clock.now());

        let mut outcome = search(&snapshot.entries, spec, instant)?;
        // entries dropped while loading come first, in document order
        outcome.warnings.splice(0..0, snapshot.warnings);
        Ok(outcome)
    }
}
