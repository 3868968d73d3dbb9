// Catalog data checks
//
// Nothing here rejects an entry: problems are reported as warnings and the
// evaluators already treat the affected data as closed or out of range.

use std::collections::BTreeMap;

use chrono::NaiveTime;

use crate::models::{DataIntegrityWarning, Day, Mess, WarningKind, TIME_FORMAT};

/// Collects every anomaly of a single mess
pub fn check_entry(mess: &Mess) -> Vec<DataIntegrityWarning> {
    let mut kinds = Vec::new();

    if !mess.location.coordinate.is_valid() {
        kinds.push(WarningKind::CoordinateOutOfRange);
    }

    if !(0.0..=5.0).contains(&mess.rating) {
        kinds.push(WarningKind::RatingOutOfRange(mess.rating));
    }

    let mut per_day: BTreeMap<Day, usize> = BTreeMap::new();
    for timing in &mess.timings {
        *per_day.entry(timing.day).or_insert(0) += 1;
    }
    for day in Day::ALL {
        match per_day.get(&day).copied().unwrap_or(0) {
            0 => kinds.push(WarningKind::MissingDay(day)),
            1 => {}
            _ => kinds.push(WarningKind::DuplicateDay(day)),
        }
    }

    for timing in mess.timings.iter().filter(|t| t.is_open) {
        let mut malformed = false;
        for value in [&timing.open_time, &timing.close_time] {
            if NaiveTime::parse_from_str(value, TIME_FORMAT).is_err() {
                malformed = true;
                kinds.push(WarningKind::MalformedTime {
                    day: timing.day,
                    value: value.clone(),
                });
            }
        }
        if !malformed && timing.spans_midnight() {
            kinds.push(WarningKind::OvernightSpan(timing.day));
        }
    }

    kinds
        .into_iter()
        .map(|kind| DataIntegrityWarning {
            mess_id: mess.id.clone(),
            kind,
        })
        .collect()
}

/// Collects the anomalies of a whole catalog snapshot, in catalog order
pub fn check_catalog(entries: &[Mess]) -> Vec<DataIntegrityWarning> {
    entries.iter().flat_map(check_entry).collect()
}
