use std::cmp::Ordering;

use crate::error::EngineResult;
use crate::models::{FilterSpec, Mess, SortField, SortOptions, SortOrder};
use crate::utils::distance::distance_km;

/// A mess that passed the filter, with its distance from the search origin
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub mess: &'a Mess,
    pub distance_km: Option<f64>,
}

/// Filters a catalog against a spec, keeping the catalog order
///
/// A proximity filter (origin and radius) additionally sorts by ascending
/// distance; an explicit sort option replaces that ordering. Both sorts are
/// stable.
pub fn filter<'a>(entries: &'a [Mess], spec: &FilterSpec) -> EngineResult<Vec<&'a Mess>> {
    Ok(filter_candidates(entries, spec)?
        .into_iter()
        .map(|candidate| candidate.mess)
        .collect())
}

/// Same as [`filter`] but keeps the computed distances
pub fn filter_candidates<'a>(
    entries: &'a [Mess],
    spec: &FilterSpec,
) -> EngineResult<Vec<Candidate<'a>>> {
    spec.validate()?;

    let radius = spec.proximity().map(|(_, radius)| radius);

    let mut candidates: Vec<Candidate<'a>> = entries
        .iter()
        .filter(|mess| matches_attributes(mess, spec))
        .filter_map(|mess| {
            let distance = spec.origin.and_then(|origin| {
                let coordinate = mess.location.coordinate;
                // out-of-range coordinates never get a distance
                coordinate
                    .is_valid()
                    .then(|| distance_km(coordinate, origin))
            });

            if let Some(radius) = radius {
                match distance {
                    Some(d) if d <= radius => {}
                    _ => return None,
                }
            }

            Some(Candidate {
                mess,
                distance_km: distance,
            })
        })
        .collect();

    match spec.sort {
        Some(options) => sort_candidates(&mut candidates, options),
        None if radius.is_some() => sort_candidates(
            &mut candidates,
            SortOptions {
                field: SortField::Distance,
                order: SortOrder::Asc,
            },
        ),
        None => {}
    }

    log::debug!(
        "filter kept {} of {} messes",
        candidates.len(),
        entries.len()
    );

    Ok(candidates)
}

/// Every non-geographic constraint of the filter
fn matches_attributes(mess: &Mess, spec: &FilterSpec) -> bool {
    if spec.active_only == Some(true) && !mess.is_active {
        return false;
    }

    if spec.has_subscription == Some(true) && !mess.offers_subscription() {
        return false;
    }

    if let Some(query) = &spec.query {
        if !mess.matches_text(query) {
            return false;
        }
    }

    if let Some(cuisine) = spec.cuisine.as_ref().filter(|set| !set.is_empty()) {
        if !mess.serves_any(cuisine) {
            return false;
        }
    }

    if let Some(ranges) = spec.price_range.as_ref().filter(|set| !set.is_empty()) {
        if !ranges.contains(&mess.price_range) {
            return false;
        }
    }

    if let Some(services) = spec.service_types.as_ref().filter(|set| !set.is_empty()) {
        if !mess.offers_any(services) {
            return false;
        }
    }

    if spec.is_veg_only == Some(true) && !mess.is_veg {
        return false;
    }

    if spec.is_non_veg_only == Some(true) && !mess.is_non_veg {
        return false;
    }

    if let Some(area) = spec.area.as_deref().filter(|area| !area.is_empty()) {
        if mess.area() != area {
            return false;
        }
    }

    if let Some(min_rating) = spec.min_rating {
        if mess.rating.is_nan() || mess.rating < min_rating {
            return false;
        }
    }

    true
}

fn sort_candidates(candidates: &mut [Candidate<'_>], options: SortOptions) {
    candidates.sort_by(|a, b| {
        let ordering = match options.field {
            SortField::Rating => compare_f64(a.mess.rating, b.mess.rating),
            SortField::Price => a.mess.price_range.cmp(&b.mess.price_range),
            SortField::Popularity => a.mess.total_reviews.cmp(&b.mess.total_reviews),
            SortField::Distance => {
                // entries without a distance stay behind those with one
                return match (a.distance_km, b.distance_km) {
                    (Some(x), Some(y)) => directed(compare_f64(x, y), options.order),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
            }
        };
        directed(ordering, options.order)
    });
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
