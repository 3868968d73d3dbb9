// Subscription rates and delivery fees
//
// All currency results are rounded half-up to whole rupees.

use crate::error::{invalid, EngineResult};
use crate::models::Price;

/// Orders at or above this amount are delivered for free
pub const FREE_DELIVERY_THRESHOLD: Price = 300.0;
pub const BASE_DELIVERY_FEE: Price = 30.0;
/// Distance covered by the base fee
pub const FREE_DISTANCE_KM: f64 = 5.0;
pub const PER_KM_FEE: Price = 5.0;

/// Rounds to the nearest integer, halves going up
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn check_total(total_price: Price) -> EngineResult<()> {
    if !total_price.is_finite() || total_price < 0.0 {
        return invalid(format!("total price must be >= 0, got {}", total_price));
    }
    Ok(())
}

/// Price per day of a plan
pub fn daily_rate(total_price: Price, duration_days: i64) -> EngineResult<Price> {
    check_total(total_price)?;
    if duration_days <= 0 {
        return invalid(format!("duration must be positive, got {} days", duration_days));
    }
    Ok(round_half_up(total_price / duration_days as f64))
}

/// Price per meal of a plan
pub fn meal_rate(total_price: Price, duration_days: i64, meals_per_day: i64) -> EngineResult<Price> {
    check_total(total_price)?;
    if duration_days <= 0 {
        return invalid(format!("duration must be positive, got {} days", duration_days));
    }
    if meals_per_day <= 0 {
        return invalid(format!(
            "meals per day must be positive, got {}",
            meals_per_day
        ));
    }
    Ok(round_half_up(
        total_price / (duration_days as f64 * meals_per_day as f64),
    ))
}

/// Delivery fee for an order of `order_amount` delivered over `distance_km`
///
/// `distance_km` must be non-negative.
pub fn delivery_fee(order_amount: Price, distance_km: f64) -> Price {
    if order_amount >= FREE_DELIVERY_THRESHOLD {
        return 0.0;
    }

    let mut fee = BASE_DELIVERY_FEE;
    if distance_km > FREE_DISTANCE_KM {
        fee += round_half_up((distance_km - FREE_DISTANCE_KM) * PER_KM_FEE);
    }
    fee
}
