// Subscription plans and the subscriptions bought from them

use crate::error::{invalid, EngineResult};
use crate::models::{MessId, Price, PriceRange};
use crate::utils::pricing;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A subscription offering of a mess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: String,
    pub mess_id: MessId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Length of the plan in days
    #[serde(rename = "duration")]
    pub duration_days: u32,
    /// Flat price for the whole plan
    #[serde(rename = "price")]
    pub total_price: Price,
    pub meals_per_day: u32,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Derived per-day and per-meal pricing of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanQuote {
    pub daily_rate: Price,
    pub meal_rate: Price,
    pub price_range: PriceRange,
}

impl SubscriptionPlan {
    pub fn new<S: Into<String>>(
        id: S,
        mess_id: S,
        name: S,
        duration_days: u32,
        total_price: Price,
        meals_per_day: u32,
    ) -> Self {
        Self {
            id: id.into(),
            mess_id: mess_id.into(),
            name: name.into(),
            description: String::new(),
            duration_days,
            total_price,
            meals_per_day,
            includes: Vec::new(),
            is_active: true,
        }
    }

    pub fn with_includes(mut self, includes: &[&str]) -> Self {
        self.includes = includes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn daily_rate(&self) -> EngineResult<Price> {
        pricing::daily_rate(self.total_price, i64::from(self.duration_days))
    }

    pub fn meal_rate(&self) -> EngineResult<Price> {
        pricing::meal_rate(
            self.total_price,
            i64::from(self.duration_days),
            i64::from(self.meals_per_day),
        )
    }

    pub fn quote(&self) -> EngineResult<PlanQuote> {
        let meal_rate = self.meal_rate()?;
        Ok(PlanQuote {
            daily_rate: self.daily_rate()?,
            meal_rate,
            price_range: PriceRange::for_meal_rate(meal_rate),
        })
    }
}

/// Picks the requested plan, or the first active plan when none is requested
pub fn select_plan<'a>(
    plans: &'a [SubscriptionPlan],
    plan_id: Option<&str>,
) -> Option<&'a SubscriptionPlan> {
    match plan_id {
        Some(id) => plans.iter().find(|plan| plan.id == id),
        None => plans.iter().find(|plan| plan.is_active),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

/// A user's subscription to a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub mess_id: MessId,
    pub plan_id: String,
    pub start_date: NaiveDate,
    /// First day no longer covered by the plan
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub payment_status: PaymentStatus,
}

impl Subscription {
    /// Starts a pending-payment subscription running for the plan's duration
    ///
    /// Fails when the end date falls outside the supported calendar.
    pub fn start<S: Into<String>>(
        id: S,
        user_id: S,
        plan: &SubscriptionPlan,
        start_date: NaiveDate,
    ) -> EngineResult<Self> {
        let Some(end_date) =
            start_date.checked_add_signed(Duration::days(i64::from(plan.duration_days)))
        else {
            return invalid(format!(
                "plan {} of {} days starting {} ends past the supported calendar",
                plan.id, plan.duration_days, start_date
            ));
        };

        Ok(Self {
            id: id.into(),
            user_id: user_id.into(),
            mess_id: plan.mess_id.clone(),
            plan_id: plan.id.clone(),
            start_date,
            end_date,
            status: SubscriptionStatus::Active,
            payment_status: PaymentStatus::Pending,
        })
    }

    /// Checks if the subscription delivers meals on `date`
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.status == SubscriptionStatus::Active && self.start_date <= date && date < self.end_date
    }

    /// Whole days left from `date` until the end date
    pub fn days_remaining(&self, date: NaiveDate) -> i64 {
        (self.end_date - date).num_days().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn monthly_plan() -> SubscriptionPlan {
        SubscriptionPlan::new("1", "m1", "Monthly Plan", 30, 3000.0, 2)
            .with_includes(&["Lunch", "Dinner", "Free delivery"])
    }

    #[test]
    fn test_plan_quote() {
        let quote = monthly_plan().quote().unwrap();
        assert_eq!(quote.daily_rate, 100.0);
        assert_eq!(quote.meal_rate, 50.0);
        assert_eq!(quote.price_range, PriceRange::Budget);
    }

    #[test]
    fn test_plan_quote_rejects_zero_meals() {
        let plan = SubscriptionPlan::new("2", "m1", "Broken", 7, 800.0, 0);
        assert!(matches!(plan.quote(), Err(EngineError::InvalidArgument(_))));
        assert_eq!(plan.daily_rate().unwrap(), 114.0);
    }

    #[test]
    fn test_plan_json_field_names() {
        let json = r#"{"id":"3","messId":"m1","name":"Lunch Only","duration":30,
                       "price":1800,"mealsPerDay":1,"includes":["Lunch"]}"#;
        let plan: SubscriptionPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.duration_days, 30);
        assert_eq!(plan.total_price, 1800.0);
        assert_eq!(plan.meal_rate().unwrap(), 60.0);
        assert!(plan.is_active);
    }

    #[test]
    fn test_select_plan() {
        let mut weekly = SubscriptionPlan::new("2", "m1", "Weekly Plan", 7, 800.0, 2);
        weekly.is_active = false;
        let plans = vec![weekly, monthly_plan()];

        assert_eq!(select_plan(&plans, Some("2")).unwrap().name, "Weekly Plan");
        assert_eq!(select_plan(&plans, None).unwrap().id, "1");
        assert!(select_plan(&plans, Some("9")).is_none());
    }

    #[test]
    fn test_subscription_window() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let sub = Subscription::start("s1", "u1", &monthly_plan(), start).unwrap();

        assert_eq!(sub.end_date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(sub.payment_status, PaymentStatus::Pending);
        assert!(sub.is_active_on(start));
        assert!(sub.is_active_on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!sub.is_active_on(sub.end_date));
        assert!(!sub.is_active_on(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert_eq!(sub.days_remaining(start), 30);
        assert_eq!(sub.days_remaining(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()), 0);
    }

    #[test]
    fn test_cancelled_subscription_is_inactive() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut sub = Subscription::start("s1", "u1", &monthly_plan(), start).unwrap();
        sub.status = SubscriptionStatus::Cancelled;
        assert!(!sub.is_active_on(start));
    }

    #[test]
    fn test_subscription_past_calendar_end_is_rejected() {
        let plan = SubscriptionPlan::new("9", "m1", "Forever", u32::MAX, 100.0, 1);
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let err = Subscription::start("s1", "u1", &plan, start).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }
}
