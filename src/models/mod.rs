// Models module - exports all model types

mod filter;
mod location;
mod mess;
mod order;
mod plan;
mod result;
mod timing;

// Re-export model types
pub use self::filter::{FilterSpec, SortField, SortOptions, SortOrder};
pub use self::location::{Coordinate, Location};
pub use self::mess::{CuisineType, Mess, PriceRange, ServiceType};
pub use self::order::{partition_orders, Order, OrderItem, OrderStatus, OrderType};
pub use self::plan::{
    select_plan, PaymentStatus, PlanQuote, Subscription, SubscriptionPlan, SubscriptionStatus,
};
pub use self::result::{AnnotatedResult, DataIntegrityWarning, SearchOutcome, WarningKind};
pub use self::timing::{uniform_week, Day, Timing, TIME_FORMAT};

// Common type aliases for improved code readability
pub type MessId = String;
/// Amount in whole or fractional rupees
pub type Price = f64;
