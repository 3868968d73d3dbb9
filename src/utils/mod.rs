pub mod catalog;
pub mod clock;
pub mod distance;
pub mod pricing;
pub mod schedule;
