//! Read-only dashboard aggregates

pub mod handlers;

pub use handlers::get_dashboard_stats;
