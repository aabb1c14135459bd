//! Shared primitive types used across the dashboard.

/// A customer identifier as supplied by the caller and echoed by the service.
pub type CustomerId = String;

/// A monetary amount in whole currency units (Rupiah, no minor units).
pub type Amount = f64;

/// Placeholder shown wherever a value is absent.
pub const PLACEHOLDER: &str = "-";
