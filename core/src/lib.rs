//! Customer 360: profile lookup, derived metrics and display formatting
//! for a read-only banking customer dashboard.

pub mod classify;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
pub mod profile;
pub mod session;
pub mod types;
pub mod view;
