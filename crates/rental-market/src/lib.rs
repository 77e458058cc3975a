//! Computational core of the rental marketplace: location autocomplete,
//! booking charge quotes, and search result filtering.

pub mod config;
pub mod error;
pub mod listings;
pub mod pricing;
pub mod search;
pub mod telemetry;
