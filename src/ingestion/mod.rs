//! Trip log loading.
//!
//! Most callers should use [`load_city`], which:
//!
//! - resolves a city name against the configured city set
//! - reads the city's CSV into an in-memory [`crate::types::TripTable`]
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The raw reader lives in [`csv`].

pub mod city;
pub mod csv;
pub mod observability;

pub use city::{LoadOptions, load_city};
pub use observability::{CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver};
