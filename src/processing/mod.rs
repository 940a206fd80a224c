//! In-memory transformations over [`crate::types::TripTable`].
//!
//! - [`filter`]: month/day narrowing ([`TripFilter`])
//! - [`reduce`]: value counting ([`Tally`]) used by every aggregator
//!
//! ## Example: filter → count
//!
//! ```rust
//! use bikeshare_stats::config::ReportConfig;
//! use bikeshare_stats::processing::{Tally, TripFilter};
//! use bikeshare_stats::types::{Schema, TripRecord, TripTable};
//!
//! let ts = chrono::NaiveDate::from_ymd_opt(2017, 3, 6)
//!     .unwrap()
//!     .and_hms_opt(17, 30, 0)
//!     .unwrap();
//! let table = TripTable::new(Schema::trip_log(), vec![TripRecord::starting_at(Some(ts))]);
//!
//! let filter = TripFilter::from_names(&ReportConfig::default(), "march", "monday").unwrap();
//! let filtered = filter.apply(&table);
//!
//! let hours: Tally<u32> = filtered.calendars().map(|c| c.hour).collect();
//! assert_eq!(hours.mode(), Some((&17, 1)));
//! ```

pub mod filter;
pub mod reduce;

pub use filter::{ALL, TripFilter, filter_by_names};
pub use reduce::Tally;
