//! `bikeshare-stats` loads a city's bikeshare trip log into an in-memory
//! [`types::TripTable`], narrows it by month and/or day of week, and prints descriptive
//! statistics about it.
//!
//! The primary entrypoints are [`ingestion::load_city`] (config-keyed CSV loading),
//! [`processing::TripFilter`] (month/day filtering) and [`report::write_report`] (the four
//! report sections). [`shell::Shell`] wires them into the interactive prompt loop used by the
//! `bikeshare` binary.
//!
//! ## What gets loaded
//!
//! A trip log is a CSV with the header contract `Start Time`, `End Time`, `Start Station`,
//! `End Station`, `Trip Duration`, `User Type` and, for some cities, `Gender` and
//! `Birth Year`. Month, day of week and hour are derived from `Start Time` at load time; a
//! timestamp that does not parse leaves the row without calendar fields instead of failing
//! the load.
//!
//! ## Quick example
//!
//! ```no_run
//! use bikeshare_stats::config::ReportConfig;
//! use bikeshare_stats::ingestion::{load_city, LoadOptions};
//! use bikeshare_stats::processing::TripFilter;
//! use bikeshare_stats::report::write_report;
//!
//! # fn main() -> Result<(), bikeshare_stats::BikeshareError> {
//! let config = ReportConfig::default().with_data_dir("data");
//! let table = load_city(&config, "chicago", &LoadOptions::default())?;
//! let filtered = TripFilter::from_names(&config, "june", "all")?.apply(&table);
//! write_report(&mut std::io::stdout(), &filtered, &config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: city/month/day menus and data directory
//! - [`ingestion`]: CSV loading and load observers
//! - [`processing`]: filtering and value counting
//! - [`stats`]: the four report sections
//! - [`report`]: section rendering with timings
//! - [`shell`]: interactive prompts
//! - [`formatting`]: durations, clock hours, names
//! - [`error`]: the shared error type

pub mod config;
pub mod error;
pub mod formatting;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod shell;
pub mod stats;
pub mod types;

pub use error::{BikeshareError, BikeshareResult};
