//! Report sections computed over a (filtered) [`TripTable`].
//!
//! Each section is a pure function of the table. `compute` returns `None` when there is
//! nothing to aggregate, and the report prints a "no data" line instead of a value.
//! Sections are rendered against the [`ReportConfig`] so month and day names match the menus.

pub mod duration;
pub mod stations;
pub mod time;
pub mod users;

use std::fmt;

use crate::config::ReportConfig;
use crate::types::TripTable;

pub use duration::DurationStats;
pub use stations::{Ranked, StationStats};
pub use time::TimeStats;
pub use users::{BirthYearStats, UserStats};

/// A report section.
pub trait Aggregate: Sized {
    /// Line printed before the section is computed.
    const HEADING: &'static str;

    /// Line printed when the table has rows but none carry what this section needs.
    const NO_VALUES: &'static str = "    No usable values in the selected trips.";

    fn compute(table: &TripTable) -> Option<Self>;

    fn render(&self, f: &mut fmt::Formatter<'_>, config: &ReportConfig) -> fmt::Result;

    /// Pair the section with the config it is rendered against.
    fn display<'a>(&'a self, config: &'a ReportConfig) -> Rendered<'a, Self> {
        Rendered { section: self, config }
    }
}

/// [`fmt::Display`] adapter returned by [`Aggregate::display`].
pub struct Rendered<'a, A> {
    section: &'a A,
    config: &'a ReportConfig,
}

impl<A: Aggregate> fmt::Display for Rendered<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.section.render(f, self.config)
    }
}

/// Label column width for `label value` lines.
pub(crate) const LABEL_WIDTH: usize = 36;

pub(crate) fn write_line(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "    {label:<width$}{value}", width = LABEL_WIDTH)
}
