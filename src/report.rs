//! Rendering of the four report sections.

use std::io::{self, Write};
use std::time::Instant;

use tracing::debug;

use crate::config::ReportConfig;
use crate::stats::{Aggregate, DurationStats, StationStats, TimeStats, UserStats};
use crate::types::TripTable;

pub const SEPARATOR_WIDTH: usize = 40;

/// Line printed in place of a section when the filters leave no trips. A section whose
/// trips lack the values it needs prints its [`Aggregate::NO_VALUES`] line instead.
pub const NO_DATA: &str = "    No trips match the selected filters.";

/// All sections computed over one filtered table.
#[derive(Debug, Clone, PartialEq)]
pub struct CityReport {
    pub time: Option<TimeStats>,
    pub stations: Option<StationStats>,
    pub duration: Option<DurationStats>,
    pub users: Option<UserStats>,
}

impl CityReport {
    pub fn compute(table: &TripTable) -> Self {
        Self {
            time: TimeStats::compute(table),
            stations: StationStats::compute(table),
            duration: DurationStats::compute(table),
            users: UserStats::compute(table),
        }
    }
}

/// Compute and print every section, each followed by its timing and a separator.
pub fn write_report<W: Write>(out: &mut W, table: &TripTable, config: &ReportConfig) -> io::Result<()> {
    write_section::<TimeStats, _>(out, table, config)?;
    write_section::<StationStats, _>(out, table, config)?;
    write_section::<DurationStats, _>(out, table, config)?;
    write_section::<UserStats, _>(out, table, config)
}

/// Compute one section and print it.
pub fn write_section<A: Aggregate, W: Write>(
    out: &mut W,
    table: &TripTable,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(out, "\n{}\n", A::HEADING)?;
    let start = Instant::now();

    match A::compute(table) {
        Some(section) => write!(out, "{}", section.display(config))?,
        None if table.is_empty() => writeln!(out, "{NO_DATA}")?,
        None => writeln!(out, "{}", A::NO_VALUES)?,
    }

    let elapsed = start.elapsed();
    debug!(section = A::HEADING, rows = table.row_count(), ?elapsed, "section computed");
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}
