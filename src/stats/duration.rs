//! Trip duration totals.

use std::fmt;

use crate::config::ReportConfig;
use crate::formatting::seconds_to_readable;
use crate::types::TripTable;

use super::{Aggregate, write_line};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    /// Sum of all durations, truncated to whole seconds.
    pub total_seconds: u64,
    /// Mean over rows that carry a duration.
    pub mean_seconds: Option<f64>,
}

impl DurationStats {
    pub fn readable_total(&self) -> String {
        seconds_to_readable(self.total_seconds)
    }
}

impl Aggregate for DurationStats {
    const HEADING: &'static str = "Calculating Trip Duration...";

    fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let (sum, n) = table
            .rows
            .iter()
            .filter_map(|r| r.duration)
            .fold((0.0_f64, 0_usize), |(sum, n), d| (sum + d, n + 1));

        Some(Self {
            total_seconds: sum.max(0.0).trunc() as u64,
            mean_seconds: (n > 0).then(|| sum / n as f64),
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, _config: &ReportConfig) -> fmt::Result {
        write_line(f, "Total travel time:", format_args!("{} seconds", self.total_seconds))?;
        write_line(f, "", self.readable_total())?;
        match self.mean_seconds {
            Some(mean) => write_line(f, "Mean travel time:", format_args!("{mean:.2} seconds")),
            None => write_line(f, "Mean travel time:", "no data"),
        }
    }
}
