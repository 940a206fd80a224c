//! Most popular stations and trip.

use std::fmt;

use crate::config::ReportConfig;
use crate::processing::Tally;
use crate::types::TripTable;

use super::{Aggregate, write_line};

/// A most-frequent value with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<K> {
    pub value: K,
    pub count: usize,
}

impl<K> Ranked<K> {
    fn from_mode<Q>(tally: &Tally<Q>, to_owned: impl FnOnce(&Q) -> K) -> Option<Self>
    where
        Q: Ord,
    {
        tally.mode().map(|(value, count)| Self {
            value: to_owned(value),
            count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// Rows in the table, the denominator for the station counts.
    pub trips: usize,
    pub start: Option<Ranked<String>>,
    pub end: Option<Ranked<String>>,
    /// Most frequent ordered (start, end) pair.
    pub route: Option<Ranked<(String, String)>>,
}

impl Aggregate for StationStats {
    const HEADING: &'static str = "Calculating The Most Popular Stations and Trip...";

    fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let mut starts = Tally::new();
        let mut ends = Tally::new();
        let mut routes = Tally::new();
        for row in &table.rows {
            let start = row.start_station.as_deref();
            let end = row.end_station.as_deref();
            if let Some(s) = start {
                starts.add(s);
            }
            if let Some(e) = end {
                ends.add(e);
            }
            if let (Some(s), Some(e)) = (start, end) {
                routes.add((s, e));
            }
        }

        Some(Self {
            trips: table.row_count(),
            start: Ranked::from_mode(&starts, |s: &&str| (*s).to_owned()),
            end: Ranked::from_mode(&ends, |s: &&str| (*s).to_owned()),
            route: Ranked::from_mode(&routes, |(s, e): &(&str, &str)| ((*s).to_owned(), (*e).to_owned())),
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, _config: &ReportConfig) -> fmt::Result {
        match &self.start {
            Some(r) => {
                write_line(f, "The most common start station is:", &r.value)?;
                write_line(f, "", format_args!("{}/{} trips", r.count, self.trips))?;
            }
            None => write_line(f, "The most common start station is:", "no data")?,
        }
        match &self.end {
            Some(r) => {
                write_line(f, "The most common end station is:", &r.value)?;
                write_line(f, "", format_args!("{}/{} trips", r.count, self.trips))?;
            }
            None => write_line(f, "The most common end station is:", "no data")?,
        }
        match &self.route {
            Some(r) => {
                write_line(f, "The most frequent trip is:", format_args!("{}, {}", r.value.0, r.value.1))?;
                write_line(f, "", format_args!("{} trips", r.count))
            }
            None => write_line(f, "The most frequent trip is:", "no data"),
        }
    }
}
