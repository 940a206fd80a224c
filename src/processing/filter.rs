//! Month/day filtering for [`crate::types::TripTable`].

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::{BikeshareError, BikeshareResult};
use crate::types::{TripRecord, TripTable};

/// Menu value meaning "no filter".
pub const ALL: &str = "all";

/// A resolved month/day predicate.
///
/// `None` on either side means that side does not filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripFilter {
    /// 1-based month number.
    pub month: Option<u32>,
    /// 0-based day index, Monday = 0.
    pub day: Option<u32>,
}

impl TripFilter {
    /// Resolve menu names (or `"all"`) against the configured month and day lists.
    pub fn from_names(config: &ReportConfig, month: &str, day: &str) -> BikeshareResult<Self> {
        let month = if month.eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(
                config
                    .month_number(month)
                    .ok_or_else(|| BikeshareError::UnknownMonth(month.to_string()))?,
            )
        };
        let day = if day.eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(
                config
                    .day_index(day)
                    .ok_or_else(|| BikeshareError::UnknownDay(day.to_string()))?,
            )
        };
        Ok(Self { month, day })
    }

    /// Returns `true` if the filter keeps every row.
    pub fn is_all(&self) -> bool {
        self.month.is_none() && self.day.is_none()
    }

    /// Returns `true` if `row` passes both sides of the filter.
    ///
    /// Rows without calendar fields only pass an unrestricted filter.
    pub fn matches(&self, row: &TripRecord) -> bool {
        if self.is_all() {
            return true;
        }
        let Some(cal) = row.calendar else {
            return false;
        };
        self.month.is_none_or(|m| cal.month == m) && self.day.is_none_or(|d| cal.day_index() == d)
    }

    /// Apply the filter, returning a new table in the original row order.
    pub fn apply(&self, table: &TripTable) -> TripTable {
        let out = table.filter_rows(|row| self.matches(row));
        debug!(
            month = ?self.month,
            day = ?self.day,
            rows_in = table.row_count(),
            rows_out = out.row_count(),
            "filter applied"
        );
        out
    }
}

/// Filter `table` by month and day names, each of which may be `"all"`.
pub fn filter_by_names(
    config: &ReportConfig,
    table: &TripTable,
    month: &str,
    day: &str,
) -> BikeshareResult<TripTable> {
    Ok(TripFilter::from_names(config, month, day)?.apply(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Schema;
    use chrono::NaiveDate;

    fn trip(month: u32, day: u32, hour: u32) -> TripRecord {
        let ts = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        TripRecord::starting_at(Some(ts))
    }

    fn sample_table() -> TripTable {
        TripTable::new(
            Schema::trip_log(),
            vec![
                trip(1, 2, 8),  // Monday
                trip(1, 3, 9),  // Tuesday
                trip(2, 6, 10), // Monday
                trip(3, 7, 11), // Tuesday
                TripRecord::starting_at(None),
                trip(2, 7, 12), // Tuesday
            ],
        )
    }

    #[test]
    fn all_all_returns_table_unchanged() {
        let table = sample_table();
        let out = filter_by_names(&ReportConfig::default(), &table, "all", "all").unwrap();
        assert_eq!(out, table);
    }

    #[test]
    fn month_filter_uses_one_based_index() {
        let table = sample_table();
        let out = filter_by_names(&ReportConfig::default(), &table, "february", "all").unwrap();
        assert_eq!(out.row_count(), 2);
        assert!(out.calendars().all(|c| c.month == 2));
    }

    #[test]
    fn day_filter_uses_monday_zero() {
        let table = sample_table();
        let out = filter_by_names(&ReportConfig::default(), &table, "all", "monday").unwrap();
        assert_eq!(out.row_count(), 2);
        assert!(out.calendars().all(|c| c.day_index() == 0));
    }

    #[test]
    fn filters_compose_and_keep_order() {
        let table = sample_table();
        let config = ReportConfig::default();
        let both = filter_by_names(&config, &table, "february", "tuesday").unwrap();
        assert_eq!(both.rows, vec![table.rows[5].clone()]);

        let month_then_day = filter_by_names(
            &config,
            &filter_by_names(&config, &table, "february", "all").unwrap(),
            "all",
            "tuesday",
        )
        .unwrap();
        let day_then_month = filter_by_names(
            &config,
            &filter_by_names(&config, &table, "all", "tuesday").unwrap(),
            "february",
            "all",
        )
        .unwrap();
        assert_eq!(month_then_day, both);
        assert_eq!(day_then_month, both);
    }

    #[test]
    fn filtered_rows_are_subset_of_input() {
        let table = sample_table();
        let config = ReportConfig::default();
        for month in config.months.iter().map(String::as_str).chain([ALL]) {
            for day in config.days.iter().map(String::as_str).chain([ALL]) {
                let out = filter_by_names(&config, &table, month, day).unwrap();
                assert!(out.rows.iter().all(|r| table.rows.contains(r)));
            }
        }
    }

    #[test]
    fn rows_without_calendar_only_survive_all() {
        let table = sample_table();
        let out = filter_by_names(&ReportConfig::default(), &table, "january", "all").unwrap();
        assert!(out.rows.iter().all(|r| r.calendar.is_some()));
    }

    #[test]
    fn unknown_names_are_errors() {
        let config = ReportConfig::default();
        assert!(matches!(
            TripFilter::from_names(&config, "july", "all"),
            Err(BikeshareError::UnknownMonth(_))
        ));
        assert!(matches!(
            TripFilter::from_names(&config, "all", "someday"),
            Err(BikeshareError::UnknownDay(_))
        ));
    }
}
