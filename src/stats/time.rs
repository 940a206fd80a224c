//! Most frequent times of travel.

use std::fmt;

use crate::config::ReportConfig;
use crate::formatting::format_hour_12;
use crate::processing::Tally;
use crate::types::TripTable;

use super::{Aggregate, write_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based month.
    pub month: u32,
    /// 0-based day, Monday = 0.
    pub day: u32,
    /// 0..=23.
    pub hour: u32,
}

impl Aggregate for TimeStats {
    const HEADING: &'static str = "Calculating The Most Frequent Times of Travel...";
    const NO_VALUES: &'static str = "    No selected trip has a readable start time.";

    /// Rows without calendar fields are ignored; `None` if no row has them.
    fn compute(table: &TripTable) -> Option<Self> {
        let mut months = Tally::new();
        let mut days = Tally::new();
        let mut hours = Tally::new();
        for cal in table.calendars() {
            months.add(cal.month);
            days.add(cal.day_index());
            hours.add(cal.hour);
        }

        Some(Self {
            month: *months.mode()?.0,
            day: *days.mode()?.0,
            hour: *hours.mode()?.0,
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, config: &ReportConfig) -> fmt::Result {
        let month = config.month_label(self.month);
        let day = config.day_label(self.day);
        write_line(f, "The most common month is:", month.as_deref().unwrap_or("?"))?;
        write_line(f, "The most common day of the week is:", day.as_deref().unwrap_or("?"))?;
        write_line(f, "The most common start hour is:", format_hour_12(self.hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::{table, trip};
    use crate::types::TripRecord;

    #[test]
    fn picks_most_frequent_month_day_and_hour() {
        let t = table(vec![
            trip(6, 5, 17),  // Monday
            trip(6, 6, 17),  // Tuesday
            trip(6, 12, 8),  // Monday
            trip(1, 3, 17),  // Tuesday
            trip(6, 19, 9),  // Monday
        ]);
        let stats = TimeStats::compute(&t).unwrap();
        assert_eq!(stats, TimeStats { month: 6, day: 0, hour: 17 });

        let text = stats.display(&ReportConfig::default()).to_string();
        assert!(text.contains("June"));
        assert!(text.contains("Monday"));
        assert!(text.contains("05 PM"));
    }

    #[test]
    fn ties_go_to_the_earliest_value() {
        let t = table(vec![trip(2, 7, 9), trip(1, 2, 8)]);
        let stats = TimeStats::compute(&t).unwrap();
        assert_eq!(stats.month, 1);
        assert_eq!(stats.day, 0);
        assert_eq!(stats.hour, 8);
    }

    #[test]
    fn rows_without_timestamps_are_skipped() {
        let t = table(vec![TripRecord::starting_at(None), trip(3, 1, 23)]);
        assert_eq!(TimeStats::compute(&t).unwrap().hour, 23);

        let only_bad = table(vec![TripRecord::starting_at(None)]);
        assert_eq!(TimeStats::compute(&only_bad), None);
    }

    #[test]
    fn names_come_from_the_configured_menus() {
        let mut config = ReportConfig::default();
        config.months = ["jan", "feb", "mar", "apr", "may", "jun"].map(String::from).to_vec();
        config.days = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"].map(String::from).to_vec();

        let stats = TimeStats { month: 2, day: 4, hour: 0 };
        let text = stats.display(&config).to_string();
        assert!(text.contains("Feb"), "{text}");
        assert!(text.contains("Fri"), "{text}");
        assert!(!text.contains("February"));
        assert!(!text.contains("Friday"));
    }

    #[test]
    fn month_outside_the_menu_uses_its_calendar_name() {
        let stats = TimeStats { month: 9, day: 6, hour: 12 };
        let text = stats.display(&ReportConfig::default()).to_string();
        assert!(text.contains("September"));
        assert!(text.contains("Sunday"));
        assert!(text.contains("12 PM"));
    }

    #[test]
    fn empty_table_has_no_stats() {
        assert_eq!(TimeStats::compute(&table(vec![])), None);
    }
}
