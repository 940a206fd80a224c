use bikeshare_stats::config::ReportConfig;
use bikeshare_stats::ingestion::{LoadOptions, load_city};
use bikeshare_stats::processing::{TripFilter, filter_by_names};
use bikeshare_stats::report::{CityReport, NO_DATA, write_report};
use bikeshare_stats::stats::{Aggregate, BirthYearStats, DurationStats, StationStats, TimeStats, UserStats};

fn config() -> ReportConfig {
    ReportConfig::default().with_data_dir("tests/fixtures")
}

fn render(city: &str, month: &str, day: &str) -> String {
    let config = config();
    let table = load_city(&config, city, &LoadOptions::default()).unwrap();
    let filtered = filter_by_names(&config, &table, month, day).unwrap();
    let mut out = Vec::new();
    write_report(&mut out, &filtered, &config).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn chicago_all_all_has_every_section() {
    let text = render("chicago", "all", "all");

    for heading in [
        TimeStats::HEADING,
        StationStats::HEADING,
        DurationStats::HEADING,
        UserStats::HEADING,
    ] {
        assert!(text.contains(heading), "missing section {heading}");
    }
    assert!(!text.contains(NO_DATA));
    assert!(text.contains("5547 seconds"));
    assert!(text.contains("0 days, 1 hours, 32 minutes, 27 seconds"));
    assert_eq!(text.matches("Total travel time").count(), 1);
    assert!(text.contains("Year of Birth"));
}

#[test]
fn chicago_all_all_values() {
    let config = config();
    let table = load_city(&config, "chicago", &LoadOptions::default()).unwrap();
    let filtered = TripFilter::from_names(&config, "all", "all").unwrap().apply(&table);
    assert_eq!(filtered, table);

    let report = CityReport::compute(&filtered);

    let column_sum: f64 = table.rows.iter().filter_map(|r| r.duration).sum();
    assert_eq!(report.duration.unwrap().total_seconds, column_sum as u64);

    // Monday, Tuesday, Thursday and Friday tie at two trips; 09 and 14 tie at two.
    assert_eq!(report.time, Some(TimeStats { month: 1, day: 0, hour: 9 }));

    let stations = report.stations.unwrap();
    assert_eq!(stations.trips, 10);
    let start = stations.start.unwrap();
    assert_eq!((start.value.as_str(), start.count), ("Wood St & Hubbard St", 4));
    let end = stations.end.unwrap();
    assert_eq!((end.value.as_str(), end.count), ("Canal St & Madison St", 3));
    let route = stations.route.unwrap();
    assert_eq!(route.value.0, "Wood St & Hubbard St");
    assert_eq!(route.value.1, "Damen Ave & Chicago Ave");
    assert_eq!(route.count, 3);

    let users = report.users.unwrap();
    assert_eq!(
        users.user_types,
        vec![("Subscriber".to_string(), 8), ("Customer".to_string(), 2)]
    );
    assert_eq!(
        users.genders,
        Some(vec![("Male".to_string(), 6), ("Female".to_string(), 2)])
    );
    assert_eq!(
        users.birth_years,
        Some(Some(BirthYearStats {
            earliest: 1975,
            most_recent: 1992,
            most_common: 1992
        }))
    );
}

#[test]
fn month_and_day_filters_narrow_the_report() {
    let config = config();
    let table = load_city(&config, "chicago", &LoadOptions::default()).unwrap();

    let january = filter_by_names(&config, &table, "january", "all").unwrap();
    assert_eq!(january.row_count(), 3);

    let june_mondays = filter_by_names(&config, &table, "june", "monday").unwrap();
    assert_eq!(june_mondays.row_count(), 1);
    let report = CityReport::compute(&june_mondays);
    assert_eq!(report.duration.unwrap().total_seconds, 586);
}

#[test]
fn empty_filter_result_reports_no_data() {
    let text = render("chicago", "february", "sunday");
    assert_eq!(text.matches(NO_DATA).count(), 4);
}

#[test]
fn washington_report_skips_demographics() {
    let text = render("washington", "all", "all");
    assert!(text.contains("Subscriber:"));
    assert!(!text.contains("Year of Birth"));
    assert!(!text.contains("Male"));
    assert!(text.contains("4905 seconds"));
}

#[test]
fn new_york_rows_without_timestamp_only_count_outside_time_keys() {
    let config = config();
    let table = load_city(&config, "new york city", &LoadOptions::default()).unwrap();
    let report = CityReport::compute(&table);

    // The row with an unparsable start time still counts toward durations and stations.
    assert_eq!(report.duration.unwrap().total_seconds, 5656);
    let start = report.stations.unwrap().start.unwrap();
    assert_eq!((start.value.as_str(), start.count), ("Suffolk St & Stanton St", 3));

    let june = filter_by_names(&config, &table, "june", "all").unwrap();
    assert_eq!(june.row_count(), 2);
}
