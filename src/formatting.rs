//! Text helpers shared by the report and the shell.

use chrono::Month;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Render a number of seconds as days, hours, minutes and seconds.
///
/// # Examples
///
/// ```
/// use bikeshare_stats::formatting::seconds_to_readable;
///
/// assert_eq!(seconds_to_readable(972_021), "11 days, 6 hours, 0 minutes, 21 seconds");
/// assert_eq!(seconds_to_readable(0), "0 days, 0 hours, 0 minutes, 0 seconds");
/// ```
pub fn seconds_to_readable(total: u64) -> String {
    let days = total / SECONDS_PER_DAY;
    let rem = total % SECONDS_PER_DAY;
    let hours = rem / SECONDS_PER_HOUR;
    let rem = rem % SECONDS_PER_HOUR;
    let minutes = rem / SECONDS_PER_MINUTE;
    let seconds = rem % SECONDS_PER_MINUTE;
    format!("{days} days, {hours} hours, {minutes} minutes, {seconds} seconds")
}

/// Render an hour of day (0..=23) on a 12-hour clock, e.g. `17` → `"05 PM"`.
pub fn format_hour_12(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h:02} {suffix}")
}

/// Upper-case the first letter of every word: `"new york city"` → `"New York City"`.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}
