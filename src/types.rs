//! Core data model for trip logs.
//!
//! A city's CSV is loaded into a [`TripTable`]: a [`Schema`] describing which columns the
//! source carried, plus one [`TripRecord`] per row in file order.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Column names of the trip log header contract.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";
}

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Calendar timestamp (`YYYY-MM-DD HH:MM:SS`).
    Timestamp,
    /// Number parsed as a float, truncated where an integer is needed.
    Float64,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Column header as it appears in the CSV.
    pub name: String,
    /// Column data type.
    pub data_type: DataType,
    /// Whether loading fails when the column is absent.
    pub required: bool,
}

impl Field {
    /// Create a required field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: true,
        }
    }

    /// Create a field that some cities do not publish.
    pub fn optional(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            required: false,
            ..Self::new(name, data_type)
        }
    }
}

/// Ordered list of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// The full trip header contract, optional demographic columns included.
    pub fn trip_log() -> Self {
        use columns::*;
        Self::new(vec![
            Field::new(START_TIME, DataType::Timestamp),
            Field::new(END_TIME, DataType::Utf8),
            Field::new(START_STATION, DataType::Utf8),
            Field::new(END_STATION, DataType::Utf8),
            Field::new(TRIP_DURATION, DataType::Float64),
            Field::new(USER_TYPE, DataType::Utf8),
            Field::optional(GENDER, DataType::Utf8),
            Field::optional(BIRTH_YEAR, DataType::Float64),
        ])
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns `true` if the schema has a column called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

/// Calendar attributes derived once from a trip's start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    /// 1 = January .. 12 = December.
    pub month: u32,
    pub weekday: Weekday,
    /// 0..=23.
    pub hour: u32,
}

impl CalendarFields {
    pub fn from_timestamp(ts: &NaiveDateTime) -> Self {
        Self {
            month: ts.month(),
            weekday: ts.weekday(),
            hour: ts.hour(),
        }
    }

    /// Day of week with Monday = 0.
    pub fn day_index(&self) -> u32 {
        self.weekday.num_days_from_monday()
    }
}

/// One ride entry. Text cells that were empty in the source are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: Option<NaiveDateTime>,
    /// Kept as written; nothing downstream reads it.
    pub end_time: Option<String>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Seconds.
    pub duration: Option<f64>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i64>,
    /// `None` when `start_time` could not be parsed.
    pub calendar: Option<CalendarFields>,
}

impl TripRecord {
    /// Build a record from its start timestamp, deriving the calendar fields.
    ///
    /// All other fields start out empty; callers fill in what their source carries.
    pub fn starting_at(start_time: Option<NaiveDateTime>) -> Self {
        Self {
            start_time,
            end_time: None,
            start_station: None,
            end_station: None,
            duration: None,
            user_type: None,
            gender: None,
            birth_year: None,
            calendar: start_time.as_ref().map(CalendarFields::from_timestamp),
        }
    }
}

/// In-memory trip log for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    /// Columns present in the source file.
    pub schema: Schema,
    /// Records in file order.
    pub rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(schema: Schema, rows: Vec<TripRecord>) -> Self {
        Self { schema, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Create a new table containing only rows that match `predicate`.
    ///
    /// The returned table keeps the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&TripRecord) -> bool,
    {
        let rows = self.rows.iter().filter(|row| predicate(row)).cloned().collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Iterate the calendar fields of rows whose start timestamp parsed.
    pub fn calendars(&self) -> impl Iterator<Item = &CalendarFields> {
        self.rows.iter().filter_map(|r| r.calendar.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn calendar_fields_use_monday_zero() {
        // 2017-06-23 was a Friday.
        let cal = CalendarFields::from_timestamp(&ts(2017, 6, 23, 15));
        assert_eq!(cal.month, 6);
        assert_eq!(cal.weekday, Weekday::Fri);
        assert_eq!(cal.day_index(), 4);
        assert_eq!(cal.hour, 15);
    }

    #[test]
    fn record_without_timestamp_has_no_calendar() {
        let rec = TripRecord::starting_at(None);
        assert!(rec.calendar.is_none());
    }

    #[test]
    fn schema_lookup() {
        let schema = Schema::trip_log();
        assert_eq!(schema.index_of(columns::START_TIME), Some(0));
        assert!(schema.contains(columns::BIRTH_YEAR));
        assert!(!schema.contains("Bike ID"));
        assert_eq!(schema.field_names().count(), 8);
    }

    #[test]
    fn filter_rows_keeps_order_and_leaves_original_alone() {
        let rows: Vec<_> = (1..=4)
            .map(|d| TripRecord::starting_at(Some(ts(2017, 1, d, 8))))
            .collect();
        let table = TripTable::new(Schema::trip_log(), rows);

        let out = table.filter_rows(|r| r.calendar.is_some_and(|c| c.weekday != Weekday::Mon));

        // 2017-01-02 is a Monday.
        assert_eq!(out.row_count(), 3);
        assert_eq!(out.rows[0], table.rows[0]);
        assert_eq!(out.rows[1], table.rows[2]);
        assert_eq!(table.row_count(), 4);
        assert_eq!(out.schema, table.schema);
    }
}
