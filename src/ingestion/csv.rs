//! CSV trip log reader.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{BikeshareError, BikeshareResult};
use crate::types::{Schema, TripRecord, TripTable, columns};

/// Timestamp layouts accepted for `Start Time`, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Numeric cells read as missing rather than as numbers.
const MISSING_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "<NA>", "#N/A", "#NA", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None",
];

/// Load a trip log CSV from disk.
///
/// Rules:
///
/// - The file must have a header row containing every required trip column (order can
///   differ, extra columns are ignored).
/// - `Gender` and `Birth Year` are picked up when present; the resulting table's schema
///   says which ones were.
/// - An unparsable `Start Time` becomes `None` and the row is kept.
/// - Empty cells become `None`, as do the usual missing-value markers (`NA`, `NaN`, `null`, ...)
///   in numeric columns. Any other non-numeric or infinite `Trip Duration`/`Birth Year` is an
///   error.
pub fn load_trips_from_path(path: impl AsRef<Path>) -> BikeshareResult<TripTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BikeshareError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    load_trips_from_reader(&mut rdr)
}

/// Load trips from an existing CSV reader.
pub fn load_trips_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> BikeshareResult<TripTable> {
    let headers = rdr.headers()?.clone();

    // Resolve the contract against the actual header; optional columns may drop out.
    let mut present = Vec::new();
    let mut col_idxs = ColumnIndexes::default();
    for field in Schema::trip_log().fields {
        match headers.iter().position(|h| h.trim() == field.name) {
            Some(idx) => {
                col_idxs.set(&field.name, idx);
                present.push(field);
            }
            None if field.required => {
                return Err(BikeshareError::SchemaMismatch {
                    message: format!(
                        "missing required column '{field}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>(),
                        field = field.name
                    ),
                });
            }
            None => debug!(column = %field.name, "optional column absent"),
        }
    }

    let mut rows = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based for users, plus the header line.
        let user_row = row_idx0 + 2;
        let record = result?;
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        let mut trip = TripRecord::starting_at(parse_timestamp(cell(col_idxs.start_time)));
        trip.end_time = text(cell(col_idxs.end_time));
        trip.start_station = text(cell(col_idxs.start_station));
        trip.end_station = text(cell(col_idxs.end_station));
        trip.duration = parse_number(user_row, columns::TRIP_DURATION, cell(col_idxs.duration))?;
        trip.user_type = text(cell(col_idxs.user_type));
        trip.gender = text(cell(col_idxs.gender));
        trip.birth_year = parse_number(user_row, columns::BIRTH_YEAR, cell(col_idxs.birth_year))?
            .map(|y| y.trunc() as i64);
        rows.push(trip);
    }

    Ok(TripTable::new(Schema::new(present), rows))
}

/// Parse a start timestamp, returning `None` for anything unrecognised.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

#[derive(Debug, Default)]
struct ColumnIndexes {
    start_time: Option<usize>,
    end_time: Option<usize>,
    start_station: Option<usize>,
    end_station: Option<usize>,
    duration: Option<usize>,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndexes {
    fn set(&mut self, name: &str, idx: usize) {
        let slot = match name {
            columns::START_TIME => &mut self.start_time,
            columns::END_TIME => &mut self.end_time,
            columns::START_STATION => &mut self.start_station,
            columns::END_STATION => &mut self.end_station,
            columns::TRIP_DURATION => &mut self.duration,
            columns::USER_TYPE => &mut self.user_type,
            columns::GENDER => &mut self.gender,
            columns::BIRTH_YEAR => &mut self.birth_year,
            _ => return,
        };
        *slot = Some(idx);
    }
}

fn text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn parse_number(row: usize, column: &str, raw: &str) -> BikeshareResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed) {
        return Ok(None);
    }
    let parse_error = |message: String| BikeshareError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        Ok(_) => Err(parse_error("not a finite number".to_owned())),
        Err(e) => Err(parse_error(e.to_string())),
    }
}
