//! City-keyed loading entrypoint.
//!
//! [`load_city`] resolves a city against the [`ReportConfig`], reads its CSV and, when an
//! observer is configured, reports the outcome to it.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::{BikeshareError, BikeshareResult};
use crate::types::TripTable;

use super::csv::load_trips_from_path;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling how a city load is observed.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load the trip log of `city`.
///
/// - Unknown cities fail with [`BikeshareError::UnknownCity`] before touching the disk.
/// - A missing or malformed file is returned as an error; nothing is retried.
///
/// When an observer is configured this reports `on_success` with row stats, or
/// `on_failure` (plus `on_alert` at or above `options.alert_at_or_above`).
pub fn load_city(config: &ReportConfig, city: &str, options: &LoadOptions) -> BikeshareResult<TripTable> {
    let source = config
        .city(city)
        .ok_or_else(|| BikeshareError::UnknownCity(city.to_string()))?;
    let ctx = LoadContext {
        city: source.name.clone(),
        path: config.city_path(source),
    };
    debug!(city = %ctx.city, path = %ctx.path.display(), "loading trip log");

    let result = load_trips_from_path(&ctx.path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: table.row_count(),
                    unparsed_start_times: table.rows.iter().filter(|r| r.calendar.is_none()).count(),
                },
            ),
            Err(e) => {
                let sev = LoadSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}
