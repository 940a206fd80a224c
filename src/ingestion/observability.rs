use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::BikeshareError;

/// Severity of a failed load, used for observer callbacks and alerting thresholds.
///
/// Non-fatal findings such as unreadable start times are reported through
/// [`LoadObserver::on_success`] via [`LoadStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Error-level event (load failed).
    Error,
    /// Critical error (the source file could not be read at all).
    Critical,
}

impl LoadSeverity {
    /// Classify a load failure.
    pub fn for_error(e: &BikeshareError) -> Self {
        match e {
            BikeshareError::Io(_) | BikeshareError::FileRead { .. } => Self::Critical,
            BikeshareError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            _ => Self::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    pub city: String,
    pub path: PathBuf,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded rows.
    pub rows: usize,
    /// Rows kept without derived calendar fields.
    pub unparsed_start_times: usize,
}

/// Observer interface for load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when a city loads.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &BikeshareError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &BikeshareError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans callbacks out to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &BikeshareError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &BikeshareError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Emits load events as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        info!(
            city = %ctx.city,
            path = %ctx.path.display(),
            rows = stats.rows,
            unparsed_start_times = stats.unparsed_start_times,
            "trip log loaded"
        );
        if stats.unparsed_start_times > 0 {
            warn!(
                city = %ctx.city,
                count = stats.unparsed_start_times,
                "rows kept without calendar fields"
            );
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &BikeshareError) {
        warn!(?severity, city = %ctx.city, path = %ctx.path.display(), err = %error, "trip log load failed");
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &BikeshareError) {
        error!(?severity, city = %ctx.city, path = %ctx.path.display(), err = %error, "ALERT trip log load failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failures_outrank_content_failures() {
        let unreadable = BikeshareError::FileRead {
            path: PathBuf::from("chicago.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let bad_cell = BikeshareError::ParseError {
            row: 2,
            column: "Trip Duration".to_string(),
            raw: "inf".to_string(),
            message: "not a finite number".to_string(),
        };
        let missing_column = BikeshareError::SchemaMismatch {
            message: "missing required column 'User Type'".to_string(),
        };

        assert_eq!(LoadSeverity::for_error(&unreadable), LoadSeverity::Critical);
        assert_eq!(LoadSeverity::for_error(&bad_cell), LoadSeverity::Error);
        assert_eq!(LoadSeverity::for_error(&missing_column), LoadSeverity::Error);
        assert!(LoadSeverity::Error < LoadSeverity::Critical);
    }
}
