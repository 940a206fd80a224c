//! Menu and data-source configuration.
//!
//! The city set, the month menu and the day menu are plain data passed into the loader,
//! the filter engine and the shell. [`ReportConfig::default`] reproduces the stock
//! bikeshare setup; a JSON file can override any of it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BikeshareError, BikeshareResult};
use crate::formatting::{month_name, title_case};

/// A city and the CSV file holding its trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySource {
    /// Lower-case key, e.g. `"new york city"`.
    pub name: String,
    /// File name, resolved against [`ReportConfig::data_dir`] when relative.
    pub file: PathBuf,
}

impl CitySource {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory the city files live in.
    pub data_dir: PathBuf,
    /// Cities in menu order.
    pub cities: Vec<CitySource>,
    /// Month names in calendar order starting with January.
    pub months: Vec<String>,
    /// Day names in order starting with Monday.
    pub days: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            cities: vec![
                CitySource::new("chicago", "chicago.csv"),
                CitySource::new("new york city", "new_york_city.csv"),
                CitySource::new("washington", "washington.csv"),
            ],
            months: ["january", "february", "march", "april", "may", "june"]
                .map(String::from)
                .to_vec(),
            days: [
                "monday",
                "tuesday",
                "wednesday",
                "thursday",
                "friday",
                "saturday",
                "sunday",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl ReportConfig {
    /// Load a config from a JSON file. Missing keys fall back to the defaults.
    pub fn from_json_path(path: impl AsRef<Path>) -> BikeshareResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BikeshareError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the data directory, keeping everything else.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Check the menus are usable by the filter engine and the shell.
    pub fn validate(&self) -> BikeshareResult<()> {
        if self.cities.is_empty() {
            return Err(BikeshareError::Config("at least one city is required".to_string()));
        }
        let mut seen = HashSet::new();
        for city in &self.cities {
            if !seen.insert(city.name.to_lowercase()) {
                return Err(BikeshareError::Config(format!("duplicate city '{}'", city.name)));
            }
        }
        if self.months.is_empty() || self.months.len() > 12 {
            return Err(BikeshareError::Config(format!(
                "expected 1 to 12 months, got {}",
                self.months.len()
            )));
        }
        if self.days.len() != 7 {
            return Err(BikeshareError::Config(format!(
                "expected 7 days, got {}",
                self.days.len()
            )));
        }
        Ok(())
    }

    /// Look up a city by name (case-insensitive).
    pub fn city(&self, name: &str) -> Option<&CitySource> {
        self.cities.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Path of a city's source file.
    pub fn city_path(&self, city: &CitySource) -> PathBuf {
        self.data_dir.join(&city.file)
    }

    /// 1-based month number for a configured month name.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        position_of(&self.months, name).map(|i| i as u32 + 1)
    }

    /// 0-based day index (Monday = 0) for a configured day name.
    pub fn day_index(&self, name: &str) -> Option<u32> {
        position_of(&self.days, name).map(|i| i as u32)
    }

    /// Display name of a 1-based month. Months past the end of the menu fall back to the
    /// calendar name.
    pub fn month_label(&self, month: u32) -> Option<String> {
        let configured = (month as usize).checked_sub(1).and_then(|i| self.months.get(i));
        match configured {
            Some(name) => Some(title_case(name)),
            None => month_name(month).map(str::to_owned),
        }
    }

    /// Display name of a 0-based day index.
    pub fn day_label(&self, day: u32) -> Option<String> {
        self.days.get(day as usize).map(|name| title_case(name))
    }
}

fn position_of(names: &[String], name: &str) -> Option<usize> {
    names.iter().position(|n| n.eq_ignore_ascii_case(name))
}
