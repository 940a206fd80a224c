//! Interactive prompt loop.
//!
//! The shell is generic over its input and output so sessions can be driven from tests with
//! in-memory buffers. Menu answers are checked by the `parse_*` functions, which return an
//! [`InvalidChoice`] instead of swallowing bad input.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::{BikeshareError, BikeshareResult};
use crate::formatting::title_case;
use crate::ingestion::{LoadOptions, load_city};
use crate::processing::{ALL, filter_by_names};
use crate::report::{SEPARATOR_WIDTH, write_report};

/// A menu answer that is neither a listed number nor `all` (where allowed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid choice '{input}': expected {expected}")]
pub struct InvalidChoice {
    pub input: String,
    pub expected: String,
}

/// Parse a 1-based city number; returns the 0-based position in the city menu.
pub fn parse_city_choice(input: &str, city_count: usize) -> Result<usize, InvalidChoice> {
    let invalid = || InvalidChoice {
        input: input.trim().to_string(),
        expected: format!("a number from 1 to {city_count}"),
    };
    let n: usize = input.trim().parse().map_err(|_| invalid())?;
    if (1..=city_count).contains(&n) {
        Ok(n - 1)
    } else {
        Err(invalid())
    }
}

/// Parse a 1-based menu number or `all`; returns the chosen name or `"all"`.
pub fn parse_menu_choice(input: &str, names: &[String]) -> Result<String, InvalidChoice> {
    let trimmed = input.trim();
    if trimmed == ALL {
        return Ok(ALL.to_string());
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| names.get(i))
        .cloned()
        .ok_or_else(|| InvalidChoice {
            input: trimmed.to_string(),
            expected: format!("1 - {}, or {ALL}", names.len()),
        })
}

/// Answers collected by one round of prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub city: String,
    /// Month name or `"all"`.
    pub month: String,
    /// Day name or `"all"`.
    pub day: String,
}

pub struct Shell<'a, R, W> {
    config: &'a ReportConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(config: &'a ReportConfig, input: R, output: W) -> Self {
        Self { config, input, output }
    }

    /// Give back the output sink, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run report rounds until the user declines to restart.
    pub fn run(&mut self, options: &LoadOptions) -> BikeshareResult<()> {
        loop {
            let request = self.prompt_request()?;
            info!(city = %request.city, month = %request.month, day = %request.day, "building report");

            let table = load_city(self.config, &request.city, options)?;
            let filtered = filter_by_names(self.config, &table, &request.month, &request.day)?;
            write_report(&mut self.output, &filtered, self.config)?;

            if !self.prompt_restart()? {
                debug!("session finished");
                return Ok(());
            }
        }
    }

    /// Greet and ask for city, month and day.
    pub fn prompt_request(&mut self) -> BikeshareResult<ReportRequest> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!\n")?;
        let city = self.prompt_city()?;
        let month = self.prompt_month()?;
        let day = self.prompt_day()?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(ReportRequest { city, month, day })
    }

    pub fn prompt_city(&mut self) -> BikeshareResult<String> {
        let names: Vec<String> = self.config.cities.iter().map(|c| c.name.clone()).collect();
        self.print_menu(&names)?;
        let prompt = format!("\nEnter a number for the city (1 - {}):  ", names.len());
        let idx = self.prompt_until_valid("city", &prompt, |line| parse_city_choice(line, names.len()))?;
        Ok(names[idx].clone())
    }

    pub fn prompt_month(&mut self) -> BikeshareResult<String> {
        let months = self.config.months.clone();
        self.print_menu(&months)?;
        let prompt = format!(
            "\nEnter the month with {}=1, {}={} or '{ALL}' ",
            title_case(months.first().map_or("", String::as_str)),
            title_case(months.last().map_or("", String::as_str)),
            months.len()
        );
        self.prompt_until_valid("month", &prompt, |line| parse_menu_choice(line, &months))
    }

    pub fn prompt_day(&mut self) -> BikeshareResult<String> {
        let days = self.config.days.clone();
        self.print_menu(&days)?;
        let prompt = format!(
            "\nEnter the day with {}=1, {}={} or '{ALL}' ",
            title_case(days.first().map_or("", String::as_str)),
            title_case(days.last().map_or("", String::as_str)),
            days.len()
        );
        self.prompt_until_valid("day", &prompt, |line| parse_menu_choice(line, &days))
    }

    /// Returns `true` only for a case-insensitive `yes`. Closed input counts as no.
    pub fn prompt_restart(&mut self) -> BikeshareResult<bool> {
        write!(self.output, "\nWould you like to restart? Enter yes or no.\n")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes")))
    }

    fn print_menu(&mut self, names: &[String]) -> BikeshareResult<()> {
        for (i, name) in names.iter().enumerate() {
            writeln!(self.output, "{:>20}. {}", i + 1, title_case(name))?;
        }
        Ok(())
    }

    /// Ask `prompt` until `parse` accepts the answer.
    fn prompt_until_valid<T>(
        &mut self,
        what: &'static str,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InvalidChoice>,
    ) -> BikeshareResult<T> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line()?.ok_or(BikeshareError::InputClosed(what))?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(what, input = %e.input, "rejected menu answer");
                    writeln!(self.output, " !!! {e}")?;
                }
            }
        }
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> BikeshareResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
