//! User demographics.
//!
//! Gender and birth year sections depend on the city's schema, not on the data: a city
//! whose CSV has a `Gender` column always gets a gender section, even when every cell in
//! the filtered table is empty.

use std::fmt;

use crate::config::ReportConfig;
use crate::processing::Tally;
use crate::types::{TripTable, columns};

use super::{Aggregate, write_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Descending by count.
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city has no `Gender` column.
    pub genders: Option<Vec<(String, usize)>>,
    /// Outer `None` when the city has no `Birth Year` column, inner `None` when it has one
    /// but no row carries a value.
    pub birth_years: Option<Option<BirthYearStats>>,
}

impl Aggregate for UserStats {
    const HEADING: &'static str = "Calculating User Stats...";

    fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let user_types: Tally<&str> = table.rows.iter().filter_map(|r| r.user_type.as_deref()).collect();

        let genders = table.schema.contains(columns::GENDER).then(|| {
            let tally: Tally<&str> = table.rows.iter().filter_map(|r| r.gender.as_deref()).collect();
            owned_counts(&tally)
        });

        let birth_years = table.schema.contains(columns::BIRTH_YEAR).then(|| {
            let tally: Tally<i64> = table.rows.iter().filter_map(|r| r.birth_year).collect();
            Some(BirthYearStats {
                earliest: *tally.min()?,
                most_recent: *tally.max()?,
                most_common: *tally.mode()?.0,
            })
        });

        Some(Self {
            user_types: owned_counts(&user_types),
            genders,
            birth_years,
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, _config: &ReportConfig) -> fmt::Result {
        write_counts(f, &self.user_types)?;
        if let Some(genders) = &self.genders {
            writeln!(f)?;
            write_counts(f, genders)?;
        }
        if let Some(birth_years) = &self.birth_years {
            writeln!(f)?;
            writeln!(f, "    Year of Birth...")?;
            match birth_years {
                Some(b) => {
                    write_line(f, "    Earliest:", b.earliest)?;
                    write_line(f, "    Most recent:", b.most_recent)?;
                    write_line(f, "    Most common:", b.most_common)?;
                }
                None => write_line(f, "    Earliest:", "no data")?,
            }
        }
        Ok(())
    }
}

fn owned_counts(tally: &Tally<&str>) -> Vec<(String, usize)> {
    tally
        .value_counts()
        .into_iter()
        .map(|(k, c)| ((*k).to_owned(), c))
        .collect()
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    for (value, count) in counts {
        writeln!(f, "    {:<21} {count}", format!("{value}:"))?;
    }
    Ok(())
}
