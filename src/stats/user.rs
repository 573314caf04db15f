use std::io::{self, Write};

use super::aggregate::{modes, value_counts};
use super::{join_or_none, section, UNDEFINED};
use crate::data::model::TripTable;

/// Per-value record counts; `None` is the missing-value bucket.
pub type Counts = Vec<(Option<String>, usize)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYears {
    pub most_common: Vec<i32>,
    pub most_recent: Option<i32>,
    pub earliest: Option<i32>,
}

/// Each field is `None` when the dataset lacks that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Option<Counts>,
    pub genders: Option<Counts>,
    pub birth_years: Option<BirthYears>,
}

pub fn compute(table: &TripTable) -> UserStats {
    let trips = &table.trips;
    let columns = table.columns;

    let user_types = columns
        .user_type
        .then(|| value_counts(trips.iter().map(|t| t.user_type.clone())));
    let genders = columns
        .gender
        .then(|| value_counts(trips.iter().map(|t| t.gender.clone())));
    let birth_years = columns.birth_year.then(|| {
        let years = || trips.iter().filter_map(|t| t.birth_year);
        BirthYears {
            most_common: modes(years()),
            most_recent: years().max(),
            earliest: years().min(),
        }
    });

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn missing_column<W: Write>(out: &mut W, column: &str) -> io::Result<()> {
    writeln!(
        out,
        "The column {column} does not exist in the current data set selected."
    )
}

fn write_counts<W: Write>(out: &mut W, label: &str, counts: &Counts) -> io::Result<()> {
    for (value, records) in counts {
        match value {
            Some(v) => writeln!(out, "Number of Records whose {label} is {v} = {records}")?,
            None => writeln!(out, "Number of Records whose {label} is missing = {records}")?,
        }
    }
    Ok(())
}

fn year_or_undefined(year: Option<i32>) -> String {
    year.map_or_else(|| UNDEFINED.to_string(), |y| y.to_string())
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    section(out, "User Stats", "bikeshare users", |out| {
        let stats = compute(table);

        writeln!(out, "Let's analyze User Type Column Values.\n")?;
        match &stats.user_types {
            Some(counts) => write_counts(out, "User Type", counts)?,
            None => missing_column(out, "User Type")?,
        }

        writeln!(out, "\nLet's analyze Gender Column Values.\n")?;
        match &stats.genders {
            Some(counts) => write_counts(out, "gender value", counts)?,
            None => missing_column(out, "Gender")?,
        }

        writeln!(out, "\nLet's analyze Birth Year Column Values.\n")?;
        match &stats.birth_years {
            Some(years) => {
                writeln!(
                    out,
                    "Most common Birth Years:- {}",
                    join_or_none(&years.most_common)
                )?;
                writeln!(
                    out,
                    "Most recent Birth Year:- {}",
                    year_or_undefined(years.most_recent)
                )?;
                writeln!(
                    out,
                    "Earliest Birth Year:- {}",
                    year_or_undefined(years.earliest)
                )
            }
            None => missing_column(out, "Birth Year"),
        }
    })
}
