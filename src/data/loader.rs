use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::filter;
use super::model::{FilterSelection, OptionalColumns, TripRecord, TripTable};
use crate::config::Config;
use crate::error::LoadError;

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 4] = [START_TIME, END_TIME, START_STATION, END_STATION];

/// Accepted timestamp layouts. `%.f` also matches an absent fraction.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the selected city's dataset and apply its month/day filters.
pub fn load(config: &Config, selection: &FilterSelection) -> Result<TripTable, LoadError> {
    let path = config.dataset_path(selection.city);
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(&path)
        .map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;

    let (trips, columns) = read_trips(reader, &path)?;
    let total = trips.len();
    let kept = filter::apply(trips, selection.month, selection.day);

    log::info!(
        "Loaded {} ({total} rows, {} after month={} day={})",
        path.display(),
        kept.len(),
        selection.month,
        selection.day
    );
    Ok(TripTable::new(kept, columns))
}

// ---------------------------------------------------------------------------
// CSV decoding
// ---------------------------------------------------------------------------

/// One CSV row as written in the source files. Unknown columns (the unnamed
/// index, `Trip Duration`) are ignored; empty cells decode as `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Decode every row of `reader`, in source order.
pub fn read_trips<R: io::Read>(
    mut reader: csv::Reader<R>,
    path: &Path,
) -> Result<(Vec<TripRecord>, OptionalColumns), LoadError> {
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            row: 0,
            source,
        })?
        .clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(column) = REQUIRED_COLUMNS.into_iter().find(|&c| !has(c)) {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }
    let columns = OptionalColumns {
        user_type: has(USER_TYPE),
        gender: has(GENDER),
        birth_year: has(BIRTH_YEAR),
    };
    log::debug!("{}: optional columns {columns:?}", path.display());

    let mut trips = Vec::new();
    for (idx, result) in reader.deserialize::<RawTrip>().enumerate() {
        let row = idx + 1;
        let raw = result.map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            row,
            source,
        })?;
        trips.push(into_record(raw, idx, path)?);
    }
    Ok((trips, columns))
}

fn into_record(raw: RawTrip, idx: usize, path: &Path) -> Result<TripRecord, LoadError> {
    let parse = |column: &'static str, value: &str| {
        parse_timestamp(value).ok_or_else(|| LoadError::Timestamp {
            path: path.to_path_buf(),
            row: idx + 1,
            column,
            value: value.to_string(),
        })
    };

    Ok(TripRecord {
        row: idx,
        start_time: parse(START_TIME, &raw.start_time)?,
        end_time: parse(END_TIME, &raw.end_time)?,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type.filter(|s| !s.trim().is_empty()),
        gender: raw.gender.filter(|s| !s.trim().is_empty()),
        birth_year: raw
            .birth_year
            .filter(|y| y.is_finite())
            .map(|y| y.round() as i32),
    })
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}
