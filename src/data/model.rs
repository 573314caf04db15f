use std::fmt;

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::config::{self, CITY_DATA};

// ---------------------------------------------------------------------------
// City – the closed set of known datasets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Name as typed by the user (lower case).
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYork => "new york",
            City::Washington => "washington",
        }
    }

    /// Case-insensitive lookup by user-facing name.
    pub fn from_name(input: &str) -> Option<City> {
        let input = input.trim();
        City::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(input))
    }

    pub fn file_name(self) -> &'static str {
        CITY_DATA
            .iter()
            .find(|(city, _)| *city == self)
            .map(|(_, file)| *file)
            .unwrap_or_default()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Filter selection
// ---------------------------------------------------------------------------

/// Month restriction; `Only` holds a month number 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(u32),
}

impl MonthFilter {
    pub fn matches(self, ts: &NaiveDateTime) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => ts.month() == m,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(config::month_name(*m).unwrap_or("?")),
        }
    }
}

/// Day-of-week restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(self, ts: &NaiveDateTime) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => ts.weekday() == d,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => f.write_str(config::day_name(*d)),
        }
    }
}

/// Validated (city, month, day) triple for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

// ---------------------------------------------------------------------------
// TripRecord – one row of a city dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// 0-based position of the row in the source file.
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Trip length in fractional minutes.
    pub fn duration_minutes(&self) -> f64 {
        let delta = self.end_time - self.start_time;
        match delta.num_microseconds() {
            Some(us) => us as f64 / 60_000_000.0,
            None => delta.num_milliseconds() as f64 / 60_000.0,
        }
    }

    /// Grouping key for the start/end pair, joined with `", "`.
    pub fn station_pair(&self) -> String {
        format!("{}, {}", self.start_station, self.end_station)
    }
}

// ---------------------------------------------------------------------------
// TripTable – the filtered dataset
// ---------------------------------------------------------------------------

/// Which optional demographic columns the source file carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalColumns {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl OptionalColumns {
    #[cfg(test)]
    pub fn all() -> Self {
        Self {
            user_type: true,
            gender: true,
            birth_year: true,
        }
    }
}

/// Trips matching the active filter, in source order.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub trips: Vec<TripRecord>,
    pub columns: OptionalColumns,
}

impl TripTable {
    pub fn new(trips: Vec<TripRecord>, columns: OptionalColumns) -> Self {
        Self { trips, columns }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Contiguous window `[start, start + len)`, clamped to the table.
    pub fn window(&self, start: usize, len: usize) -> &[TripRecord] {
        let start = start.min(self.trips.len());
        let end = start.saturating_add(len).min(self.trips.len());
        &self.trips[start..end]
    }
}
