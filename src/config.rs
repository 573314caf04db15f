use std::path::{Path, PathBuf};

use chrono::{Month, Weekday};
use clap::Parser;

use crate::data::model::City;

// ---------------------------------------------------------------------------
// Fixed lookup tables
// ---------------------------------------------------------------------------

/// City → dataset file name, resolved against [`Config::data_dir`].
pub const CITY_DATA: [(City, &str); 3] = [
    (City::Chicago, "chicago.csv"),
    (City::NewYork, "new_york_city.csv"),
    (City::Washington, "washington.csv"),
];

/// Weekday names in Monday-first order.
pub const CALENDAR_DAYS: [(&str, Weekday); 7] = [
    ("Monday", Weekday::Mon),
    ("Tuesday", Weekday::Tue),
    ("Wednesday", Weekday::Wed),
    ("Thursday", Weekday::Thu),
    ("Friday", Weekday::Fri),
    ("Saturday", Weekday::Sat),
    ("Sunday", Weekday::Sun),
];

/// Rows printed per page by the row browser.
pub const PAGE_SIZE: usize = 5;

/// Full English name of a month number (1–12).
pub fn month_name(month: u32) -> Option<&'static str> {
    let number = u8::try_from(month).ok()?;
    Month::try_from(number).ok().map(|m| m.name())
}

/// Month number for a full, case-insensitive month name.
pub fn month_number(name: &str) -> Option<u32> {
    (1..=12).find(|&m| month_name(m).is_some_and(|n| n.eq_ignore_ascii_case(name)))
}

/// Title-case name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    CALENDAR_DAYS[day.num_days_from_monday() as usize].0
}

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

/// Where the city datasets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Full path of a city's dataset file.
    pub fn dataset_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Command line of the `bikeshare` binary.
#[derive(Debug, Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bike-share trip data interactively", long_about = None)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    /// (defaults to the current directory).
    pub data_dir: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        match cli.data_dir {
            Some(data_dir) => Self { data_dir },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_round_trip_numbers() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(month_number("march"), Some(3));
        assert_eq!(month_number("DECEMBER"), Some(12));
        assert_eq!(month_number("mar"), None);
    }

    #[test]
    fn day_names_are_monday_first() {
        assert_eq!(day_name(Weekday::Mon), "Monday");
        assert_eq!(day_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn config_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["bikeshare"]).expect("no arguments");
        let cfg = Config::from(cli);
        assert_eq!(cfg.data_dir(), Path::new("."));
        assert_eq!(
            cfg.dataset_path(City::NewYork),
            Path::new(".").join("new_york_city.csv")
        );
    }

    #[test]
    fn config_takes_positional_data_dir() {
        let cli = Cli::try_parse_from(["bikeshare", "/srv/bikeshare"]).expect("one argument");
        let cfg = Config::from(cli);
        assert_eq!(
            cfg.dataset_path(City::Washington),
            Path::new("/srv/bikeshare/washington.csv")
        );
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["bikeshare", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["bikeshare", "--month", "3"]).is_err());
    }
}
