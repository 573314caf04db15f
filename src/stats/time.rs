use std::io::{self, Write};

use chrono::Datelike;

use super::aggregate::modes;
use super::{join_or_none, section};
use crate::config::{self, CALENDAR_DAYS};
use crate::data::model::TripTable;

/// 12-hour clock with AM/PM, e.g. `08 AM`.
const HOUR_FORMAT: &str = "%I %p";

/// Most frequent travel times. Every list holds all tied values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Month numbers, 1–12.
    pub months: Vec<u32>,
    /// Weekdays as days from Monday, 0–6.
    pub days: Vec<u32>,
    /// Start hours formatted `%I %p`, e.g. `08 AM`.
    pub hours: Vec<String>,
}

impl TimeStats {
    pub fn month_names(&self) -> Vec<&'static str> {
        self.months
            .iter()
            .filter_map(|&m| config::month_name(m))
            .collect()
    }

    pub fn day_names(&self) -> Vec<&'static str> {
        self.days
            .iter()
            .filter_map(|&d| CALENDAR_DAYS.get(d as usize).map(|(name, _)| *name))
            .collect()
    }
}

pub fn compute(table: &TripTable) -> TimeStats {
    let starts = || table.trips.iter().map(|t| t.start_time);
    TimeStats {
        months: modes(starts().map(|ts| ts.month())),
        days: modes(starts().map(|ts| ts.weekday().num_days_from_monday())),
        hours: modes(starts().map(|ts| ts.format(HOUR_FORMAT).to_string())),
    }
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    section(
        out,
        "The Most Frequent Times of Travel",
        "the most frequent times of travel",
        |out| {
            let stats = compute(table);
            writeln!(
                out,
                "Most common months for the selected data set are:- {}",
                join_or_none(&stats.month_names())
            )?;
            writeln!(
                out,
                "Most common days for the selected data set are:- {}",
                join_or_none(&stats.day_names())
            )?;
            writeln!(
                out,
                "Most common hours for the selected data set are:- {}",
                join_or_none(&stats.hours)
            )
        },
    )
}
