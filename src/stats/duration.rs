use std::io::{self, Write};

use super::{section, UNDEFINED};
use crate::data::model::TripTable;

const MICROS_PER_MINUTE: f64 = 60_000_000.0;
const MICROS_PER_SECOND: u64 = 1_000_000;
const MICROS_PER_DAY: u64 = 86_400 * MICROS_PER_SECOND;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_minutes: f64,
    /// `None` when the table is empty.
    pub mean_minutes: Option<f64>,
}

pub fn compute(table: &TripTable) -> DurationStats {
    let total_minutes: f64 = table.trips.iter().map(|t| t.duration_minutes()).sum();
    let mean_minutes = (!table.is_empty()).then(|| total_minutes / table.len() as f64);
    DurationStats {
        total_minutes,
        mean_minutes,
    }
}

/// Render fractional minutes as `<d> days HH:MM:SS[.ffffff]`.
pub fn format_duration(minutes: f64) -> String {
    let micros = (minutes * MICROS_PER_MINUTE).round() as i64;
    let sign = if micros < 0 { "-" } else { "" };
    let micros = micros.unsigned_abs();

    let days = micros / MICROS_PER_DAY;
    let rem = micros % MICROS_PER_DAY;
    let secs = rem / MICROS_PER_SECOND;
    let frac = rem % MICROS_PER_SECOND;

    let mut text = format!(
        "{sign}{days} days {:02}:{:02}:{:02}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    );
    if frac != 0 {
        text.push_str(&format!(".{frac:06}"));
    }
    text
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    section(
        out,
        "Trip Duration",
        "the total and average trip duration",
        |out| {
            let stats = compute(table);
            writeln!(
                out,
                "Total trip time for the current data set (days hh:mm:ss.ffffff) is:- {}",
                format_duration(stats.total_minutes)
            )?;
            let mean = stats
                .mean_minutes
                .map_or_else(|| UNDEFINED.to_string(), format_duration);
            writeln!(
                out,
                "Mean trip time for the current data set (days hh:mm:ss.ffffff) is:- {mean}"
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{trip, ts};
    use crate::data::model::OptionalColumns;

    fn table(minutes: &[i64]) -> TripTable {
        let start = ts(2017, 5, 1, 7, 0, 0);
        let trips = minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| trip(i, start, m, "A", "B"))
            .collect();
        TripTable::new(trips, OptionalColumns::default())
    }

    #[test]
    fn total_and_mean_of_ten_and_twenty_minutes() {
        let stats = compute(&table(&[10, 20]));
        assert_eq!(stats.total_minutes, 30.0);
        assert_eq!(stats.mean_minutes, Some(15.0));
        assert_eq!(format_duration(stats.total_minutes), "0 days 00:30:00");
        assert_eq!(format_duration(15.0), "0 days 00:15:00");
    }

    #[test]
    fn format_spans_days_and_fractions() {
        assert_eq!(format_duration(0.0), "0 days 00:00:00");
        assert_eq!(format_duration(1500.0), "1 days 01:00:00");
        assert_eq!(format_duration(2.0 * 1440.0 + 61.5), "2 days 01:01:30");
        assert_eq!(format_duration(1.0 / 60_000.0), "0 days 00:00:00.001000");
        assert_eq!(format_duration(-5.0), "-0 days 00:05:00");
    }

    #[test]
    fn uneven_mean_keeps_microseconds() {
        let stats = compute(&table(&[1, 2, 2]));
        let mean = stats.mean_minutes.expect("non-empty");
        assert_eq!(format_duration(mean), "0 days 00:01:40");
        let stats = compute(&table(&[1, 1, 2]));
        let mean = stats.mean_minutes.expect("non-empty");
        assert_eq!(format_duration(mean), "0 days 00:01:20");
    }

    #[test]
    fn empty_table_has_zero_total_and_no_mean() {
        let stats = compute(&table(&[]));
        assert_eq!(stats.total_minutes, 0.0);
        assert_eq!(stats.mean_minutes, None);

        let mut out = Vec::new();
        report(&mut out, &table(&[])).expect("report");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("is:- 0 days 00:00:00\n"));
        assert!(text.contains(&format!("is:- {UNDEFINED}")));
    }
}
