//! Descriptive statistics over a filtered [`TripTable`].
//!
//! Four independent reporters, always run in this order:
//! time of travel, stations, trip duration, users. Each prints its own
//! section, followed by how long the computation took.

pub mod aggregate;
pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::io::{self, Write};
use std::time::Instant;

use crate::data::model::TripTable;

/// Horizontal rule closing every section.
pub const RULE_WIDTH: usize = 40;

/// Printed in place of a mode when no trips survived filtering.
pub const NO_TRIPS: &str = "none (no trips match the selected filters)";

/// Printed for aggregates that have no value on an empty table.
pub const UNDEFINED: &str = "undefined (no trips match the selected filters)";

/// Run all four reporters in their fixed order.
pub fn report_all<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    time::report(out, table)?;
    station::report(out, table)?;
    duration::report(out, table)?;
    user::report(out, table)
}

pub fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Print a section banner, run `body`, then the elapsed time and a rule.
fn section<W, F>(out: &mut W, heading: &str, topic: &str, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    writeln!(out, "\nCalculating {heading}...")?;
    let started = Instant::now();
    writeln!(out, "\nDisplaying statistics on {topic}.\n")?;
    body(out)?;
    let elapsed = started.elapsed();
    log::debug!("{heading}: {elapsed:?}");
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    rule(out)
}

/// Comma-join display values, or the empty-table notice.
fn join_or_none<T: ToString>(values: &[T]) -> String {
    if values.is_empty() {
        return NO_TRIPS.to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{trip, ts};
    use crate::data::model::OptionalColumns;

    fn render(table: &TripTable) -> String {
        let mut out = Vec::new();
        report_all(&mut out, table).expect("write to Vec");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn sections_run_in_fixed_order() {
        let table = TripTable::new(
            vec![trip(0, ts(2017, 4, 3, 10, 0, 0), 12, "A", "B")],
            OptionalColumns::default(),
        );
        let text = render(&table);
        let positions: Vec<usize> = [
            "Calculating The Most Frequent Times of Travel",
            "Calculating The Most Popular Stations and Trip",
            "Calculating Trip Duration",
            "Calculating User Stats",
        ]
        .iter()
        .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert_eq!(text.matches("This took ").count(), 4);
        assert_eq!(text.matches(&"-".repeat(RULE_WIDTH)).count(), 4);
    }

    #[test]
    fn empty_table_reports_without_failing() {
        let table = TripTable::new(Vec::new(), OptionalColumns::all());
        let text = render(&table);
        assert!(text.contains(NO_TRIPS));
        assert!(text.contains(UNDEFINED));
    }

    #[test]
    fn join_or_none_handles_empty() {
        assert_eq!(join_or_none::<String>(&[]), NO_TRIPS);
        assert_eq!(join_or_none(&["a", "b"]), "a, b");
    }
}
