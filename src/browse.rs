use std::io::{self, BufRead, Write};

use crate::config::PAGE_SIZE;
use crate::data::model::{TripRecord, TripTable};
use crate::error::PromptError;
use crate::prompt::Console;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offer to page through the table, `PAGE_SIZE` rows at a time.
/// Returns once the user declines or every row has been shown.
pub fn browse<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<(), PromptError> {
    if !console.confirm("Would you like to view the first 5 rows? Enter yes or no.")? {
        return Ok(());
    }

    writeln!(console.out(), "\nDisplaying the first 5 rows of the selected data set.\n")?;
    let mut start = 0;
    print_page(console.out(), table, start)?;

    loop {
        start += PAGE_SIZE;
        if start >= table.len() {
            writeln!(console.out(), "\nNo more rows in the selected data set.")?;
            return Ok(());
        }
        if !console.confirm("Would you like to view the next 5 rows? Enter yes or no.")? {
            return Ok(());
        }
        writeln!(console.out(), "\nDisplaying the next 5 rows of the selected data set.\n")?;
        print_page(console.out(), table, start)?;
    }
}

/// Print rows `[start, start + PAGE_SIZE)` as an aligned table.
pub fn print_page<W: Write>(out: &mut W, table: &TripTable, start: usize) -> io::Result<()> {
    let rows = table.window(start, PAGE_SIZE);
    log::debug!("page at {start}: {} rows", rows.len());

    let mut lines = vec![header(table)];
    lines.extend(rows.iter().map(|trip| cells(table, trip)));

    let columns = lines.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..columns)
        .map(|c| lines.iter().map(|l| l[c].chars().count()).max().unwrap_or(0))
        .collect();

    for line in &lines {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        writeln!(out, "{}", padded.join("  ").trim_end())?;
    }
    Ok(())
}

fn header(table: &TripTable) -> Vec<String> {
    let mut names = vec!["", "Start Time", "End Time", "Start Station", "End Station"];
    if table.columns.user_type {
        names.push("User Type");
    }
    if table.columns.gender {
        names.push("Gender");
    }
    if table.columns.birth_year {
        names.push("Birth Year");
    }
    names.into_iter().map(str::to_string).collect()
}

fn cells(table: &TripTable, trip: &TripRecord) -> Vec<String> {
    let missing = || "NaN".to_string();
    let mut cells = vec![
        trip.row.to_string(),
        trip.start_time.format(TIMESTAMP_FORMAT).to_string(),
        trip.end_time.format(TIMESTAMP_FORMAT).to_string(),
        trip.start_station.clone(),
        trip.end_station.clone(),
    ];
    if table.columns.user_type {
        cells.push(trip.user_type.clone().unwrap_or_else(missing));
    }
    if table.columns.gender {
        cells.push(trip.gender.clone().unwrap_or_else(missing));
    }
    if table.columns.birth_year {
        cells.push(trip.birth_year.map_or_else(missing, |y| y.to_string()));
    }
    cells
}
