use std::io::{self, Write};

use super::aggregate::modes;
use super::{join_or_none, section};
use crate::data::model::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: Vec<String>,
    pub end: Vec<String>,
    /// `"<start>, <end>"` keys. Pairs whose joined text is equal count as one.
    pub pairs: Vec<String>,
}

pub fn compute(table: &TripTable) -> StationStats {
    StationStats {
        start: modes(table.trips.iter().map(|t| t.start_station.clone())),
        end: modes(table.trips.iter().map(|t| t.end_station.clone())),
        pairs: modes(table.trips.iter().map(|t| t.station_pair())),
    }
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    section(
        out,
        "The Most Popular Stations and Trip",
        "the most popular stations and trip",
        |out| {
            let stats = compute(table);
            writeln!(
                out,
                "Most commonly used start stations are:- {}",
                join_or_none(&stats.start)
            )?;
            writeln!(
                out,
                "Most commonly used end stations are:- {}",
                join_or_none(&stats.end)
            )?;
            writeln!(
                out,
                "Most frequent combination of start station and end station:- {}",
                join_or_none(&stats.pairs)
            )
        },
    )
}
