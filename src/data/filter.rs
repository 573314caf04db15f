use super::model::{DayFilter, MonthFilter, TripRecord};

// ---------------------------------------------------------------------------
// Month / day-of-week filtering
// ---------------------------------------------------------------------------

/// Keep the trips whose start timestamp passes both filters.
///
/// * `MonthFilter::All` / `DayFilter::All` impose no constraint.
/// * Both filters apply together (AND).
/// * Surviving trips keep their relative order.
pub fn apply(trips: Vec<TripRecord>, month: MonthFilter, day: DayFilter) -> Vec<TripRecord> {
    if month == MonthFilter::All && day == DayFilter::All {
        return trips;
    }
    let before = trips.len();
    let kept: Vec<TripRecord> = trips
        .into_iter()
        .filter(|t| month.matches(&t.start_time) && day.matches(&t.start_time))
        .collect();
    log::debug!("filter month={month} day={day}: {before} -> {}", kept.len());
    kept
}
