use std::io::{BufRead, Write};

use crate::config::{self, CALENDAR_DAYS};
use crate::data::model::{City, DayFilter, FilterSelection, MonthFilter};
use crate::error::PromptError;
use crate::stats;

const CITY_PROMPT: &str =
    "Enter the city you would like to analyze (Enter either chicago or new york or washington).";
const MONTH_PROMPT: &str = "Enter either name of the month or month number in either one or two \
     digit format (i.e january=1 or 01, december=12) to filter by month, or \"all\" to apply no \
     month filter.";
const DAY_PROMPT: &str =
    "Enter name of the day of week to filter by, or \"all\" to apply no day filter.";

// ---------------------------------------------------------------------------
// Console – line-oriented prompt/answer over any reader and writer
// ---------------------------------------------------------------------------

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `question` and read one answer, trimmed and lower-cased.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        writeln!(self.output, "\n{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Ask until `parse` accepts the answer, printing `invalid` after each rejection.
    pub fn ask_until<T, F>(
        &mut self,
        question: &str,
        invalid: &str,
        parse: F,
    ) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            log::debug!("rejected answer {answer:?}");
            writeln!(self.output, "\n{invalid}")?;
        }
    }

    /// Ask a yes/no question until one of the two is given.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        self.ask_until(question, "Please Enter Valid input.", parse_yes_no)
    }
}

// ---------------------------------------------------------------------------
// Answer parsing
// ---------------------------------------------------------------------------

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

pub fn parse_city(input: &str) -> Option<City> {
    City::from_name(input)
}

/// `1`–`12` (optionally zero-padded to two digits), a full month name, or `all`.
pub fn parse_month(input: &str) -> Option<MonthFilter> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Some(MonthFilter::All);
    }
    if (1..=2).contains(&input.len()) && input.bytes().all(|b| b.is_ascii_digit()) {
        return input
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .map(MonthFilter::Only);
    }
    config::month_number(input).map(MonthFilter::Only)
}

/// A full weekday name or `all`.
pub fn parse_day(input: &str) -> Option<DayFilter> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Some(DayFilter::All);
    }
    CALENDAR_DAYS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
        .map(|(_, day)| DayFilter::Only(*day))
}

// ---------------------------------------------------------------------------
// Filter selection
// ---------------------------------------------------------------------------

/// Prompt for city, month and day; each is asked again until valid.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterSelection, PromptError> {
    writeln!(console.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city = console.ask_until(CITY_PROMPT, "Please Enter Valid City.", parse_city)?;
    let month = console.ask_until(MONTH_PROMPT, "Please Enter Valid Month.", parse_month)?;
    let day = console.ask_until(
        DAY_PROMPT,
        "Please Enter valid day of week to filter by.",
        parse_day,
    )?;

    stats::rule(console.out())?;
    log::info!("Selected city={city} month={month} day={day}");
    Ok(FilterSelection { city, month, day })
}
