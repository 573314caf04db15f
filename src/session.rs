//! The interactive loop: select filters, optionally browse, report, restart.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::browse;
use crate::config::Config;
use crate::data::loader;
use crate::data::model::TripTable;
use crate::error::PromptError;
use crate::prompt::{self, Console};
use crate::stats;

enum State {
    SelectFilters,
    MaybeBrowse(TripTable),
    Report(TripTable),
    MaybeRestart,
}

/// Run sessions until the user declines to restart or input ends.
///
/// A dataset that cannot be loaded aborts the run with an error.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> Result<()> {
    match drive(console, config) {
        Err(err) if is_input_closed(&err) => {
            log::info!("input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

fn drive<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> Result<()> {
    let mut state = State::SelectFilters;
    loop {
        state = match state {
            State::SelectFilters => {
                let selection = prompt::get_filters(console)?;
                let table = loader::load(config, &selection)
                    .with_context(|| format!("failed to load data for {}", selection.city))?;
                if table.is_empty() {
                    log::warn!("no trips match {selection:?}");
                    writeln!(
                        console.out(),
                        "\nNo trips match the selected filters; statistics will be empty."
                    )?;
                }
                State::MaybeBrowse(table)
            }
            State::MaybeBrowse(table) => {
                browse::browse(console, &table)?;
                State::Report(table)
            }
            State::Report(table) => {
                stats::report_all(console.out(), &table)?;
                State::MaybeRestart
            }
            State::MaybeRestart => {
                // Anything but "yes" ends the run.
                if console.ask("Would you like to restart? Enter yes or no.")? == "yes" {
                    State::SelectFilters
                } else {
                    return Ok(());
                }
            }
        };
    }
}

fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<PromptError>(), Some(PromptError::InputClosed))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::LoadError;

    const CHICAGO: &str = "\
Start Time,End Time,Start Station,End Station,User Type,Gender,Birth Year
2017-03-06 08:00:00,2017-03-06 08:10:00,Canal St,Clark St,Subscriber,Male,1990
2017-03-07 09:00:00,2017-03-07 09:20:00,Canal St,State St,Customer,,
2017-04-03 17:00:00,2017-04-03 17:05:00,Lake St,Clark St,Subscriber,Female,1985
";

    fn data_dir() -> (TempDir, Config) {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("chicago.csv"), CHICAGO).expect("write fixture");
        let config = Config {
            data_dir: dir.path().to_path_buf(),
        };
        (dir, config)
    }

    fn play(input: &str, config: &Config) -> (Result<()>, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let result = run(&mut console, config);
        let text = String::from_utf8(console.out().clone()).expect("utf8");
        (result, text)
    }

    #[test]
    fn one_full_iteration_then_quit() {
        let (_dir, config) = data_dir();
        let (result, text) = play("chicago\n3\nall\nno\nno\n", &config);
        result.expect("session");

        assert!(text.contains("Most common months for the selected data set are:- March"));
        assert!(text.contains("Most commonly used start stations are:- Canal St"));
        assert!(text.contains(
            "Total trip time for the current data set (days hh:mm:ss.ffffff) is:- 0 days 00:30:00"
        ));
        assert!(text.contains(
            "Mean trip time for the current data set (days hh:mm:ss.ffffff) is:- 0 days 00:15:00"
        ));
        assert!(text.contains("Number of Records whose gender value is missing = 1"));
        assert_eq!(text.matches("Would you like to restart?").count(), 1);
    }

    #[test]
    fn restart_runs_a_fresh_selection() {
        let (_dir, config) = data_dir();
        let input = "chicago\n3\nall\nno\nyes\nchicago\napril\nmonday\nno\nno\n";
        let (result, text) = play(input, &config);
        result.expect("session");

        assert_eq!(text.matches("Hello! Let's explore").count(), 2);
        assert!(text.contains("Most common months for the selected data set are:- March"));
        assert!(text.contains("Most common months for the selected data set are:- April"));
        assert!(text.contains("Most common hours for the selected data set are:- 05 PM"));
    }

    #[test]
    fn empty_selection_is_announced_and_reported() {
        let (_dir, config) = data_dir();
        let (result, text) = play("chicago\ndecember\nall\nno\nno\n", &config);
        result.expect("session");
        assert!(text.contains("No trips match the selected filters"));
        assert!(text.contains(stats::NO_TRIPS));
    }

    #[test]
    fn missing_dataset_aborts_with_load_error() {
        let (_dir, config) = data_dir();
        let (result, _) = play("washington\nall\nall\n", &config);
        let err = result.expect_err("washington.csv is absent");
        assert!(err.to_string().contains("washington"), "{err:#}");
        assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::Open { .. })));
    }

    #[test]
    fn unrecognised_restart_answer_ends_the_run() {
        let (_dir, config) = data_dir();
        let (result, text) = play("chicago\nall\nall\nno\nmaybe\n", &config);
        result.expect("session");
        assert_eq!(text.matches("Would you like to restart?").count(), 1);
        assert!(!text.contains("Please Enter Valid input."));
        assert_eq!(text.matches("Hello! Let's explore").count(), 1);
    }

    #[test]
    fn restart_answer_is_case_insensitive() {
        let (_dir, config) = data_dir();
        let input = "chicago\nall\nall\nno\nYES\nchicago\nall\nall\nno\nno\n";
        let (result, text) = play(input, &config);
        result.expect("session");
        assert_eq!(text.matches("Hello! Let's explore").count(), 2);
    }

    #[test]
    fn end_of_input_ends_quietly() {
        let (_dir, config) = data_dir();
        let (result, _) = play("chicago\nall\n", &config);
        result.expect("closed input is not an error");
    }
}
