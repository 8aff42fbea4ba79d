//! Interactive filtering and statistics menu
//!
//! A line-oriented loop over stdin/stdout: each pass shows the menu,
//! applies at most one filter to the full launch list, and prints the
//! result. Malformed input cancels the step and the loop continues; EOF or
//! an output failure ends the session gracefully.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::io::{self, BufRead, Write};
use tracing::warn;

use crate::data::{filter_launches, FilterCriteria, Launch};
use crate::stats;

/// Result of parsing one date prompt entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// Nothing entered; this bound stays open
    Empty,
    /// A well-formed `YYYY-MM-DD` date, anchored at midnight UTC
    Valid(DateTime<Utc>),
    /// Unparseable entry
    Invalid,
}

/// Parses a `YYYY-MM-DD` prompt entry.
pub fn parse_date_input(raw: &str) -> DateInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DateInput::Empty;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => DateInput::Valid(date.and_time(NaiveTime::MIN).and_utc()),
        Err(_) => DateInput::Invalid,
    }
}

/// Maps a yes/no prompt answer to a success constraint; anything else
/// applies no constraint.
pub fn parse_success_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Runs the menu loop on the process stdin/stdout.
pub fn run(launches: &[Launch]) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_session(launches, &mut stdin.lock(), &mut stdout.lock()) {
        warn!("session ended on an io error: {}", e);
    }
}

/// The menu loop itself, driven over generic handles so tests can script a
/// session.
pub fn run_session<R: BufRead, W: Write>(
    launches: &[Launch],
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Filter options:")?;
        writeln!(out, "1. Date range")?;
        writeln!(out, "2. Rocket name")?;
        writeln!(out, "3. Rocket type")?;
        writeln!(out, "4. Launch success/failure")?;
        writeln!(out, "5. Launch site")?;
        writeln!(out, "6. Show all launches")?;
        writeln!(out, "7. Show statistics")?;
        writeln!(out, "0. Exit")?;

        let choice = match prompt(input, out, "Choose a filter option: ")? {
            Some(choice) => choice,
            None => break,
        };

        match choice.trim() {
            "1" => {
                let start_raw = match prompt(input, out, "Start date (YYYY-MM-DD): ")? {
                    Some(raw) => raw,
                    None => break,
                };
                let end_raw = match prompt(input, out, "End date (YYYY-MM-DD): ")? {
                    Some(raw) => raw,
                    None => break,
                };

                let start = parse_date_input(&start_raw);
                let end = parse_date_input(&end_raw);

                if start == DateInput::Invalid || end == DateInput::Invalid {
                    writeln!(out, "Invalid date format. Use YYYY-MM-DD. Filter cancelled.")?;
                    continue;
                }

                let (start, end) = match (start, end) {
                    (DateInput::Empty, DateInput::Empty) => {
                        writeln!(out, "No valid dates provided. Filter cancelled.")?;
                        continue;
                    }
                    (DateInput::Valid(s), DateInput::Valid(e)) if s > e => {
                        writeln!(out, "Start date must be before end date. Filter cancelled.")?;
                        continue;
                    }
                    (start, end) => (date_value(start), date_value(end)),
                };

                let criteria = FilterCriteria {
                    start_date: start,
                    end_date: end,
                    ..Default::default()
                };
                write_filter_result(out, &filter_launches(launches, &criteria))?;
            }

            "2" => {
                let name = match prompt(input, out, "Rocket name: ")? {
                    Some(name) => name,
                    None => break,
                };
                if name.trim().is_empty() {
                    continue;
                }
                let criteria = FilterCriteria {
                    name: Some(name.trim().to_string()),
                    ..Default::default()
                };
                write_filter_result(out, &filter_launches(launches, &criteria))?;
            }

            "3" => {
                let rocket = match prompt(input, out, "Rocket type: ")? {
                    Some(rocket) => rocket,
                    None => break,
                };
                if rocket.trim().is_empty() {
                    continue;
                }
                let criteria = FilterCriteria {
                    rocket: Some(rocket.trim().to_string()),
                    ..Default::default()
                };
                write_filter_result(out, &filter_launches(launches, &criteria))?;
            }

            "4" => {
                let answer = match prompt(input, out, "Launch success? (yes/no): ")? {
                    Some(answer) => answer,
                    None => break,
                };
                let criteria = FilterCriteria {
                    success: parse_success_answer(&answer),
                    ..Default::default()
                };
                write_filter_result(out, &filter_launches(launches, &criteria))?;
            }

            "5" => {
                let site = match prompt(input, out, "Launch site name: ")? {
                    Some(site) => site,
                    None => break,
                };
                if site.trim().is_empty() {
                    continue;
                }
                let criteria = FilterCriteria {
                    launchpad: Some(site.trim().to_string()),
                    ..Default::default()
                };
                write_filter_result(out, &filter_launches(launches, &criteria))?;
            }

            "6" => write_launches(out, launches)?,

            "7" => write_statistics(out, launches)?,

            "0" => {
                writeln!(out, "Exiting...")?;
                break;
            }

            other => writeln!(out, "Invalid choice '{}', please try again.", other.trim())?,
        }
    }

    Ok(())
}

fn date_value(input: DateInput) -> Option<DateTime<Utc>> {
    match input {
        DateInput::Valid(date) => Some(date),
        _ => None,
    }
}

/// Writes a prompt, flushes, and reads one line; `None` on EOF.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn write_filter_result<W: Write>(out: &mut W, filtered: &[Launch]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Filtered launches count: {}", filtered.len())?;
    write_launches(out, filtered)
}

/// Prints the per-launch listing.
pub fn write_launches<W: Write>(out: &mut W, launches: &[Launch]) -> io::Result<()> {
    if launches.is_empty() {
        writeln!(out, "No launches to display.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "--- Launch Details ---")?;
    for (index, launch) in launches.iter().enumerate() {
        writeln!(
            out,
            "{}. Name: {}, Date: {}, Rocket: {}, Success: {}, Launchpad: {}",
            index + 1,
            launch.name,
            launch.date_utc.format("%Y-%m-%d"),
            launch.rocket,
            launch.outcome(),
            launch.launchpad
        )?;
    }
    Ok(())
}

/// Prints all four aggregations.
pub fn write_statistics<W: Write>(out: &mut W, launches: &[Launch]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Success rate by rocket:")?;
    for (rocket, rate) in stats::success_rate_by_rocket(launches) {
        writeln!(out, "{}: {:.2}%", rocket, rate * 100.0)?;
    }

    writeln!(out)?;
    writeln!(out, "Launches per site:")?;
    for (site, count) in stats::launches_per_site(launches) {
        writeln!(out, "{}: {}", site, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly launch frequency:")?;
    for (month, count) in stats::launch_frequency_monthly(launches) {
        writeln!(out, "{}: {}", month, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Yearly launch frequency:")?;
    for (year, count) in stats::launch_frequency_yearly(launches) {
        writeln!(out, "{}: {}", year, count)?;
    }

    Ok(())
}
