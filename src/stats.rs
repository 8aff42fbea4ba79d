//! Aggregate statistics over launch collections
//!
//! Four independent aggregations, each a single linear pass. Results are
//! materialized maps iterating in first-encounter order, which keeps the
//! printed output stable for a given input. A malformed element (an empty
//! rocket or site name) is skipped with a diagnostic, never aborting the
//! batch.

use indexmap::IndexMap;
use tracing::warn;

use crate::data::Launch;

/// Success rate per rocket as a fraction in [0, 1].
///
/// Only a known-successful outcome counts toward the numerator; unknown
/// outcomes count toward the total. A rocket never seen is simply absent.
pub fn success_rate_by_rocket(launches: &[Launch]) -> IndexMap<String, f64> {
    let mut tallies: IndexMap<String, (u32, u32)> = IndexMap::new();

    for (index, launch) in launches.iter().enumerate() {
        if launch.rocket.is_empty() {
            warn!("skipping launch {} without a rocket name", index);
            continue;
        }
        let (successes, total) = tallies.entry(launch.rocket.clone()).or_insert((0, 0));
        *total += 1;
        if launch.success == Some(true) {
            *successes += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(rocket, (successes, total))| {
            let rate = if total == 0 {
                0.0
            } else {
                f64::from(successes) / f64::from(total)
            };
            (rocket, rate)
        })
        .collect()
}

/// Launch count per launch site.
pub fn launches_per_site(launches: &[Launch]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for (index, launch) in launches.iter().enumerate() {
        if launch.launchpad.is_empty() {
            warn!("skipping launch {} without a launchpad name", index);
            continue;
        }
        *counts.entry(launch.launchpad.clone()).or_insert(0) += 1;
    }

    counts
}

/// Launch count per `YYYY-MM` bucket.
pub fn launch_frequency_monthly(launches: &[Launch]) -> IndexMap<String, usize> {
    bucket_by_date(launches, "%Y-%m")
}

/// Launch count per `YYYY` bucket.
pub fn launch_frequency_yearly(launches: &[Launch]) -> IndexMap<String, usize> {
    bucket_by_date(launches, "%Y")
}

fn bucket_by_date(launches: &[Launch], pattern: &str) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for launch in launches {
        let key = launch.date_utc.format(pattern).to_string();
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
}
