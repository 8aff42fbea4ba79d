//! Core data models for the launch tracker
//!
//! Holds the normalized `Launch` entity produced by the repository, the
//! user-supplied `FilterCriteria`, and the filtering logic applied to
//! launch collections.

pub mod launches;

pub use launches::LaunchRepository;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single normalized flight record
///
/// Rocket and launchpad hold resolved display names, not API ids; the
/// lookup maps used for the substitution are not retained here. Instances
/// are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Mission name
    pub name: String,
    /// Launch time, UTC
    pub date_utc: DateTime<Utc>,
    /// Outcome: `Some(true)` success, `Some(false)` failure, `None` unknown
    pub success: Option<bool>,
    /// Rocket display name
    pub rocket: String,
    /// Launch site display name
    pub launchpad: String,
}

impl Launch {
    /// Outcome rendered for display.
    pub fn outcome(&self) -> &'static str {
        match self.success {
            Some(true) => "yes",
            Some(false) => "no",
            None => "unknown",
        }
    }
}

/// Optional constraints for filtering launches
///
/// Unset fields impose no constraint; the default value matches every
/// launch. `success` is matched exactly against the entity's tri-state, so
/// filtering on `Some(false)` selects known failures only, never unknowns.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Mission name, matched case-insensitively after trimming
    pub name: Option<String>,
    /// Earliest launch time, inclusive
    pub start_date: Option<DateTime<Utc>>,
    /// Latest launch time, inclusive
    pub end_date: Option<DateTime<Utc>>,
    /// Rocket display name, matched case-insensitively after trimming
    pub rocket: Option<String>,
    /// Required outcome
    pub success: Option<bool>,
    /// Launch site display name, matched case-insensitively after trimming
    pub launchpad: Option<String>,
}

/// Case-insensitive, whitespace-trimmed equality used by the text criteria.
fn text_matches(value: &str, wanted: &str) -> bool {
    value.trim().eq_ignore_ascii_case(wanted.trim())
}

/// Applies `criteria` to `launches`, returning the matching subset.
///
/// Predicates are applied as a conjunction in a fixed order: start date,
/// end date, name, rocket, success, launchpad. The input is never mutated
/// and the result preserves the input's relative order.
pub fn filter_launches(launches: &[Launch], criteria: &FilterCriteria) -> Vec<Launch> {
    let mut result: Vec<Launch> = launches.to_vec();

    if let Some(start) = criteria.start_date {
        result.retain(|launch| launch.date_utc >= start);
    }

    if let Some(end) = criteria.end_date {
        result.retain(|launch| launch.date_utc <= end);
    }

    if let Some(ref name) = criteria.name {
        result.retain(|launch| text_matches(&launch.name, name));
    }

    if let Some(ref rocket) = criteria.rocket {
        result.retain(|launch| text_matches(&launch.rocket, rocket));
    }

    if let Some(success) = criteria.success {
        result.retain(|launch| launch.success == Some(success));
    }

    if let Some(ref launchpad) = criteria.launchpad {
        result.retain(|launch| text_matches(&launch.launchpad, launchpad));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn launch(name: &str, date: (i32, u32, u32), success: Option<bool>) -> Launch {
        Launch {
            name: name.to_string(),
            date_utc: Utc
                .with_ymd_and_hms(date.0, date.1, date.2, 0, 0, 0)
                .unwrap(),
            success,
            rocket: "Falcon 9".to_string(),
            launchpad: "Pad A".to_string(),
        }
    }

    fn sample() -> Vec<Launch> {
        vec![
            launch("Starlink-1", (2020, 1, 7), Some(true)),
            launch("CRS-20", (2020, 3, 7), Some(true)),
            launch("Amos-6", (2016, 9, 1), Some(false)),
            launch("Zuma", (2018, 1, 8), None),
        ]
    }

    #[test]
    fn default_criteria_matches_everything_in_order() {
        let launches = sample();
        let result = filter_launches(&launches, &FilterCriteria::default());
        assert_eq!(result, launches);
    }

    #[test]
    fn filtering_is_idempotent_and_does_not_mutate_input() {
        let launches = sample();
        let criteria = FilterCriteria {
            success: Some(true),
            ..Default::default()
        };

        let first = filter_launches(&launches, &criteria);
        let second = filter_launches(&launches, &criteria);

        assert_eq!(first, second);
        assert_eq!(launches, sample());
    }

    #[test]
    fn result_is_an_order_preserving_subset() {
        let launches = sample();
        let criteria = FilterCriteria {
            start_date: Some(Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };

        let result = filter_launches(&launches, &criteria);

        let names: Vec<&str> = result.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Starlink-1", "CRS-20", "Zuma"]);
    }

    #[test]
    fn name_match_ignores_case_and_whitespace() {
        let launches = sample();
        let criteria = FilterCriteria {
            name: Some("  crs-20 ".to_string()),
            ..Default::default()
        };

        let result = filter_launches(&launches, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "CRS-20");
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let launches = sample();
        let criteria = FilterCriteria {
            start_date: Some(Utc.with_ymd_and_hms(2020, 1, 7, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2020, 3, 7, 0, 0, 0).unwrap()),
            ..Default::default()
        };

        let result = filter_launches(&launches, &criteria);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Starlink-1");
        assert_eq!(result[1].name, "CRS-20");
    }

    #[test]
    fn success_true_selects_only_successes() {
        let launches = sample();
        let criteria = FilterCriteria {
            success: Some(true),
            ..Default::default()
        };

        let result = filter_launches(&launches, &criteria);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|l| l.success == Some(true)));
    }

    #[test]
    fn success_false_excludes_unknown_outcomes() {
        let launches = sample();
        let criteria = FilterCriteria {
            success: Some(false),
            ..Default::default()
        };

        let result = filter_launches(&launches, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Amos-6");
    }

    #[test]
    fn rocket_and_launchpad_criteria_combine_with_dates() {
        let mut launches = sample();
        launches.push(Launch {
            name: "Heavy Demo".to_string(),
            date_utc: Utc.with_ymd_and_hms(2018, 2, 6, 0, 0, 0).unwrap(),
            success: Some(true),
            rocket: "Falcon Heavy".to_string(),
            launchpad: "Pad B".to_string(),
        });

        let criteria = FilterCriteria {
            start_date: Some(Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap()),
            rocket: Some("falcon heavy".to_string()),
            launchpad: Some("PAD B".to_string()),
            ..Default::default()
        };

        let result = filter_launches(&launches, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Heavy Demo");
    }

    #[test]
    fn outcome_labels_cover_the_tri_state() {
        assert_eq!(launch("a", (2020, 1, 1), Some(true)).outcome(), "yes");
        assert_eq!(launch("b", (2020, 1, 1), Some(false)).outcome(), "no");
        assert_eq!(launch("c", (2020, 1, 1), None).outcome(), "unknown");
    }
}
