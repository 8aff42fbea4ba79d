//! Launch repository: fetches, caches, and normalizes launch records
//!
//! Raw endpoint payloads flow cache-first: a fresh cached payload is used
//! as-is, otherwise the API is hit once and the result written back. Rocket
//! and launchpad ids are substituted with display names via lookup maps
//! built once at construction. Every failure degrades — an unavailable
//! endpoint yields an empty result, a malformed record is skipped — so the
//! interactive surface never sees an error from this layer.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::Launch;
use crate::api::SpaceXClient;
use crate::cache::CacheStore;

/// Display name used when a record carries no usable value
const UNKNOWN: &str = "Unknown";

/// Fields extracted from a raw launch record; all best-effort
#[derive(Debug, Deserialize)]
struct RawLaunch {
    name: Option<String>,
    date_utc: Option<String>,
    success: Option<bool>,
    rocket: Option<String>,
    launchpad: Option<String>,
}

/// Fields extracted from a raw rocket or launchpad record
#[derive(Debug, Deserialize)]
struct RawNamed {
    id: Option<String>,
    name: Option<String>,
}

/// Loads launch records and resolves their rocket/launchpad names
///
/// The two lookup maps are populated once at construction and never
/// mutated afterwards; launches parsed later depend only on the resolved
/// names, not on the maps themselves.
#[derive(Debug)]
pub struct LaunchRepository {
    api: SpaceXClient,
    cache: Option<CacheStore>,
    /// When set, cached payloads are ignored for reads this run
    refresh: bool,
    rocket_names: HashMap<String, String>,
    launchpad_names: HashMap<String, String>,
}

impl LaunchRepository {
    /// Builds a repository and populates its lookup maps.
    ///
    /// Each map comes from the cache when fresh, otherwise from one API
    /// fetch (written back best-effort). An unavailable endpoint leaves the
    /// map empty, which downgrades enrichment to showing raw ids.
    pub fn new(api: SpaceXClient, cache: Option<CacheStore>, refresh: bool) -> Self {
        let mut repository = Self {
            api,
            cache,
            refresh,
            rocket_names: HashMap::new(),
            launchpad_names: HashMap::new(),
        };
        repository.rocket_names = repository
            .load_records("rockets")
            .map(|records| build_name_map(&records))
            .unwrap_or_default();
        repository.launchpad_names = repository
            .load_records("launchpads")
            .map(|records| build_name_map(&records))
            .unwrap_or_default();
        repository
    }

    /// Returns all launches as normalized entities.
    ///
    /// An unavailable `launches` endpoint yields an empty list, not an
    /// error; the cause is logged.
    pub fn get_launches(&self) -> Vec<Launch> {
        match self.load_records("launches") {
            Some(records) => parse_launches(&records, &self.rocket_names, &self.launchpad_names),
            None => Vec::new(),
        }
    }

    /// Raw records for an endpoint, cache-first with write-back.
    ///
    /// `None` means the endpoint was unavailable this round: no fresh cache
    /// entry and the fetch failed.
    fn load_records(&self, endpoint: &str) -> Option<Vec<Value>> {
        if !self.refresh {
            if let Some(ref cache) = self.cache {
                if let Some(records) = cache.load::<Vec<Value>>(endpoint) {
                    debug!(
                        "using cached '{}' payload ({} records)",
                        endpoint,
                        records.len()
                    );
                    return Some(records);
                }
            }
        }

        match self.api.fetch(endpoint) {
            Ok(records) => {
                if let Some(ref cache) = self.cache {
                    cache.save(endpoint, &records);
                }
                Some(records)
            }
            Err(e) => {
                warn!("failed to fetch '{}': {}", endpoint, e);
                None
            }
        }
    }
}

/// Builds an id→name map from rocket or launchpad records.
///
/// Records missing either field are skipped individually; the map is built
/// from whatever remains.
fn build_name_map(records: &[Value]) -> HashMap<String, String> {
    let mut names = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let named: RawNamed = match serde_json::from_value(record.clone()) {
            Ok(named) => named,
            Err(e) => {
                warn!("skipping malformed lookup record {}: {}", index, e);
                continue;
            }
        };
        match (named.id, named.name) {
            (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => {
                names.insert(id, name);
            }
            _ => warn!("skipping lookup record {} without id and name", index),
        }
    }
    names
}

/// Converts raw launch records into entities, skipping bad ones.
fn parse_launches(
    records: &[Value],
    rockets: &HashMap<String, String>,
    launchpads: &HashMap<String, String>,
) -> Vec<Launch> {
    let mut launches = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match parse_launch(record, rockets, launchpads) {
            Ok(launch) => launches.push(launch),
            Err(reason) => warn!("skipping launch record {}: {}", index, reason),
        }
    }
    launches
}

/// Parses one raw record into a `Launch`.
///
/// `date_utc` is the only mandatory field; everything else falls back to a
/// default or to the raw id.
fn parse_launch(
    record: &Value,
    rockets: &HashMap<String, String>,
    launchpads: &HashMap<String, String>,
) -> Result<Launch, String> {
    let raw: RawLaunch =
        serde_json::from_value(record.clone()).map_err(|e| format!("malformed record: {}", e))?;

    let date_str = raw
        .date_utc
        .filter(|s| !s.is_empty())
        .ok_or("missing date_utc")?;
    let date_utc =
        parse_utc_date(&date_str).ok_or_else(|| format!("unparseable date_utc '{}'", date_str))?;

    Ok(Launch {
        name: raw.name.unwrap_or_else(|| UNKNOWN.to_string()),
        date_utc,
        success: raw.success,
        rocket: resolve_name(raw.rocket, rockets),
        launchpad: resolve_name(raw.launchpad, launchpads),
    })
}

/// Substitutes an id with its display name, keeping the id itself when the
/// map has no entry and `Unknown` when there is no id at all.
fn resolve_name(id: Option<String>, names: &HashMap<String, String>) -> String {
    match id {
        Some(id) if !id.is_empty() => names.get(&id).cloned().unwrap_or(id),
        _ => UNKNOWN.to_string(),
    }
}

/// Parses an ISO-8601 timestamp, tolerating a trailing `Z` designator and
/// optional fractional seconds.
fn parse_utc_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    let trimmed = raw.strip_suffix('Z').unwrap_or(raw);
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
