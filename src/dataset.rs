//! Sighting dataset: raw record deserialization and normalization.
//!
//! The raw input is a JSON array of report objects as exported by the sighting
//! database: a list of date strings (one per reported occurrence of the same
//! underlying event, chronological), an optional duration in seconds, and
//! free-text location fields. [`normalize`] converts those into [`Sighting`]
//! values with parsed timestamps and a guaranteed duration, failing fast on
//! malformed dates instead of silently dropping records: every downstream
//! scale computation depends on each record carrying a valid first date.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

/// Duration (seconds) assumed when a report omits it or gives zero.
pub const DEFAULT_DURATION_SECS: f64 = 20.0;

/// A sighting report as it appears in the source JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSighting {
    /// Date strings, first element = first sighting. Chronological as supplied.
    pub dts: Vec<String>,
    /// Duration of the first occurrence in seconds, when reported.
    #[serde(default)]
    pub duration: Option<f64>,
    /// Region code used for color-coding; falls back to `state` when absent.
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub text: String,
}

/// A normalized sighting report.
///
/// Invariants held after [`normalize`]: `dates` is non-empty and
/// chronologically ordered as supplied; `duration_first_year` is always a
/// finite number (defaulted when the source omits it).
#[derive(Debug, Clone)]
pub struct Sighting {
    pub dates: Vec<DateTime<Utc>>,
    pub duration_first_year: f64,
    pub region: String,
    pub state: String,
    pub country: String,
    pub text: String,
}

impl Sighting {
    /// Date of the first reported occurrence.
    pub fn first_date(&self) -> DateTime<Utc> {
        self.dates[0]
    }
}

/// Errors raised while loading or normalizing the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index}: unparseable date {value:?}")]
    BadDate { index: usize, value: String },
    #[error("record {index} has no dates")]
    NoDates { index: usize },
    #[error("dataset contains no records")]
    Empty,
}

/// Parse one raw date string.
///
/// The source mixes full RFC 3339 stamps with bare dates, so several formats
/// are tried in order of specificity.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&ndt));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&ndt));
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(nd) = NaiveDate::parse_from_str(raw, fmt) {
            let ndt = nd.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    None
}

/// Normalize raw records into [`Sighting`] values.
///
/// No records are dropped or reordered. Fails on the first record with an
/// unparseable or missing date, and on an entirely empty input.
pub fn normalize(raw: Vec<RawSighting>) -> Result<Vec<Sighting>, DataError> {
    if raw.is_empty() {
        return Err(DataError::Empty);
    }

    let mut records = Vec::with_capacity(raw.len());
    for (index, r) in raw.into_iter().enumerate() {
        if r.dts.is_empty() {
            return Err(DataError::NoDates { index });
        }
        let mut dates = Vec::with_capacity(r.dts.len());
        for value in &r.dts {
            let dt = parse_date(value).ok_or_else(|| DataError::BadDate {
                index,
                value: value.clone(),
            })?;
            dates.push(dt);
        }
        let duration_first_year = match r.duration {
            Some(d) if d != 0.0 => d,
            _ => DEFAULT_DURATION_SECS,
        };
        let region = r.region.unwrap_or_else(|| r.state.clone());
        records.push(Sighting {
            dates,
            duration_first_year,
            region,
            state: r.state,
            country: r.country,
            text: r.text,
        });
    }
    Ok(records)
}

/// Load and normalize a dataset from a JSON string.
pub fn load_from_str(json: &str) -> Result<Vec<Sighting>, DataError> {
    let raw: Vec<RawSighting> = serde_json::from_str(json)?;
    normalize(raw)
}

/// Load and normalize a dataset from a file on disk.
pub fn load_from_path(path: &Path) -> Result<Vec<Sighting>, DataError> {
    let json = std::fs::read_to_string(path)?;
    let records = load_from_str(&json)?;
    log::info!(
        "loaded {} sighting records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Number of reports per region code, sorted by code.
pub fn region_counts(records: &[Sighting]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for r in records {
        *counts.entry(r.region.clone()).or_insert(0) += 1;
    }
    counts
}
