//! Axis scales: pure domain → pixel mappings built once per chart.
//!
//! Both axes are plain linear interpolations into `[margin, dimension -
//! margin]`; the duration axis range is inverted so larger values plot
//! higher. The time domain is padded by one year on the low end only, so the
//! earliest point's glyph is never clipped against the left margin.

use chrono::{DateTime, Datelike, Days, Utc};

use crate::chart::{CHART_HEIGHT, MARGIN};
use crate::dataset::Sighting;

/// A linear mapping from a numeric domain to a pixel range.
///
/// A collapsed domain (`min == max`) projects every input to the midpoint of
/// the range rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Project a domain value into pixel space.
    pub fn project(&self, value: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return ((r0 + r1) * 0.5) as f32;
        }
        let t = (value - d0) / (d1 - d0);
        (r0 + t * (r1 - r0)) as f32
    }
}

/// The minimum first-sighting date shifted back by one calendar year.
///
/// Feb 29 minimum dates fall back to a 365-day shift since the previous year
/// has no such day.
pub fn pad_year_low(date: DateTime<Utc>) -> DateTime<Utc> {
    date.with_year(date.year() - 1)
        .unwrap_or_else(|| date - Days::new(365))
}

/// The pair of scales a chart projects through.
#[derive(Debug, Clone, Copy)]
pub struct ChartScales {
    /// First-sighting date (seconds since epoch) → x pixel.
    pub time: LinearScale,
    /// Duration (seconds) → y pixel, inverted.
    pub duration: LinearScale,
}

impl ChartScales {
    /// Build both scales from the full record set and the host-supplied width.
    ///
    /// Callers guarantee `records` is non-empty; the dataset normalizer
    /// rejects empty input before a chart can be built.
    pub fn build(records: &[Sighting], width: f32) -> Self {
        debug_assert!(!records.is_empty());

        let mut min_date = records[0].first_date();
        let mut max_date = min_date;
        let mut min_duration = records[0].duration_first_year;
        let mut max_duration = min_duration;
        for r in records.iter().skip(1) {
            let d = r.first_date();
            if d < min_date {
                min_date = d;
            }
            if d > max_date {
                max_date = d;
            }
            if r.duration_first_year < min_duration {
                min_duration = r.duration_first_year;
            }
            if r.duration_first_year > max_duration {
                max_duration = r.duration_first_year;
            }
        }

        let time = LinearScale::new(
            (
                pad_year_low(min_date).timestamp() as f64,
                max_date.timestamp() as f64,
            ),
            (MARGIN as f64, (width - MARGIN) as f64),
        );
        let duration = LinearScale::new(
            (min_duration, max_duration),
            ((CHART_HEIGHT - MARGIN) as f64, MARGIN as f64),
        );
        Self { time, duration }
    }

    /// A record's projected pixel position.
    pub fn project(&self, record: &Sighting) -> (f32, f32) {
        (
            self.time.project(record.first_date().timestamp() as f64),
            self.duration.project(record.duration_first_year),
        )
    }
}
