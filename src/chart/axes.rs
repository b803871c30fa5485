//! Axis rendering: tick generation and painting for both axes.
//!
//! The time axis sits at the bottom with year-formatted ticks (10 of them on
//! wide charts, 5 on narrow ones); the duration axis sits on the left with up
//! to 10 ticks. Ticks are 5 px long with 8 px label padding.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use egui::{Align2, FontId, Painter, Pos2, Stroke, pos2};

use super::{AXIS_COLOR, CAPTION_COLOR, CHART_HEIGHT, MARGIN};
use crate::scale::ChartScales;

const TICK_LEN: f32 = 5.0;
const TICK_PADDING: f32 = 8.0;

/// Evenly spaced ticks over `[min, max]` using 1-2-5 steps, at most `target`
/// of them. A collapsed domain yields the single value.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) {
        return vec![min];
    }
    let range = max - min;
    let base = 10f64.powf(range.log10().floor());
    let step = [0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * base)
        .find(|step| range / step <= target as f64)
        .unwrap_or(range);

    let mut ticks = Vec::new();
    let mut value = (min / step).ceil() * step;
    while value <= max + step * 1e-9 {
        ticks.push(value);
        value += step;
    }
    ticks
}

/// Calendar years to label between two epoch-second bounds, at most `target`
/// of them, stepped by a whole number of years.
pub fn year_ticks(min_ts: f64, max_ts: f64, target: usize) -> Vec<i32> {
    let min_year = year_of(min_ts);
    let max_year = year_of(max_ts);
    if max_year <= min_year {
        return vec![min_year];
    }
    let span = (max_year - min_year) as usize;
    let step = [1, 2, 5, 10, 20, 25, 50, 100]
        .into_iter()
        .find(|s| span / s <= target)
        .unwrap_or(span) as i32;

    let mut first = min_year.div_euclid(step) * step;
    if first < min_year {
        first += step;
    }
    (0..)
        .map(|i| first + i * step)
        .take_while(|y| *y <= max_year)
        .collect()
}

fn year_of(ts: f64) -> i32 {
    DateTime::<Utc>::from_timestamp(ts as i64, 0)
        .map(|d| d.year())
        .unwrap_or(1970)
}

/// Epoch seconds of January 1st of `year`.
pub fn year_start_ts(year: i32) -> f64 {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .map(|d| d.timestamp() as f64)
        .unwrap_or(0.0)
}

fn format_duration_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Paint both axes, their ticks, and the captions. `origin` is the chart
/// rect's top-left corner in screen space; all geometry below is chart-local.
pub fn draw(painter: &Painter, origin: Pos2, width: f32, scales: &ChartScales) {
    let at = |x: f32, y: f32| pos2(origin.x + x, origin.y + y);
    let stroke = Stroke::new(1.0, AXIS_COLOR);
    let font = FontId::proportional(12.0);

    // Time axis along the bottom.
    let baseline = CHART_HEIGHT - MARGIN;
    painter.line_segment([at(MARGIN, baseline), at(width - MARGIN, baseline)], stroke);
    let (t0, t1) = scales.time.domain();
    let target = if width > 500.0 { 10 } else { 5 };
    for year in year_ticks(t0, t1, target) {
        let ts = year_start_ts(year);
        if ts < t0 || ts > t1 {
            continue;
        }
        let x = scales.time.project(ts);
        painter.line_segment([at(x, baseline), at(x, baseline + TICK_LEN)], stroke);
        painter.text(
            at(x, baseline + TICK_LEN + TICK_PADDING),
            Align2::CENTER_TOP,
            year.to_string(),
            font.clone(),
            AXIS_COLOR,
        );
    }
    painter.text(
        at(width / 2.0 - 100.0, CHART_HEIGHT - 10.0),
        Align2::LEFT_BOTTOM,
        "Year when first visible",
        font.clone(),
        CAPTION_COLOR,
    );

    // Duration axis along the left.
    painter.line_segment([at(MARGIN, MARGIN), at(MARGIN, baseline)], stroke);
    let (d0, d1) = scales.duration.domain();
    for tick in linear_ticks(d0, d1, 10) {
        let y = scales.duration.project(tick);
        painter.line_segment([at(MARGIN - TICK_LEN, y), at(MARGIN, y)], stroke);
        painter.text(
            at(MARGIN - TICK_LEN - TICK_PADDING, y),
            Align2::RIGHT_CENTER,
            format_duration_tick(tick),
            font.clone(),
            AXIS_COLOR,
        );
    }

    // Rotated caption alongside the duration axis.
    let galley = painter.layout_no_wrap(
        "Duration first time (Seconds)".to_string(),
        font,
        CAPTION_COLOR,
    );
    let mut caption = egui::epaint::TextShape::new(
        at(20.0, CHART_HEIGHT / 2.0 + 100.0),
        galley,
        CAPTION_COLOR,
    );
    caption.angle = -std::f32::consts::FRAC_PI_2;
    painter.add(caption);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ticks_cover_domain_without_exceeding_target() {
        let ticks = linear_ticks(5.0, 100.0, 10);
        assert!(ticks.len() <= 11);
        assert!(ticks.first().unwrap() >= &5.0);
        assert!(ticks.last().unwrap() <= &100.0);
    }

    #[test]
    fn linear_ticks_collapsed_domain() {
        assert_eq!(linear_ticks(42.0, 42.0, 10), vec![42.0]);
    }

    #[test]
    fn year_ticks_single_year_span() {
        let a = year_start_ts(1999);
        assert_eq!(year_ticks(a, a, 10), vec![1999]);
    }

    #[test]
    fn year_ticks_decade_span_stays_within_target() {
        let ticks = year_ticks(year_start_ts(2004), year_start_ts(2015), 10);
        assert!(ticks.len() <= 12);
        assert_eq!(*ticks.first().unwrap(), 2004);
        assert_eq!(*ticks.last().unwrap(), 2014);
    }
}
