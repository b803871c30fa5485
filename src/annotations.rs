//! Selection annotations: guideline crosshairs and the tooltip panel content.
//!
//! Both responsibilities are idempotent. Guidelines are fully cleared before
//! a new pair is drawn, so the layer holds exactly zero (no selection) or two
//! (selection) lines and stale lines never accumulate. The tooltip text is
//! rebuilt from scratch on every selection change.

use eframe::egui::{Pos2, Rect, pos2, vec2};

use crate::chart::{CHART_HEIGHT, MARGIN};
use crate::dataset::Sighting;

/// Logical width of the tooltip body block.
pub const TOOLTIP_WIDTH: f32 = 400.0;
/// Logical height of the tooltip body block.
pub const TOOLTIP_HEIGHT: f32 = 150.0;

/// Placeholder instruction shown before the first selection.
pub const TOOLTIP_PLACEHOLDER: &str = "Click on each point for more info";

/// The screen region occupied by the tooltip panel.
///
/// Clicks inside this rect are intercepted before the chart-level click
/// handler runs, so interacting with the info panel never reselects a point.
pub fn tooltip_rect() -> Rect {
    Rect::from_min_size(
        pos2(MARGIN + 15.0, 15.0),
        vec2(TOOLTIP_WIDTH, TOOLTIP_HEIGHT + 50.0),
    )
}

/// One dashed reference line from an axis to the selected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guideline {
    pub from: Pos2,
    pub to: Pos2,
}

/// The guideline pair for a selected point at `projected`: one horizontal
/// line from the left margin, one vertical line up from the bottom margin,
/// both terminating exactly at the point.
pub fn guidelines_for(projected: Pos2) -> [Guideline; 2] {
    [
        Guideline {
            from: pos2(MARGIN, projected.y),
            to: projected,
        },
        Guideline {
            from: pos2(projected.x, CHART_HEIGHT - MARGIN),
            to: projected,
        },
    ]
}

/// Tooltip body text for a record.
///
/// Counts the record's date entries: one entry renders `Visible: 1 time.` and
/// `Year: Y.`, several render `Visible: N times.` and `Years: Y1, Y2, ….`.
/// The free-text description follows verbatim unless a length cap is given.
pub fn description_text(record: &Sighting, limit: Option<usize>) -> String {
    use chrono::Datelike;

    let years: Vec<String> = record.dates.iter().map(|d| d.year().to_string()).collect();
    let mut desc = String::new();
    if years.len() > 1 {
        desc.push_str(&format!("Visible: {} times.\n", years.len()));
        desc.push_str(&format!("Years: {}.\n\n", years.join(", ")));
    } else {
        desc.push_str("Visible: 1 time.\n");
        desc.push_str(&format!("Year: {}.\n\n", years[0]));
    }

    match limit {
        Some(cap) if record.text.chars().count() > cap => {
            let truncated: String = record.text.chars().take(cap).collect();
            desc.push_str(&truncated);
            desc.push_str(" ...");
        }
        _ => desc.push_str(&record.text),
    }
    desc
}

/// Owns everything drawn on top of the point layer for the current selection.
#[derive(Debug, Clone)]
pub struct AnnotationLayer {
    guidelines: Vec<Guideline>,
    header: String,
    body: String,
}

impl AnnotationLayer {
    /// Initial state: no guidelines, placeholder instruction in the header.
    pub fn placeholder() -> Self {
        Self {
            guidelines: Vec::new(),
            header: TOOLTIP_PLACEHOLDER.to_string(),
            body: String::new(),
        }
    }

    pub fn guidelines(&self) -> &[Guideline] {
        &self.guidelines
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Remove every previously drawn guideline.
    pub fn clear_guidelines(&mut self) {
        self.guidelines.clear();
    }

    /// Point the annotations at a newly selected record.
    ///
    /// Clears stale guidelines before drawing the new pair and rebuilds the
    /// tooltip content from the record.
    pub fn select(&mut self, record: &Sighting, projected: Pos2, limit: Option<usize>) {
        self.clear_guidelines();
        self.guidelines.extend(guidelines_for(projected));
        self.header = format!("{} - {}", record.state, record.country);
        self.body = description_text(record, limit);
    }
}
