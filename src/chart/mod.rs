//! Chart composition: assembles axes, the point layer, guidelines, and the
//! tooltip into one interactive surface, and owns the click handling that
//! drives selection.
//!
//! [`ChartView`] is the build pipeline of the whole crate run once at
//! startup: normalized records → scales → projected positions → spatial
//! index, with the selection machine and annotation layer layered on top.
//! Everything is recomputed when the host width changes; nothing else ever
//! invalidates it, since the dataset is static for the session.

pub mod axes;

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, pos2,
    vec2,
};

use crate::annotations::{self, AnnotationLayer};
use crate::assets::ChartTextures;
use crate::color_scheme::region_color;
use crate::dataset::Sighting;
use crate::point_selection::{ClickOutcome, PointSelection};
use crate::scale::ChartScales;
use crate::spatial::PointIndex;

/// Fixed logical chart height.
pub const CHART_HEIGHT: f32 = 800.0;
/// Margin on all four sides.
pub const MARGIN: f32 = 60.0;
/// Narrowest width the chart will lay itself out at.
pub const MIN_WIDTH: f32 = 2.0 * MARGIN + 80.0;

/// Base glyph radius for every record.
pub const BASE_RADIUS: f32 = 2.0;
/// Highlight radius of the selected record.
pub const SELECTED_RADIUS: f32 = 6.0;
/// Occurrence ring radius: `RING_BASE + RING_STEP * i` for the i-th date.
pub const RING_BASE: f32 = 4.0;
pub const RING_STEP: f32 = 4.0;

pub(crate) const AXIS_COLOR: Color32 = Color32::WHITE;
pub(crate) const CAPTION_COLOR: Color32 = Color32::from_rgba_premultiplied(204, 204, 204, 204);
const GUIDELINE_COLOR: Color32 = Color32::from_rgba_premultiplied(77, 77, 77, 77);
const NIGHT_SKY: Color32 = Color32::from_rgb(9, 12, 35);
const RING_STROKE_WIDTH: f32 = 0.5;

/// Project every record through freshly built scales and index the result.
fn layout(records: &[Sighting], width: f32) -> (ChartScales, Vec<Pos2>, PointIndex) {
    let scales = ChartScales::build(records, width);
    let positions: Vec<Pos2> = records
        .iter()
        .map(|r| {
            let (x, y) = scales.project(r);
            pos2(x, y)
        })
        .collect();
    let raw: Vec<(f32, f32)> = positions.iter().map(|p| (p.x, p.y)).collect();
    let index = PointIndex::build(&raw);
    (scales, positions, index)
}

/// The interactive sighting chart.
pub struct ChartView {
    records: Vec<Sighting>,
    width: f32,
    scales: ChartScales,
    positions: Vec<Pos2>,
    index: PointIndex,
    selection: PointSelection,
    annotations: AnnotationLayer,
    description_limit: Option<usize>,
}

impl ChartView {
    /// Build a chart over a non-empty record set at the given host width.
    ///
    /// The dataset normalizer rejects empty input before a chart can exist.
    pub fn new(records: Vec<Sighting>, width: f32, description_limit: Option<usize>) -> Self {
        debug_assert!(!records.is_empty(), "chart requires a non-empty dataset");
        let width = width.max(MIN_WIDTH);
        let (scales, positions, index) = layout(&records, width);
        Self {
            records,
            width,
            scales,
            positions,
            index,
            selection: PointSelection::default(),
            annotations: AnnotationLayer::placeholder(),
            description_limit,
        }
    }

    pub fn records(&self) -> &[Sighting] {
        &self.records
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn annotations(&self) -> &AnnotationLayer {
        &self.annotations
    }

    /// Relayout for a new host width. Scales, projected positions, and the
    /// spatial index are rebuilt together; a current selection keeps its
    /// record and has its guidelines re-projected through the new scales.
    pub fn resize(&mut self, width: f32) {
        self.width = width.max(MIN_WIDTH);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let (scales, positions, index) = layout(&self.records, self.width);
        self.scales = scales;
        self.positions = positions;
        self.index = index;

        if let Some(i) = self.selection.selected() {
            self.annotations
                .select(&self.records[i], self.positions[i], self.description_limit);
        }
    }

    /// Apply a click at chart-local coordinates.
    ///
    /// Clicks landing on the tooltip panel are swallowed here, before any
    /// nearest-point lookup, so interacting with the info panel never moves
    /// the selection. Returns whether anything visible changed.
    pub fn handle_click(&mut self, pos: Pos2) -> bool {
        if annotations::tooltip_rect().contains(pos) {
            return false;
        }
        let Some(nearest) = self.index.nearest(pos.x, pos.y) else {
            return false;
        };
        match self.selection.click(nearest) {
            ClickOutcome::Unchanged => false,
            ClickOutcome::Selected { previous, current } => {
                self.annotations.select(
                    &self.records[current],
                    self.positions[current],
                    self.description_limit,
                );
                log::debug!(
                    "selection {:?} -> {} ({} - {})",
                    previous,
                    current,
                    self.records[current].state,
                    self.records[current].country,
                );
                true
            }
        }
    }

    /// Render the chart into the current UI and process pointer input.
    pub fn ui(&mut self, ui: &mut Ui, textures: &ChartTextures) {
        let width = ui.available_width().max(MIN_WIDTH);
        if (width - self.width).abs() > 0.5 {
            self.resize(width);
        }

        let (rect, response) =
            ui.allocate_exact_size(vec2(self.width, CHART_HEIGHT), Sense::click());
        let response = response.on_hover_cursor(CursorIcon::Crosshair);
        let painter = ui.painter_at(rect);
        let origin = rect.min;

        // Background: star field when the asset decoded, flat night sky otherwise.
        if let Some(background) = &textures.background {
            painter.image(
                background.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        } else {
            painter.rect_filled(rect, CornerRadius::ZERO, NIGHT_SKY);
        }

        axes::draw(&painter, origin, self.width, &self.scales);

        // Point layer: one base glyph per record plus one ring per date entry.
        for (i, record) in self.records.iter().enumerate() {
            let center = origin + self.positions[i].to_vec2();
            let color = region_color(&record.region);
            let radius = if self.selection.selected() == Some(i) {
                SELECTED_RADIUS
            } else {
                BASE_RADIUS
            };
            painter.circle_filled(center, radius, color);
            for ring in 0..record.dates.len() {
                painter.circle_stroke(
                    center,
                    RING_BASE + RING_STEP * ring as f32,
                    Stroke::new(RING_STROKE_WIDTH, color),
                );
            }
        }

        // Guideline layer.
        for guideline in self.annotations.guidelines() {
            let segment = [
                origin + guideline.from.to_vec2(),
                origin + guideline.to.to_vec2(),
            ];
            painter.extend(Shape::dashed_line(
                &segment,
                Stroke::new(1.0, GUIDELINE_COLOR),
                2.0,
                2.0,
            ));
        }

        self.draw_tooltip(&painter, origin, textures);

        if response.clicked() {
            if let Some(screen_pos) = response.interact_pointer_pos() {
                let local = screen_pos - origin.to_vec2();
                self.handle_click(local);
            }
        }
    }

    fn draw_tooltip(&self, painter: &egui::Painter, origin: Pos2, textures: &ChartTextures) {
        let header_size = if self.selection.selected().is_some() {
            15.0
        } else {
            13.0
        };
        painter.text(
            origin + vec2(MARGIN + 15.0, 30.0),
            Align2::LEFT_BOTTOM,
            self.annotations.header(),
            FontId::proportional(header_size),
            Color32::WHITE,
        );

        let body = self.annotations.body();
        if !body.is_empty() {
            let galley = painter.layout(
                body.to_string(),
                FontId::proportional(12.0),
                Color32::WHITE,
                annotations::TOOLTIP_WIDTH - 10.0,
            );
            painter.galley(origin + vec2(MARGIN + 15.0, 50.0), galley, Color32::WHITE);
        }

        if let Some(symbol) = &textures.symbol {
            let size = 50.0;
            let min = origin + vec2(MARGIN + 15.0 + annotations::TOOLTIP_WIDTH - size, 15.0);
            painter.image(
                symbol.id(),
                Rect::from_min_size(min, vec2(size, size)),
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}
