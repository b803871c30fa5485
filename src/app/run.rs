//! Top-level entry point for running the sighting chart as a native window.
//!
//! [`run_ufoplot`] accepts the normalized record set and a configuration
//! object, builds the chart, and enters the eframe event loop. The call
//! blocks until the window is closed.

use eframe::egui;

use super::UfoPlotApp;
use crate::chart::{CHART_HEIGHT, ChartView};
use crate::config::UfoPlotConfig;
use crate::dataset::Sighting;

/// Width the chart lays out at before the host reports its real size.
const INITIAL_WIDTH: f32 = 1280.0;

/// Launch the chart application in a native window.
pub fn run_ufoplot(records: Vec<Sighting>, mut cfg: UfoPlotConfig) -> eframe::Result<()> {
    let chart = ChartView::new(records, INITIAL_WIDTH, cfg.description_limit);
    let app = UfoPlotApp::new(chart, cfg.assets.clone());

    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(INITIAL_WIDTH, CHART_HEIGHT + 40.0));
    }
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    eframe::run_native(&cfg.title, opts, Box::new(|_cc| Ok(Box::new(app))))
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
