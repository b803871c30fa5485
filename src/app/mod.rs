//! eframe application wrapper around [`ChartView`].
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`run`]    | Top-level [`run_ufoplot()`] entry point and icon loading |

mod run;

pub use run::run_ufoplot;

use eframe::egui;

use crate::assets::{AssetPaths, ChartTextures};
use crate::chart::ChartView;

/// Standalone application: one chart filling the window.
pub struct UfoPlotApp {
    chart: ChartView,
    asset_paths: AssetPaths,
    /// Uploaded on the first frame; texture upload needs a live egui context.
    textures: Option<ChartTextures>,
}

impl UfoPlotApp {
    pub fn new(chart: ChartView, asset_paths: AssetPaths) -> Self {
        Self {
            chart,
            asset_paths,
            textures: None,
        }
    }
}

impl eframe::App for UfoPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.textures.is_none() {
            self.textures = Some(ChartTextures::load(ctx, &self.asset_paths));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(textures) = &self.textures {
                        self.chart.ui(ui, textures);
                    }
                });
            });
    }
}
