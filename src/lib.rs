//! ufoplot crate root: re-exports and module wiring.
//!
//! An interactive scatter chart of UFO sighting reports built on egui/eframe:
//! each report is plotted by first-sighting year against its duration,
//! colored by reporting region, with click-to-inspect tooltips and dashed
//! guideline crosshairs.
//!
//! The crate is organised into cohesive modules:
//! - `dataset`: raw record deserialization and normalization
//! - `scale`: domain → pixel axis scales
//! - `color_scheme`: region-code color resolution
//! - `spatial`: k-d tree nearest-point index
//! - `point_selection`: the click-to-select state machine
//! - `annotations`: guideline crosshairs and tooltip content
//! - `chart`: composition of all layers plus click wiring
//! - `app`: eframe wrapper and run helper

pub mod annotations;
pub mod app;
pub mod assets;
pub mod chart;
pub mod color_scheme;
pub mod config;
pub mod dataset;
pub mod point_selection;
pub mod scale;
pub mod spatial;

// Public re-exports for a compact external API
pub use app::{UfoPlotApp, run_ufoplot};
pub use chart::ChartView;
pub use config::UfoPlotConfig;
pub use dataset::{DataError, Sighting, load_from_path, load_from_str, region_counts};
