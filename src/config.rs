//! Top-level configuration for the sighting chart.

use crate::assets::AssetPaths;

/// Configuration passed to [`run_ufoplot`](crate::run_ufoplot).
///
/// | Field               | Purpose |
/// |---------------------|---------|
/// | `title`             | Native window title |
/// | `description_limit` | Optional character cap on tooltip descriptions |
/// | `assets`            | Background / symbol image locations |
/// | `native_options`    | Optional eframe window options |
pub struct UfoPlotConfig {
    /// Native window title.
    pub title: String,
    /// Cap on the tooltip description length. `None` (the default) renders
    /// the full free-text description verbatim.
    pub description_limit: Option<usize>,
    /// Image asset locations.
    pub assets: AssetPaths,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for UfoPlotConfig {
    fn default() -> Self {
        Self {
            title: "UFO Sightings".to_string(),
            description_limit: None,
            assets: AssetPaths::default(),
            native_options: None,
        }
    }
}
