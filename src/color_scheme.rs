//! Region color scheme.
//!
//! Points are color-coded by the reporting region's short code. The table
//! covers the regions present in the shipped dataset; any other code resolves
//! to the `Other` fallback so an unrecognized region is never an error.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

/// Fallback key for region codes absent from the table.
pub const OTHER_REGION: &str = "Other";

static REGION_PALETTE: Lazy<Vec<(&'static str, Color32)>> = Lazy::new(|| {
    vec![
        ("NY", Color32::from_rgba_unmultiplied(61, 190, 255, 255)),
        ("TX", Color32::from_rgba_unmultiplied(255, 156, 181, 255)),
        ("WX", Color32::from_rgba_unmultiplied(255, 156, 181, 255)),
        ("FL", Color32::from_rgba_unmultiplied(130, 240, 46, 255)),
        ("CA", Color32::from_rgba_unmultiplied(255, 118, 77, 255)),
        ("AZ", Color32::from_rgba_unmultiplied(240, 198, 46, 255)),
        ("MD", Color32::from_rgba_unmultiplied(46, 198, 240, 255)),
        (OTHER_REGION, Color32::from_rgba_unmultiplied(168, 168, 168, 255)),
    ]
});

/// Resolve a region code to its display color.
///
/// Pure lookup with the `Other` fallback for unknown codes.
pub fn region_color(region: &str) -> Color32 {
    let palette = &*REGION_PALETTE;
    palette
        .iter()
        .find(|(code, _)| *code == region)
        .or_else(|| palette.iter().find(|(code, _)| *code == OTHER_REGION))
        .map(|(_, color)| *color)
        .unwrap_or(Color32::GRAY)
}

/// All region codes with a dedicated color, in table order (fallback excluded).
pub fn known_regions() -> Vec<&'static str> {
    REGION_PALETTE
        .iter()
        .map(|(code, _)| *code)
        .filter(|code| *code != OTHER_REGION)
        .collect()
}
