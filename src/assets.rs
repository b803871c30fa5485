//! Static image assets: the star-field background and the marker symbol.
//!
//! Both are decoded with the `image` crate and uploaded as egui textures at
//! startup. Assets are cosmetic; a missing or undecodable file degrades to a
//! flat night-sky fill (background) or no icon (symbol) with a warning.

use std::path::{Path, PathBuf};

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};

/// Where the two chart images are looked up on disk.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub background: PathBuf,
    pub symbol: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("assets/background.jpeg"),
            symbol: PathBuf::from("assets/symbol.png"),
        }
    }
}

/// Uploaded chart textures; each is `None` when its asset failed to load.
#[derive(Default)]
pub struct ChartTextures {
    pub background: Option<TextureHandle>,
    pub symbol: Option<TextureHandle>,
}

impl ChartTextures {
    /// Decode and upload both assets, degrading gracefully per image.
    pub fn load(ctx: &Context, paths: &AssetPaths) -> Self {
        Self {
            background: upload(ctx, "chart-background", &paths.background),
            symbol: upload(ctx, "chart-symbol", &paths.symbol),
        }
    }
}

fn upload(ctx: &Context, name: &str, path: &Path) -> Option<TextureHandle> {
    match decode(path) {
        Ok(image) => Some(ctx.load_texture(name, image, TextureOptions::LINEAR)),
        Err(err) => {
            log::warn!("asset {} unavailable ({err}), using fallback", path.display());
            None
        }
    }
}

fn decode(path: &Path) -> Result<ColorImage, image::ImageError> {
    let image = image::open(path)?.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}
