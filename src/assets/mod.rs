//! Figure loading for information pages
//!
//! On native platforms, figures are PNG files loaded from the asset directory.
//! Each figure is read once per session and kept as a texture. On WASM there
//! is no filesystem and every figure is reported missing; pages then show the
//! caption alone.

#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::*;

use std::collections::HashMap;

/// Decoded RGBA figure
#[derive(Debug, Clone)]
pub struct FigureAsset {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FigureAsset {
    /// Decode PNG bytes into RGBA
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self {
            width: img.width(),
            height: img.height(),
            data: img.into_raw(),
        })
    }

    fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.data,
        )
    }
}

/// Resolves logical figure names to textures, caching hits and misses
pub struct FigureStore {
    source: Option<Assets>,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl FigureStore {
    pub fn new(source: Option<Assets>) -> Self {
        Self {
            source,
            textures: HashMap::new(),
        }
    }

    /// Store that never resolves anything
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Texture for `name`, uploading it on first use
    pub fn texture(&mut self, ctx: &egui::Context, name: &str) -> Option<&egui::TextureHandle> {
        if !self.textures.contains_key(name) {
            let texture = self.load(ctx, name);
            self.textures.insert(name.to_string(), texture);
        }
        self.textures.get(name).and_then(|t| t.as_ref())
    }

    fn load(&self, ctx: &egui::Context, name: &str) -> Option<egui::TextureHandle> {
        let Some(source) = &self.source else {
            log::warn!("No asset source, figure {} not shown", name);
            return None;
        };

        match source.load_figure(name) {
            Ok(figure) => {
                log::debug!("Loaded figure {} ({}x{})", name, figure.width, figure.height);
                Some(ctx.load_texture(
                    name,
                    figure.to_color_image(),
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                log::warn!("Figure {} not shown: {:#}", name, e);
                None
            }
        }
    }
}

impl Default for FigureStore {
    fn default() -> Self {
        Self::empty()
    }
}
