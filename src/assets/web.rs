//! WASM figure source
//!
//! The browser build has no asset directory; every lookup misses.

use super::FigureAsset;
use anyhow::Result;

/// Asset source placeholder for WASM
pub struct Assets;

impl Assets {
    pub fn new(_preferred: Option<&std::path::Path>) -> Result<Self> {
        Ok(Self)
    }

    pub fn load_figure(&self, name: &str) -> Result<FigureAsset> {
        anyhow::bail!("Figure {name} is not available in the browser build")
    }
}
