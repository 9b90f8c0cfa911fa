//! Native figure loading from an asset directory using assets_manager

use super::FigureAsset;
use anyhow::Result;
use assets_manager::{AssetCache, BoxedError, asset::FileAsset};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

impl FileAsset for FigureAsset {
    const EXTENSION: &'static str = "png";

    fn from_bytes(bytes: Cow<'_, [u8]>) -> std::result::Result<Self, BoxedError> {
        FigureAsset::decode(&bytes).map_err(|e| format!("Failed to decode figure: {e}").into())
    }
}

/// Asset source backed by a directory on disk
pub struct Assets {
    cache: AssetCache,
}

impl Assets {
    /// Open the first existing directory among `preferred` and `assets`
    pub fn new(preferred: Option<&Path>) -> Result<Self> {
        let mut paths: Vec<PathBuf> = Vec::new();
        if let Some(dir) = preferred {
            paths.push(dir.to_path_buf());
        }
        paths.push(PathBuf::from("assets"));

        for path in &paths {
            if path.exists() {
                log::info!("Loading assets from: {}", path.display());
                return Ok(Self {
                    cache: AssetCache::new(path)
                        .map_err(|e| anyhow::anyhow!("Failed to create asset cache: {e}"))?,
                });
            }
        }

        anyhow::bail!("Could not find assets directory. Tried: {:?}", paths)
    }

    /// Load a figure by logical name, e.g. `figures.vc_loci_feq_distribution`
    pub fn load_figure(&self, name: &str) -> Result<FigureAsset> {
        let handle = self
            .cache
            .load::<FigureAsset>(name)
            .map_err(|e| anyhow::anyhow!("Failed to load figure {name}: {e}"))?;
        Ok(handle.read().clone())
    }
}
