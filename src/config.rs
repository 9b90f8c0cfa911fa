//! Portal configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `portal.ron` file (if exists), or the file given with `--config`
//! 3. Environment variables prefixed with `PORTAL_`
//!
//! Example environment variable: `PORTAL_UI__WINDOW_WIDTH=1024`

use crate::catalog::{builtin_targets, Target, TargetCatalog, TargetId};
use crate::content::ContentRegistry;
use crate::ui::ThemeVariant;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main portal configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Window and appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial window width
    pub window_width: u32,
    /// Initial window height
    pub window_height: u32,
    #[serde(default)]
    pub theme: ThemeVariant,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            theme: ThemeVariant::default(),
        }
    }
}

/// Species list settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Initially selected species; must be selectable
    #[serde(default)]
    pub default_target: Option<String>,
    /// Replaces the builtin species list when set
    #[serde(default)]
    pub targets: Option<Vec<Target>>,
}

/// Descriptive content settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    /// RON file merged over the builtin content
    #[serde(default)]
    pub extra_content: Option<PathBuf>,
}

/// Asset lookup settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetsConfig {
    /// Directory holding `figures/*.png`
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DebugConfig {
    /// Show a checkbox simulating a running profiling job
    #[serde(default)]
    pub show_host_controls: bool,
}

impl PortalConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `portal.ron` (or `path`, which must then exist)
    /// 3. Environment variables prefixed with `PORTAL_` (highest priority)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Result<Self> {
        use config::{Config, Environment, File, FileFormat};

        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("portal")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("ui.window_width", 1024_i64)?
            .set_default("ui.window_height", 768_i64)?
            .set_default("ui.theme", ThemeVariant::default().as_str())?
            .set_default("debug.show_host_controls", false)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (PORTAL_UI__THEME, etc.)
            .add_source(
                Environment::with_prefix("PORTAL")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Species catalog from the configured list, or the builtin one
    pub fn build_catalog(&self) -> Result<TargetCatalog> {
        let targets = self
            .catalog
            .targets
            .clone()
            .unwrap_or_else(builtin_targets);
        let default = self.catalog.default_target.clone().map(TargetId::from);

        TargetCatalog::new(targets, default).context("Invalid species catalog")
    }

    /// Builtin content merged with the optional extra content file
    pub fn build_registry(&self) -> Result<ContentRegistry> {
        let mut registry = ContentRegistry::builtin();

        if let Some(path) = &self.content.extra_content {
            let extra = ContentRegistry::from_ron_file(path)
                .with_context(|| format!("Failed to load content from {}", path.display()))?;
            log::info!(
                "Loaded {} content entries from {}",
                extra.len(),
                path.display()
            );
            registry.merge(extra);
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.ui.window_width, 1024);
        assert_eq!(config.ui.theme, ThemeVariant::Latte);
        assert!(config.catalog.targets.is_none());
        assert!(!config.debug.show_host_controls);

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.default_target(), "Vibrio_cholerae");
        assert_eq!(config.build_registry().unwrap().len(), 1);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = PortalConfig::load(None).expect("Failed to load config");
        assert_eq!(config.ui.window_height, 768);
        assert_eq!(config.ui.theme, ThemeVariant::Latte);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.ron");
        std::fs::write(
            &path,
            r#"{
                "ui": { "window_width": 800, "theme": "mocha" },
                "catalog": {
                    "default_target": "Salmonella_enterica",
                    "targets": [
                        { "id": "Vibrio_cholerae", "display_name": "Vibrio cholerae" },
                        { "id": "Salmonella_enterica", "display_name": "Salmonella enterica", "availability": "Selectable" },
                        { "id": "Listeria_monocytogenes", "display_name": "Listeria monocytogenes", "availability": "Disabled" },
                    ],
                },
                "debug": { "show_host_controls": true },
            }"#,
        )
        .unwrap();

        let config = PortalConfig::load(Some(&path)).unwrap();
        assert_eq!(config.ui.window_width, 800);
        assert_eq!(config.ui.window_height, 768);
        assert_eq!(config.ui.theme, ThemeVariant::Mocha);
        assert!(config.debug.show_host_controls);

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.default_target(), "Salmonella_enterica");
        assert!(!catalog.get("Listeria_monocytogenes").unwrap().is_selectable());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PortalConfig::load(Some(&dir.path().join("nope.ron"))).is_err());
    }

    #[test]
    fn test_missing_extra_content_is_error() {
        let mut config = PortalConfig::default();
        config.content.extra_content = Some(PathBuf::from("/nonexistent/content.ron"));
        assert!(config.build_registry().is_err());
    }
}
