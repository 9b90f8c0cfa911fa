//! Catppuccin base theme selection

use egui::Context;
use serde::{Deserialize, Serialize};

/// Theme variant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Light theme, closest to the original white page
    #[default]
    Latte,
    Mocha,
}

impl ThemeVariant {
    /// Get the variant name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latte => "latte",
            Self::Mocha => "mocha",
        }
    }

    fn base(&self) -> catppuccin_egui::Theme {
        match self {
            Self::Latte => catppuccin_egui::LATTE,
            Self::Mocha => catppuccin_egui::MOCHA,
        }
    }

    /// Apply the variant to the egui context
    pub fn apply_to_ctx(&self, ctx: &Context) {
        catppuccin_egui::set_theme(ctx, self.base());
        log::debug!("Applied {} theme", self.as_str());
    }
}
