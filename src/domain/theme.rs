//! Themes and their colour palettes.

use super::catalog::{Catalog, CatalogId};

pub type ThemeId = CatalogId<Theme>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Minimal,
    Dark,
    Professional,
    Creative,
    ModernGradient,
    Retro,
    Playful,
}

impl Theme {
    pub const DEFAULT: Theme = Theme::Minimal;

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Minimal => &MINIMAL,
            Theme::Dark => &DARK,
            Theme::Professional => &PROFESSIONAL,
            Theme::Creative | Theme::ModernGradient => &GRADIENT,
            Theme::Retro => &RETRO,
            Theme::Playful => &PLAYFUL,
        }
    }
}

impl Catalog for Theme {
    const ALL: &'static [Self] = &[
        Theme::Minimal,
        Theme::Dark,
        Theme::Professional,
        Theme::Creative,
        Theme::ModernGradient,
        Theme::Retro,
        Theme::Playful,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Theme::Minimal => "minimal",
            Theme::Dark => "dark",
            Theme::Professional => "professional",
            Theme::Creative => "creative",
            Theme::ModernGradient => "modern-gradient",
            Theme::Retro => "retro",
            Theme::Playful => "playful",
        }
    }
}

/// The four colour roles every section template draws from.
///
/// `background` may be any CSS background value, including gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub secondary: &'static str,
}

const WHITE: &str = "#ffffff";

impl Palette {
    /// Card and panel background derived from the page background.
    pub fn surface(&self) -> &'static str {
        if self.background == WHITE {
            "#f8f9fa"
        } else {
            "#2a2a2a"
        }
    }

    pub fn footer_surface(&self) -> &'static str {
        if self.background == WHITE {
            "#f8f9fa"
        } else {
            "#1a1a1a"
        }
    }
}

const MINIMAL: Palette = Palette {
    background: WHITE,
    text: "#333333",
    accent: "#007bff",
    secondary: "#6c757d",
};

const DARK: Palette = Palette {
    background: "#1a1a1a",
    text: "#ffffff",
    accent: "#ffd700",
    secondary: "#888888",
};

const PROFESSIONAL: Palette = Palette {
    background: "#f8f9fa",
    text: "#2c3e50",
    accent: "#3498db",
    secondary: "#7f8c8d",
};

const GRADIENT: Palette = Palette {
    background: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    text: WHITE,
    accent: WHITE,
    secondary: "#e0e0e0",
};

const RETRO: Palette = Palette {
    background: "#2c3e50",
    text: "#ecf0f1",
    accent: "#e74c3c",
    secondary: "#95a5a6",
};

const PLAYFUL: Palette = Palette {
    background: "#ff9ff3",
    text: "#2c3e50",
    accent: "#ff6b6b",
    secondary: "#4ecdc4",
};

/// Resolve any theme id to a palette; ids outside the catalog use the default theme.
pub fn resolve_theme(id: &ThemeId) -> &'static Palette {
    id.known().unwrap_or(Theme::DEFAULT).palette()
}
