use serde::Serialize;
use thiserror::Error;

use crate::domain::theme::Palette;

use super::animation::EntranceAnimation;

/// Template failures. Configuration values never produce one.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render `{section}` section")]
    Section {
        section: String,
        #[source]
        source: askama::Error,
    },
    #[error("failed to render document shell")]
    Document(#[source] askama::Error),
    #[error("failed to render source view")]
    SourceView(#[source] askama::Error),
}

/// Both output modes of one render.
///
/// `source` is `visual` with angle brackets escaped and nothing else changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub visual: String,
    pub source: String,
}

/// Per-occurrence inputs shared by every section template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFrame {
    pub palette: &'static Palette,
    pub surface: &'static str,
    pub footer_surface: &'static str,
    pub animation_class: &'static str,
    pub animation_delay: String,
    pub index: usize,
}

impl SectionFrame {
    pub fn new(palette: &'static Palette, entrance: &EntranceAnimation, index: usize) -> Self {
        Self {
            palette,
            surface: palette.surface(),
            footer_surface: palette.footer_surface(),
            animation_class: entrance.class_name(),
            animation_delay: entrance.delay_rule(index),
            index,
        }
    }
}
