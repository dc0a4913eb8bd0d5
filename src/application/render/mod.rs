//! The preview engine.
//!
//! Everything here is pure: a [`PortfolioConfig`](crate::domain::portfolio::PortfolioConfig)
//! goes in, a [`RenderedDocument`] comes out, and the same input always yields
//! byte-identical output. Persistence and transport live with the caller.

mod animation;
mod assembler;
mod binding;
mod ordering;
mod templates;
mod types;

pub use animation::{
    EntranceAnimation, STAGGER_CAP_MS, STAGGER_STEP_MS, resolve_entrance_animation,
};
pub use assembler::{assemble, escape_markup, source_view_page};
pub use binding::{SectionData, bind_content};
pub use ordering::order_sections;
pub use templates::render_section;
pub use types::{RenderError, RenderedDocument, SectionFrame};
