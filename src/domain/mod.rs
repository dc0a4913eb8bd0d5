//! Domain layer types and invariants.

pub mod animations;
pub mod catalog;
pub mod content;
pub mod error;
pub mod feedback;
pub mod portfolio;
pub mod sections;
pub mod theme;
pub mod typography;
