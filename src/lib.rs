//! Vitrine: a configuration-driven portfolio preview engine.
//!
//! A [`PortfolioConfig`](domain::portfolio::PortfolioConfig) names a theme,
//! an unordered set of sections, animation ids and optional content. The
//! [`assemble`](application::render::assemble) function turns it into a
//! self-contained HTML document plus an escaped source listing.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
