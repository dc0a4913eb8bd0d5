//! Application services: the preview engine and the services wrapping storage.

pub mod error;
pub mod feedback;
pub mod portfolio;
pub mod render;
pub mod repos;
