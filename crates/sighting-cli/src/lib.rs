//! CLI library components for the sighting pipeline.

pub mod config;
pub mod logging;
pub mod render;
