//! prontuario-cli library root.
//!
//! Exposes config handling, chart evaluation and text rendering so that
//! integration tests can exercise them without going through argument
//! parsing.

pub mod config;
pub mod evaluate;
pub mod render;
