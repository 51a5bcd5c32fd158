//! prontuario-core
//!
//! Pure domain types for nursing documentation: vital-sign readings and
//! their analysis, fluid balance, Braden and Morse assessment records,
//! and the shift chart that groups them. No rule tables live here; the
//! classifier and the scale scorers are in their own crates.

pub mod error;
pub mod models;
pub mod parse;
