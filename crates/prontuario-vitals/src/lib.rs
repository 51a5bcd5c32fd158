//! prontuario-vitals
//!
//! Vital-sign classification. Each sign has an ordered rule table; the
//! first rule whose predicate holds decides the status and message.
//! Critical rules precede warning rules in every table.

pub mod rules;
pub mod summary;

pub use rules::classify;
pub use summary::{summarize, Finding, VitalsSummary};
