//! prontuario-scales
//!
//! Standardized nursing risk scales. Pure data and arithmetic: each scale
//! defines its items and their discrete options, sums the selected
//! points, and maps the total to a named risk tier.

pub mod error;
pub mod scales;
pub mod scoring;

use error::ScaleError;
use scoring::{ScaleItem, ScaleResult, ScoreEntry, ValidationError};

/// Trait implemented by each risk scale.
pub trait RiskScale: Send + Sync {
    /// Unique identifier (e.g., "braden", "morse").
    fn id(&self) -> &str;

    /// Human-readable name shown on the chart.
    fn name(&self) -> &str;

    /// The items this scale scores, in form order.
    fn items(&self) -> &[ScaleItem];

    /// Total and tier for a set of entries. Unknown item ids are an error;
    /// values are summed as given, see [`RiskScale::validate_entries`].
    fn assess(&self, entries: &[ScoreEntry]) -> Result<ScaleResult, ScaleError>;

    fn item(&self, item_id: &str) -> Option<&ScaleItem> {
        self.items().iter().find(|i| i.id == item_id)
    }

    /// Check every entry against its item's options.
    fn validate_entries(&self, entries: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in entries {
            if let Some(item) = self.item(&entry.item_id)
                && !item.allows(entry.value)
            {
                tracing::debug!(
                    scale = self.id(),
                    item = %entry.item_id,
                    value = entry.value,
                    "score entry rejected"
                );
                errors.push(ValidationError {
                    item_id: entry.item_id.clone(),
                    value: entry.value,
                    allowed: item.allowed_points(),
                    message: format!(
                        "{}: {} score {} is not one of {:?}",
                        self.name(),
                        item.name,
                        entry.value,
                        item.allowed_points(),
                    ),
                });
            }
        }
        errors
    }

    /// Format entries as structured text for a text-generation prompt.
    fn to_structured_input(&self, entries: &[ScoreEntry]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for item in self.items() {
            if let Some(entry) = entries.iter().find(|e| e.item_id == item.id) {
                match item.option_label(entry.value) {
                    Some(label) => output.push_str(&format!(
                        "- {}: {} ({})\n",
                        item.name, entry.value, label
                    )),
                    None => output.push_str(&format!("- {}: {}\n", item.name, entry.value)),
                }
            }
        }
        if let Ok(result) = self.assess(entries) {
            output.push_str(&format!("\nTotal: {} - {}\n", result.total, result.tier));
        }
        output
    }
}

/// Return all registered scales.
pub fn all_scales() -> Vec<Box<dyn RiskScale>> {
    vec![Box::new(scales::braden::Braden), Box::new(scales::morse::Morse)]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Result<Box<dyn RiskScale>, ScaleError> {
    all_scales()
        .into_iter()
        .find(|s| s.id() == id)
        .ok_or_else(|| ScaleError::UnknownScale(id.to_string()))
}
