pub mod braden;
pub mod morse;

use crate::error::ScaleError;
use crate::scoring::{ItemOption, ScaleItem, ScoreEntry, ValidationError};

fn item(id: &str, name: &str, options: &[(u32, &str)]) -> ScaleItem {
    ScaleItem {
        id: id.to_string(),
        name: name.to_string(),
        options: options
            .iter()
            .map(|(points, label)| ItemOption {
                points: *points,
                label: label.to_string(),
            })
            .collect(),
        description: None,
    }
}

/// Narrow an entry value to the storage width of a sub-score.
fn entry_points(entry: &ScoreEntry) -> Result<u8, ScaleError> {
    u8::try_from(entry.value).map_err(|_| {
        ScaleError::Validation(ValidationError {
            item_id: entry.item_id.clone(),
            value: entry.value,
            allowed: Vec::new(),
            message: format!("{} score {} is out of range", entry.item_id, entry.value),
        })
    })
}
