use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// One selectable answer of a scale item and the points it contributes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemOption {
    pub points: u32,
    pub label: String,
}

/// An item of a risk scale with its fixed set of options.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScaleItem {
    pub id: String,
    pub name: String,
    pub options: Vec<ItemOption>,
    pub description: Option<String>,
}

impl ScaleItem {
    pub fn allows(&self, points: u32) -> bool {
        self.options.iter().any(|o| o.points == points)
    }

    pub fn option_label(&self, points: u32) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.points == points)
            .map(|o| o.label.as_str())
    }

    pub fn allowed_points(&self) -> Vec<u32> {
        self.options.iter().map(|o| o.points).collect()
    }
}

/// A selection made by the clinician for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreEntry {
    pub item_id: String,
    pub value: u32,
}

impl ScoreEntry {
    pub fn new(item_id: impl Into<String>, value: u32) -> Self {
        Self {
            item_id: item_id.into(),
            value,
        }
    }
}

/// Total and tier of a scale, independent of which scale produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScaleResult {
    pub scale_id: String,
    pub total: u32,
    pub tier: String,
    /// False when nothing was entered and the tier reflects that.
    pub filled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub value: u32,
    pub allowed: Vec<u32>,
    pub message: String,
}
