// 🧾 Receipt Model - Submitted purchase records
// Raw shape of a receipt as it arrives over the wire (JSON)

use serde::{Deserialize, Serialize};

// ============================================================================
// ITEM
// ============================================================================

/// One line entry on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Item {
    /// Free-text description of the item
    #[serde(rename = "shortDescription", alias = "description", default)]
    pub description: String,

    /// Price as a decimal string, e.g. "6.49"
    #[serde(default)]
    pub price: String,
}

impl Item {
    pub fn new(description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            description: description.into(),
            price: price.into(),
        }
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

/// A purchase receipt as submitted for scoring.
///
/// Every field defaults to empty when absent from the payload, so a missing
/// field is reported by the validator rather than by the JSON decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: String,

    /// Calendar date, "YYYY-MM-DD"
    #[serde(default)]
    pub purchase_date: String,

    /// Time of day, "HH:MM" (24h, no timezone)
    #[serde(default)]
    pub purchase_time: String,

    #[serde(default)]
    pub items: Vec<Item>,

    /// Total as a decimal string, e.g. "35.35"
    #[serde(default)]
    pub total: String,
}

impl Receipt {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
