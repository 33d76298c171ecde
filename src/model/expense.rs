//! The expense record as exchanged with the expenses API.

use crate::model::Amount;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single dated monetary transaction record.
///
/// The storage layer enforces no uniqueness over `(date, description, amount, category)`;
/// duplicate detection is an advisory, client-side check only.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque identifier assigned by the store. Absent until the record has been created.
    #[serde(default, deserialize_with = "opaque_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Calendar date as an ISO-8601 `YYYY-MM-DD` string.
    #[serde(default)]
    pub date: String,

    /// Free-text label. Compared case-insensitively by duplicate detection; an absent
    /// description deserializes to the empty string.
    #[serde(default)]
    pub description: String,

    /// The monetary value; may be non-numeric text, in which case the record is excluded from
    /// aggregates but still rendered.
    #[serde(default)]
    pub amount: Amount,

    /// Open-ended category label, e.g. Food, Transport, Utilities, Entertainment.
    #[serde(default)]
    pub category: String,
}

impl Expense {
    /// Creates a not-yet-stored expense from form input. The id is assigned by the store.
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            date: date.into(),
            description: description.into(),
            amount: Amount::new(amount),
            category: category.into(),
        }
    }
}

/// The id is opaque to us but not every server sends it as a string; accept numbers too.
fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "id": "17",
            "date": "2025-07-01",
            "description": "Weekly groceries",
            "amount": "82.45",
            "category": "Food"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_deref(), Some("17"));
        assert_eq!(expense.date, "2025-07-01");
        assert_eq!(expense.description, "Weekly groceries");
        assert_eq!(expense.amount, Amount::new("82.45"));
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let json = r#"{"id": 17, "date": "2025-07-01", "amount": "5", "category": "Food"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_deref(), Some("17"));
    }

    #[test]
    fn test_deserialize_missing_description_is_empty() {
        let json = r#"{"date": "2025-07-01", "amount": "5", "category": "Food"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.description, "");
    }

    #[test]
    fn test_serialize_omits_absent_id() {
        let expense = Expense::new("2025-07-01", "Lunch", "12.50", "Food");
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_serialize_round_trip() {
        let expense = Expense {
            id: Some("3".to_string()),
            ..Expense::new("2025-07-01", "Lunch", "12.50", "Food")
        };
        let json = serde_json::to_string(&expense).unwrap();
        let parsed: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, parsed);
    }
}
