use serde::{Deserialize, Serialize};

/// A single record served by the item endpoint.
///
/// Items are decoded verbatim from the response array and never mutated.
/// The `id` is used as the lookup key for detail navigation, but the endpoint
/// does not guarantee uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Linear scan for the first item with `id`.
///
/// Duplicate identifiers resolve to the earliest entry in the list.
pub fn find_item(items: &[Item], id: i64) -> Option<&Item> {
    items.iter().find(|item| item.id == id)
}
