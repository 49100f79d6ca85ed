use serde::Serialize;

/// One consolidated line of a shopping list.
///
/// Derived from the current plan and pantry, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GroceryItem {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
}
