use serde::{Deserialize, Serialize};

/// On-hand stock of one ingredient in one unit.
///
/// The same ingredient may appear under several units when they are not
/// interconvertible (e.g. "2 cups flour" and "1 bag flour").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryItem {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
}

impl PantryItem {
    pub fn new(ingredient: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity,
            unit: unit.into(),
        }
    }
}
