use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Which meal slot a recipe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All meal types in display order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(PlannerError::InvalidInput(format!(
                "Invalid meal type: {}",
                other
            ))),
        }
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(rename = "item")]
    pub name: String,

    pub quantity: f64,

    pub unit: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub preparation: String,
}

/// A recipe with its full ingredient list.
///
/// Names are unique case-insensitively; `key()` is the canonical lookup form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(skip)]
    pub id: Option<i64>,

    pub name: String,

    pub meal_type: MealType,

    #[serde(default)]
    pub prep_time: u32,

    #[serde(default)]
    pub cook_time: u32,

    #[serde(default = "default_servings")]
    pub servings: u32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cuisine: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_tags: Vec<String>,

    pub ingredients: Vec<RecipeIngredient>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instructions: String,
}

fn default_servings() -> u32 {
    4
}

impl Recipe {
    /// Prep plus cook time in minutes.
    #[inline]
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: non-empty name, at least one ingredient, positive servings.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.ingredients.is_empty() && self.servings > 0
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Recipe {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: None,
            name: "Pancakes".to_string(),
            meal_type: MealType::Breakfast,
            prep_time: 10,
            cook_time: 15,
            servings: 4,
            cuisine: "American".to_string(),
            dietary_tags: vec!["vegetarian".to_string()],
            ingredients: vec![RecipeIngredient {
                name: "flour".to_string(),
                quantity: 2.0,
                unit: "cups".to_string(),
                preparation: String::new(),
            }],
            instructions: "Mix and fry.".to_string(),
        }
    }

    #[test]
    fn test_total_time() {
        assert_eq!(sample_recipe().total_time(), 25);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_recipe().is_valid());

        let mut no_ingredients = sample_recipe();
        no_ingredients.ingredients.clear();
        assert!(!no_ingredients.is_valid());

        let mut blank_name = sample_recipe();
        blank_name.name = "  ".to_string();
        assert!(!blank_name.is_valid());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let a = sample_recipe();
        let mut b = sample_recipe();
        b.name = "PANCAKES".to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_meal_type_roundtrip() {
        for mt in MealType::ALL {
            assert_eq!(mt.as_str().parse::<MealType>().unwrap(), mt);
        }
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(sample_recipe()).unwrap();
        assert_eq!(json["meal_type"], "breakfast");
        assert_eq!(json["ingredients"][0]["item"], "flour");
        // Skipped fields never appear in exports
        assert!(json.get("id").is_none());
    }
}
