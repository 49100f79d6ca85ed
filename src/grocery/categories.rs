use std::collections::HashMap;
use std::sync::LazyLock;

/// Store aisle order for grocery list output.
pub const CATEGORY_ORDER: [&str; 9] = [
    "Produce",
    "Meat & Seafood",
    "Dairy & Eggs",
    "Bakery",
    "Pantry",
    "Canned Goods",
    "Condiments",
    "Frozen",
    "Other",
];

/// Known ingredients mapped to their store category.
static INGREDIENT_CATEGORIES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        for name in [
            "onion",
            "onions",
            "yellow onion",
            "red onion",
            "garlic",
            "tomato",
            "tomatoes",
            "cherry tomatoes",
            "bell pepper",
            "red bell pepper",
            "broccoli",
            "cucumber",
            "lettuce",
            "romaine lettuce",
            "spinach",
            "carrot",
            "carrots",
            "celery",
            "zucchini",
            "potato",
            "potatoes",
            "lemon",
            "lemons",
            "lime",
            "banana",
            "bananas",
            "apple",
            "basil",
            "cilantro",
            "parsley",
        ] {
            m.insert(name, "Produce");
        }

        for name in [
            "chicken",
            "chicken breast",
            "chicken thighs",
            "beef",
            "ground beef",
            "pork",
            "salmon",
            "shrimp",
            "fish",
        ] {
            m.insert(name, "Meat & Seafood");
        }

        for name in [
            "milk",
            "eggs",
            "egg",
            "cheese",
            "cheddar cheese",
            "mozzarella",
            "parmesan cheese",
            "feta cheese",
            "greek yogurt",
            "yogurt",
            "butter",
            "cream",
            "sour cream",
        ] {
            m.insert(name, "Dairy & Eggs");
        }

        for name in ["bread", "tortillas", "buns"] {
            m.insert(name, "Bakery");
        }

        for name in [
            "rice",
            "pasta",
            "penne pasta",
            "spaghetti",
            "flour",
            "sugar",
            "salt",
            "black pepper",
            "pepper",
            "olive oil",
            "vegetable oil",
            "cooking oil",
            "honey",
            "oats",
            "rolled oats",
            "chia seeds",
        ] {
            m.insert(name, "Pantry");
        }

        for name in ["soy sauce", "ketchup", "mustard", "mayonnaise", "hot sauce"] {
            m.insert(name, "Condiments");
        }

        for name in ["kalamata olives", "olives"] {
            m.insert(name, "Canned Goods");
        }

        m
    });

/// Store category for a normalized ingredient name.
pub fn category_for(ingredient: &str) -> &'static str {
    INGREDIENT_CATEGORIES
        .get(ingredient.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or("Other")
}

/// Position of a category in the aisle order. Unknown categories sort last.
pub fn category_rank(category: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_ORDER.len())
}
