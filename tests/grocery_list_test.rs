use assert_float_eq::assert_float_absolute_eq;

use meal_planner_rs::grocery::generate_grocery_list;
use meal_planner_rs::models::{MealPlan, MealType, PantryItem, PlannedMeal, Recipe, RecipeIngredient};
use meal_planner_rs::store::Database;

fn ingredient(name: &str, quantity: f64, unit: &str) -> RecipeIngredient {
    RecipeIngredient {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        preparation: String::new(),
    }
}

fn recipe(
    name: &str,
    meal_type: MealType,
    servings: u32,
    ingredients: Vec<RecipeIngredient>,
) -> Recipe {
    Recipe {
        id: None,
        name: name.to_string(),
        meal_type,
        prep_time: 0,
        cook_time: 30,
        servings,
        cuisine: String::new(),
        dietary_tags: Vec::new(),
        ingredients,
        instructions: String::new(),
    }
}

/// Build a database with the worked-example recipes planned at 2 servings:
/// Recipe A (2 cups flour, serves 2) and Recipe B (1 cup flour, serves 4).
fn worked_example_db() -> Database {
    let mut db = Database::open_in_memory().unwrap();
    db.add_recipe(&recipe(
        "Recipe A",
        MealType::Dinner,
        2,
        vec![ingredient("flour", 2.0, "cups")],
    ))
    .unwrap();
    db.add_recipe(&recipe(
        "Recipe B",
        MealType::Dinner,
        4,
        vec![ingredient("flour", 1.0, "cup")],
    ))
    .unwrap();

    let a = db.get_recipe("Recipe A").unwrap().unwrap();
    let b = db.get_recipe("Recipe B").unwrap().unwrap();
    db.save_plan(&MealPlan::new(vec![
        PlannedMeal {
            day: 1,
            meal_type: MealType::Dinner,
            recipe: a,
            servings: 2,
        },
        PlannedMeal {
            day: 2,
            meal_type: MealType::Dinner,
            recipe: b,
            servings: 2,
        },
    ]))
    .unwrap();

    db
}

#[test]
fn test_worked_example_before_deduction() {
    let db = worked_example_db();
    let plan = db.current_plan().unwrap();

    // 2 * (2/2) + 1 * (2/4) = 2.5 cups
    let items = generate_grocery_list(&plan, &db.pantry_items().unwrap(), true);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].unit, "cup");
    assert_float_absolute_eq!(items[0].quantity, 2.5, 1e-9);
}

#[test]
fn test_worked_example_with_pantry() {
    let mut db = worked_example_db();
    db.add_pantry_item(&PantryItem::new("flour", 1.0, "cup")).unwrap();

    let plan = db.current_plan().unwrap();
    let items = generate_grocery_list(&plan, &db.pantry_items().unwrap(), true);
    assert_eq!(items.len(), 1);
    assert_float_absolute_eq!(items[0].quantity, 1.5, 1e-9);

    // Disabling deduction ignores the pantry.
    let items = generate_grocery_list(&plan, &db.pantry_items().unwrap(), false);
    assert_float_absolute_eq!(items[0].quantity, 2.5, 1e-9);
}

#[test]
fn test_generation_is_idempotent_and_read_only() {
    let mut db = worked_example_db();
    db.add_pantry_item(&PantryItem::new("flour", 1.0, "cup")).unwrap();

    let plan = db.current_plan().unwrap();
    for _ in 0..3 {
        let items = generate_grocery_list(&plan, &db.pantry_items().unwrap(), true);
        assert_float_absolute_eq!(items[0].quantity, 1.5, 1e-9);
    }

    // The pantry itself is never decremented by generation.
    let pantry = db.pantry_items().unwrap();
    assert_eq!(pantry.len(), 1);
    assert_float_absolute_eq!(pantry[0].quantity, 1.0, 1e-9);
}

#[test]
fn test_quantity_equals_scaled_sum_across_many_slots() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_recipe(&recipe(
        "Oatmeal",
        MealType::Breakfast,
        1,
        vec![ingredient("oats", 0.5, "cup"), ingredient("milk", 200.0, "ml")],
    ))
    .unwrap();

    let oatmeal = db.get_recipe("Oatmeal").unwrap().unwrap();
    let meals: Vec<PlannedMeal> = (1..=5)
        .map(|day| PlannedMeal {
            day,
            meal_type: MealType::Breakfast,
            recipe: oatmeal.clone(),
            servings: 3,
        })
        .collect();
    db.save_plan(&MealPlan::new(meals)).unwrap();

    let plan = db.current_plan().unwrap();
    let items = generate_grocery_list(&plan, &[], true);

    let oats = items.iter().find(|i| i.ingredient == "oats").unwrap();
    assert_float_absolute_eq!(oats.quantity, 0.5 * 3.0 * 5.0, 1e-9);

    let milk = items.iter().find(|i| i.ingredient == "milk").unwrap();
    assert_float_absolute_eq!(milk.quantity, 200.0 * 3.0 * 5.0, 1e-9);
}

#[test]
fn test_unconvertible_units_stay_separate_lines() {
    let mut db = Database::open_in_memory().unwrap();
    db.add_recipe(&recipe(
        "Bread",
        MealType::Snack,
        2,
        vec![ingredient("flour", 2.0, "cups")],
    ))
    .unwrap();
    db.add_recipe(&recipe(
        "Cake",
        MealType::Snack,
        2,
        vec![ingredient("flour", 300.0, "g")],
    ))
    .unwrap();

    let bread = db.get_recipe("Bread").unwrap().unwrap();
    let cake = db.get_recipe("Cake").unwrap().unwrap();
    db.save_plan(&MealPlan::new(vec![
        PlannedMeal {
            day: 1,
            meal_type: MealType::Snack,
            recipe: bread,
            servings: 2,
        },
        PlannedMeal {
            day: 2,
            meal_type: MealType::Snack,
            recipe: cake,
            servings: 2,
        },
    ]))
    .unwrap();

    let plan = db.current_plan().unwrap();
    let items = generate_grocery_list(&plan, &[], true);

    let units: Vec<&str> = items.iter().map(|i| i.unit.as_str()).collect();
    assert_eq!(items.len(), 2);
    assert!(units.contains(&"cup"));
    assert!(units.contains(&"g"));
}
