use meal_planner_rs::error::PlannerError;
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

fn recipe(name: &str, meal_type: MealType, servings: u32, ingredients: Vec<RecipeIngredient>) -> Recipe {
    Recipe {
        id: None,
        name: name.to_string(),
        meal_type,
        prep_time: 10,
        cook_time: 20,
        servings,
        cuisine: "Test".to_string(),
        dietary_tags: vec!["vegetarian".to_string()],
        ingredients,
        instructions: "Cook it.".to_string(),
    }
}

fn seeded_db() -> Database {
    let mut db = Database::open_in_memory().unwrap();
    db.add_recipe(&recipe(
        "Pancakes",
        MealType::Breakfast,
        2,
        vec![ingredient("flour", 2.0, "cups"), ingredient("milk", 1.0, "cup")],
    ))
    .unwrap();
    db.add_recipe(&recipe(
        "Muffins",
        MealType::Breakfast,
        4,
        vec![ingredient("flour", 1.0, "cup")],
    ))
    .unwrap();
    db.add_recipe(&recipe(
        "Salad",
        MealType::Lunch,
        2,
        vec![ingredient("lettuce", 1.0, "whole")],
    ))
    .unwrap();
    db
}

fn plan_slot(db: &Database, name: &str, day: u32, servings: u32) -> PlannedMeal {
    let recipe = db.get_recipe(name).unwrap().unwrap();
    PlannedMeal {
        day,
        meal_type: recipe.meal_type,
        recipe,
        servings,
    }
}

#[test]
fn test_open_creates_database_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data").join("meal_planner.db");

    let db = Database::open(Some(&path)).unwrap();
    assert!(path.exists());
    assert!(db.list_recipes(None, &[]).unwrap().is_empty());
}

#[test]
fn test_add_and_get_recipe() {
    let db = seeded_db();

    let fetched = db.get_recipe("pancakes").unwrap().expect("case-insensitive lookup");
    assert_eq!(fetched.name, "Pancakes");
    assert_eq!(fetched.meal_type, MealType::Breakfast);
    assert_eq!(fetched.servings, 2);
    assert_eq!(fetched.ingredients.len(), 2);
    assert_eq!(fetched.dietary_tags, vec!["vegetarian".to_string()]);

    assert!(db.get_recipe("Waffles").unwrap().is_none());
}

#[test]
fn test_duplicate_recipe_rejected() {
    let mut db = seeded_db();

    let duplicate = recipe("PANCAKES", MealType::Breakfast, 2, vec![ingredient("flour", 1.0, "cup")]);
    let err = db.add_recipe(&duplicate);
    assert!(matches!(err, Err(PlannerError::DuplicateRecipe(_))));
}

#[test]
fn test_list_recipes_filters() {
    let db = seeded_db();

    assert_eq!(db.list_recipes(None, &[]).unwrap().len(), 3);
    assert_eq!(
        db.list_recipes(Some(MealType::Breakfast), &[]).unwrap().len(),
        2
    );
    assert_eq!(
        db.list_recipes(None, &["vegetarian".to_string()]).unwrap().len(),
        3
    );
    assert!(db
        .list_recipes(None, &["vegan".to_string()])
        .unwrap()
        .is_empty());
}

#[test]
fn test_recipe_import_export_roundtrip() {
    let db = seeded_db();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");

    let exported = db.export_recipes(&path, None).unwrap();
    assert_eq!(exported, 3);

    let mut fresh = Database::open_in_memory().unwrap();
    let report = fresh.import_recipes(&path).unwrap();
    assert_eq!(report.imported, 3);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed, 0);

    let original = db.list_recipes(None, &[]).unwrap();
    let reimported = fresh.list_recipes(None, &[]).unwrap();
    assert_eq!(original.len(), reimported.len());

    for (a, b) in original.iter().zip(&reimported) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.meal_type, b.meal_type);
        assert_eq!(a.servings, b.servings);
        assert_eq!(a.dietary_tags, b.dietary_tags);
        assert_eq!(a.ingredients.len(), b.ingredients.len());
        for (ia, ib) in a.ingredients.iter().zip(&b.ingredients) {
            assert_eq!(ia.name, ib.name);
            assert_eq!(ia.unit, ib.unit);
            assert!((ia.quantity - ib.quantity).abs() < 1e-9);
        }
    }
}

#[test]
fn test_import_skips_existing_names() {
    let db = seeded_db();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    db.export_recipes(&path, None).unwrap();

    // Importing into the same collection skips everything.
    let mut db = db;
    let report = db.import_recipes(&path).unwrap();
    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.messages.len(), 3);
}

#[test]
fn test_save_and_load_plan() {
    let mut db = seeded_db();

    let plan = MealPlan::new(vec![
        plan_slot(&db, "Pancakes", 1, 2),
        plan_slot(&db, "Salad", 1, 2),
        plan_slot(&db, "Muffins", 2, 4),
    ]);
    db.save_plan(&plan).unwrap();

    let loaded = db.current_plan().unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.days, 2);
    assert_eq!(
        loaded.get_slot(1, MealType::Breakfast).unwrap().recipe.name,
        "Pancakes"
    );
    assert_eq!(
        loaded.get_slot(1, MealType::Lunch).unwrap().recipe.name,
        "Salad"
    );
}

#[test]
fn test_swap_changes_only_target_slot() {
    let mut db = seeded_db();

    db.save_plan(&MealPlan::new(vec![
        plan_slot(&db, "Pancakes", 1, 3),
        plan_slot(&db, "Salad", 1, 2),
        plan_slot(&db, "Pancakes", 2, 2),
    ]))
    .unwrap();

    db.swap_slot(1, MealType::Breakfast, "Muffins").unwrap();

    let plan = db.current_plan().unwrap();
    let swapped = plan.get_slot(1, MealType::Breakfast).unwrap();
    assert_eq!(swapped.recipe.name, "Muffins");
    // Servings of the slot survive the swap.
    assert_eq!(swapped.servings, 3);

    // Every other slot is untouched.
    assert_eq!(plan.get_slot(1, MealType::Lunch).unwrap().recipe.name, "Salad");
    assert_eq!(
        plan.get_slot(2, MealType::Breakfast).unwrap().recipe.name,
        "Pancakes"
    );
}

#[test]
fn test_swap_rejects_wrong_meal_type() {
    let mut db = seeded_db();
    db.save_plan(&MealPlan::new(vec![plan_slot(&db, "Pancakes", 1, 2)]))
        .unwrap();

    // Salad is a lunch recipe; the slot is breakfast.
    let err = db.swap_slot(1, MealType::Breakfast, "Salad");
    assert!(matches!(err, Err(PlannerError::InvalidInput(_))));

    let err = db.swap_slot(1, MealType::Breakfast, "Nonexistent");
    assert!(matches!(err, Err(PlannerError::RecipeNotFound(_))));

    let err = db.swap_slot(5, MealType::Breakfast, "Muffins");
    assert!(matches!(err, Err(PlannerError::SlotNotFound { .. })));
}

#[test]
fn test_set_slot_servings() {
    let mut db = seeded_db();
    db.save_plan(&MealPlan::new(vec![plan_slot(&db, "Pancakes", 1, 2)]))
        .unwrap();

    db.set_slot_servings(1, MealType::Breakfast, 6).unwrap();
    let plan = db.current_plan().unwrap();
    assert_eq!(plan.get_slot(1, MealType::Breakfast).unwrap().servings, 6);

    assert!(db.set_slot_servings(1, MealType::Breakfast, 0).is_err());
    assert!(db.set_slot_servings(3, MealType::Breakfast, 2).is_err());
}

#[test]
fn test_delete_recipe_cascade_clears_plan_slot() {
    let mut db = seeded_db();

    db.save_plan(&MealPlan::new(vec![
        plan_slot(&db, "Pancakes", 1, 2),
        plan_slot(&db, "Salad", 1, 2),
    ]))
    .unwrap();

    assert!(db.delete_recipe("Pancakes").unwrap());

    // The referencing slot is gone, the rest of the plan survives.
    let plan = db.current_plan().unwrap();
    assert_eq!(plan.len(), 1);
    assert!(plan.get_slot(1, MealType::Breakfast).is_none());
    assert_eq!(plan.get_slot(1, MealType::Lunch).unwrap().recipe.name, "Salad");

    // Grocery generation keeps working on the surviving plan.
    let pantry = db.pantry_items().unwrap();
    let items =
        meal_planner_rs::grocery::generate_grocery_list(&plan, &pantry, true);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].ingredient.to_lowercase(), "lettuce");
}

#[test]
fn test_pantry_add_merges_same_unit() {
    let mut db = seeded_db();

    db.add_pantry_item(&PantryItem::new("flour", 1.0, "cups")).unwrap();
    db.add_pantry_item(&PantryItem::new("Flour", 0.5, "cup")).unwrap();
    // A different unit gets its own row.
    db.add_pantry_item(&PantryItem::new("flour", 500.0, "g")).unwrap();

    let items = db.pantry_items().unwrap();
    assert_eq!(items.len(), 2);

    let cups = items.iter().find(|i| i.unit == "cup").unwrap();
    assert!((cups.quantity - 1.5).abs() < 1e-9);
}

#[test]
fn test_pantry_update_and_remove() {
    let mut db = seeded_db();
    db.add_pantry_item(&PantryItem::new("rice", 2.0, "cups")).unwrap();

    assert!(db.update_pantry_quantity("rice", 3.0, "cup").unwrap());
    assert!((db.pantry_items().unwrap()[0].quantity - 3.0).abs() < 1e-9);

    // Zero quantity removes the row.
    assert!(db.update_pantry_quantity("rice", 0.0, "cup").unwrap());
    assert!(db.pantry_items().unwrap().is_empty());

    assert!(!db.update_pantry_quantity("rice", 1.0, "cup").unwrap());
    assert!(db.update_pantry_quantity("rice", -1.0, "cup").is_err());

    db.add_pantry_item(&PantryItem::new("milk", 1.0, "l")).unwrap();
    db.add_pantry_item(&PantryItem::new("milk", 2.0, "cups")).unwrap();
    assert!(db.remove_pantry_item("milk", None).unwrap());
    assert!(db.pantry_items().unwrap().is_empty());
}

#[test]
fn test_clear_plan_and_pantry() {
    let mut db = seeded_db();
    db.save_plan(&MealPlan::new(vec![plan_slot(&db, "Pancakes", 1, 2)]))
        .unwrap();
    db.add_pantry_item(&PantryItem::new("salt", 1.0, "pinch")).unwrap();

    assert_eq!(db.clear_plan().unwrap(), 1);
    assert!(db.current_plan().unwrap().is_empty());

    assert_eq!(db.clear_pantry().unwrap(), 1);
    assert!(db.pantry_items().unwrap().is_empty());
}
