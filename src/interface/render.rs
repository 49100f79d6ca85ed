use std::collections::BTreeMap;

use crate::grocery::category_for;
use crate::models::{GroceryItem, MealPlan, MealType, PantryItem, Recipe};
use crate::store::ImportReport;
use crate::units::format_quantity;

fn print_header(title: &str) {
    println!();
    println!("=== {} ===", title);
    println!();
}

fn print_section(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "-".repeat(title.len()));
}

/// Display the meal plan, days in order and slots in meal order.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!("No meal plan found. Generate one with: meal_planner plan generate");
        return;
    }

    print_header(&format!("Meal Plan ({} days)", plan.days));

    for day in 1..=plan.days {
        let mut meals = plan.meals_for_day(day);
        if meals.is_empty() {
            continue;
        }

        meals.sort_by_key(|m| MealType::ALL.iter().position(|t| *t == m.meal_type));
        println!("{}", meals[0].day_name());

        for meal in meals {
            println!(
                "  {:<9} {} ({} min, {} servings)",
                format!("{}:", meal.meal_type),
                meal.recipe.name,
                meal.recipe.total_time(),
                meal.servings
            );
        }
        println!();
    }
}

/// Display a grocery list grouped by store category.
pub fn display_grocery_list(items: &[GroceryItem]) {
    if items.is_empty() {
        println!("No items needed - pantry covers everything!");
        return;
    }

    print_header(&format!("Grocery List ({} items)", items.len()));

    let mut current_category = "";
    for item in items {
        if item.category != current_category {
            current_category = &item.category;
            print_section(current_category);
        }
        println!(
            "  [ ] {} - {} {}",
            item.ingredient,
            format_quantity(item.quantity),
            item.unit
        );
    }

    println!();
    println!("Total items: {}", items.len());
}

/// Display recipes grouped by meal type.
pub fn display_recipe_list(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    print_header(&format!("Your Recipes ({})", recipes.len()));

    for meal_type in MealType::ALL {
        let mut group: Vec<&Recipe> = recipes
            .iter()
            .filter(|r| r.meal_type == meal_type)
            .collect();
        if group.is_empty() {
            continue;
        }
        group.sort_by_key(|r| r.key());

        print_section(&meal_type.to_string().to_uppercase());
        for recipe in group {
            let tags = if recipe.dietary_tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", recipe.dietary_tags.join(", "))
            };
            println!(
                "  - {} ({} min){}",
                recipe.name,
                recipe.total_time(),
                tags
            );
        }
    }
    println!();
}

/// Display one recipe in full.
pub fn display_recipe(recipe: &Recipe) {
    print_header(&recipe.name);

    println!("Meal type: {}", recipe.meal_type);
    println!("Servings: {}", recipe.servings);
    println!("Prep time: {} min", recipe.prep_time);
    println!("Cook time: {} min", recipe.cook_time);
    println!("Total time: {} min", recipe.total_time());

    if !recipe.cuisine.is_empty() {
        println!("Cuisine: {}", recipe.cuisine);
    }
    if !recipe.dietary_tags.is_empty() {
        println!("Tags: {}", recipe.dietary_tags.join(", "));
    }

    print_section("Ingredients");
    for ing in &recipe.ingredients {
        let prep = if ing.preparation.is_empty() {
            String::new()
        } else {
            format!(", {}", ing.preparation)
        };
        println!(
            "  - {} {} {}{}",
            format_quantity(ing.quantity),
            ing.unit,
            ing.name,
            prep
        );
    }

    if !recipe.instructions.is_empty() {
        print_section("Instructions");
        for line in recipe.instructions.lines() {
            println!("  {}", line);
        }
    }
    println!();
}

/// Display pantry stock grouped by store category.
pub fn display_pantry(items: &[PantryItem]) {
    if items.is_empty() {
        println!("Pantry is empty.");
        return;
    }

    print_header(&format!("Pantry ({} items)", items.len()));

    let mut by_category: BTreeMap<&str, Vec<&PantryItem>> = BTreeMap::new();
    for item in items {
        by_category
            .entry(category_for(&item.ingredient))
            .or_default()
            .push(item);
    }

    for (category, group) in by_category {
        print_section(category);
        for item in group {
            println!(
                "  - {}: {} {}",
                item.ingredient,
                format_quantity(item.quantity),
                item.unit
            );
        }
    }
    println!();
}

/// Display the outcome of a JSON recipe import.
pub fn display_import_report(report: &ImportReport) {
    print_header("Import Results");
    println!("  Imported: {}", report.imported);
    println!("  Skipped:  {}", report.skipped);
    println!("  Failed:   {}", report.failed);

    if !report.messages.is_empty() {
        print_section("Details");
        for message in &report.messages {
            println!("  {}", message);
        }
    }
    println!();
}
