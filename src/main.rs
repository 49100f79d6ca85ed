use clap::Parser;
use dialoguer::Input;

use meal_planner_rs::cli::{Cli, Command, GroceryAction, PantryAction, PlanAction, RecipeAction};
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::grocery::{export_grocery_list, generate_grocery_list, ExportFormat};
use meal_planner_rs::interface::{
    display_grocery_list, display_import_report, display_meal_plan, display_pantry,
    display_recipe, display_recipe_list, prompt_recipe, prompt_yes_no, resolve_recipe_name,
};
use meal_planner_rs::models::{MealType, PantryItem};
use meal_planner_rs::planner::{generate_plan, PlanOptions};
use meal_planner_rs::store::Database;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut db = Database::open(cli.db.as_deref())?;

    match cli.command {
        Command::Recipe { action } => match action {
            RecipeAction::Add => cmd_recipe_add(&mut db),
            RecipeAction::List { meal_type, tag } => cmd_recipe_list(&db, meal_type, &tag),
            RecipeAction::View { name } => cmd_recipe_view(&db, &name),
            RecipeAction::Delete { name, yes } => cmd_recipe_delete(&mut db, &name, yes),
            RecipeAction::Import { file } => cmd_recipe_import(&mut db, &file),
            RecipeAction::Export { output, meal_type } => {
                cmd_recipe_export(&db, &output, meal_type)
            }
        },
        Command::Plan { action } => match action {
            PlanAction::Generate {
                days,
                servings,
                no_breakfast,
                no_lunch,
                no_dinner,
                tag,
            } => cmd_plan_generate(&mut db, days, servings, no_breakfast, no_lunch, no_dinner, tag),
            PlanAction::View => cmd_plan_view(&db),
            PlanAction::Swap {
                day,
                meal_type,
                recipe,
            } => cmd_plan_swap(&mut db, day, meal_type, recipe.as_deref()),
            PlanAction::Servings {
                day,
                meal_type,
                servings,
            } => cmd_plan_servings(&mut db, day, meal_type, servings),
            PlanAction::Clear { yes } => cmd_plan_clear(&mut db, yes),
        },
        Command::Grocery { action } => match action {
            GroceryAction::Generate { no_pantry } => cmd_grocery_generate(&db, no_pantry),
            GroceryAction::Export {
                format,
                output,
                no_pantry,
            } => cmd_grocery_export(&db, format, output.as_deref(), no_pantry),
        },
        Command::Pantry { action } => match action {
            PantryAction::Add {
                ingredient,
                quantity,
                unit,
            } => cmd_pantry_add(&mut db, &ingredient, quantity, &unit),
            PantryAction::List => cmd_pantry_list(&db),
            PantryAction::Update {
                ingredient,
                quantity,
                unit,
            } => cmd_pantry_update(&mut db, &ingredient, quantity, &unit),
            PantryAction::Remove { ingredient, unit } => {
                cmd_pantry_remove(&mut db, &ingredient, unit.as_deref())
            }
            PantryAction::Clear { yes } => cmd_pantry_clear(&mut db, yes),
        },
    }
}

// ── Recipes ──────────────────────────────────────────────────────────

fn cmd_recipe_add(db: &mut Database) -> Result<()> {
    let recipe = prompt_recipe()?;
    db.add_recipe(&recipe)?;
    println!("Recipe '{}' added.", recipe.name);
    Ok(())
}

fn cmd_recipe_list(db: &Database, meal_type: Option<MealType>, tags: &[String]) -> Result<()> {
    let recipes = db.list_recipes(meal_type, tags)?;
    display_recipe_list(&recipes);
    Ok(())
}

fn cmd_recipe_view(db: &Database, name: &str) -> Result<()> {
    let recipe = db
        .get_recipe(name)?
        .ok_or_else(|| PlannerError::RecipeNotFound(name.to_string()))?;
    display_recipe(&recipe);
    Ok(())
}

fn cmd_recipe_delete(db: &mut Database, name: &str, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no(&format!("Delete recipe '{}'?", name), false)? {
        println!("Cancelled.");
        return Ok(());
    }

    if db.delete_recipe(name)? {
        println!("Recipe '{}' deleted.", name);
        Ok(())
    } else {
        Err(PlannerError::RecipeNotFound(name.to_string()))
    }
}

fn cmd_recipe_import(db: &mut Database, file: &std::path::Path) -> Result<()> {
    println!("Importing recipes from {}...", file.display());
    let report = db.import_recipes(file)?;
    display_import_report(&report);
    Ok(())
}

fn cmd_recipe_export(
    db: &Database,
    output: &std::path::Path,
    meal_type: Option<MealType>,
) -> Result<()> {
    let count = db.export_recipes(output, meal_type)?;
    println!("Exported {} recipes to {}.", count, output.display());
    Ok(())
}

// ── Meal plan ────────────────────────────────────────────────────────

fn cmd_plan_generate(
    db: &mut Database,
    days: u32,
    servings: u32,
    no_breakfast: bool,
    no_lunch: bool,
    no_dinner: bool,
    tags: Vec<String>,
) -> Result<()> {
    let mut meals = Vec::new();
    if !no_breakfast {
        meals.push(MealType::Breakfast);
    }
    if !no_lunch {
        meals.push(MealType::Lunch);
    }
    if !no_dinner {
        meals.push(MealType::Dinner);
    }

    let options = PlanOptions {
        days,
        meals,
        servings,
        tags,
    };

    let recipes = db.list_recipes(None, &options.tags)?;
    let plan = generate_plan(&recipes, &options)?;
    db.save_plan(&plan)?;

    display_meal_plan(&plan);
    println!("Meal plan generated and saved.");
    Ok(())
}

fn cmd_plan_view(db: &Database) -> Result<()> {
    display_meal_plan(&db.current_plan()?);
    Ok(())
}

fn cmd_plan_swap(
    db: &mut Database,
    day: u32,
    meal_type: MealType,
    recipe: Option<&str>,
) -> Result<()> {
    let plan = db.current_plan()?;
    if plan.is_empty() {
        return Err(PlannerError::EmptyPlan);
    }

    let current = plan
        .get_slot(day, meal_type)
        .ok_or_else(|| PlannerError::SlotNotFound {
            day,
            meal_type: meal_type.to_string(),
        })?;
    println!(
        "Current {} for {}: {}",
        meal_type,
        current.day_name(),
        current.recipe.name
    );

    let used = plan.recipe_names();
    let suggestions: Vec<_> = db
        .list_recipes(Some(meal_type), &[])?
        .into_iter()
        .filter(|r| !used.iter().any(|u| u.eq_ignore_ascii_case(&r.name)))
        .collect();

    let new_name = match recipe {
        Some(name) => name.to_string(),
        None => {
            if suggestions.is_empty() {
                return Err(PlannerError::InvalidInput(format!(
                    "No other {} recipes available for swapping",
                    meal_type
                )));
            }

            println!();
            println!("Alternatives:");
            for (i, suggestion) in suggestions.iter().take(10).enumerate() {
                println!(
                    "  {}. {} ({} min)",
                    i + 1,
                    suggestion.name,
                    suggestion.total_time()
                );
            }

            let choice: String = Input::new()
                .with_prompt("Enter recipe name or number")
                .interact_text()?;
            let choice = choice.trim().to_string();

            match choice.parse::<usize>() {
                Ok(n) if n >= 1 && n <= suggestions.len().min(10) => {
                    suggestions[n - 1].name.clone()
                }
                Ok(_) => {
                    return Err(PlannerError::InvalidInput("Invalid selection".to_string()))
                }
                Err(_) => choice,
            }
        }
    };

    // Tolerate near-miss names by offering close matches.
    let all = db.list_recipes(Some(meal_type), &[])?;
    let resolved = resolve_recipe_name(&new_name, &all)?
        .ok_or_else(|| PlannerError::RecipeNotFound(new_name.clone()))?;

    db.swap_slot(day, meal_type, &resolved)?;
    println!("Swapped to '{}'.", resolved);
    Ok(())
}

fn cmd_plan_servings(db: &mut Database, day: u32, meal_type: MealType, servings: u32) -> Result<()> {
    db.set_slot_servings(day, meal_type, servings)?;
    println!(
        "Set {} on day {} to {} servings.",
        meal_type, day, servings
    );
    Ok(())
}

fn cmd_plan_clear(db: &mut Database, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("Clear current meal plan?", false)? {
        println!("Cancelled.");
        return Ok(());
    }

    db.clear_plan()?;
    println!("Meal plan cleared.");
    Ok(())
}

// ── Grocery ──────────────────────────────────────────────────────────

fn cmd_grocery_generate(db: &Database, no_pantry: bool) -> Result<()> {
    let plan = db.current_plan()?;
    if plan.is_empty() {
        return Err(PlannerError::EmptyPlan);
    }

    let pantry = db.pantry_items()?;
    let items = generate_grocery_list(&plan, &pantry, !no_pantry);
    display_grocery_list(&items);
    Ok(())
}

fn cmd_grocery_export(
    db: &Database,
    format: ExportFormat,
    output: Option<&std::path::Path>,
    no_pantry: bool,
) -> Result<()> {
    let plan = db.current_plan()?;
    if plan.is_empty() {
        return Err(PlannerError::EmptyPlan);
    }

    let pantry = db.pantry_items()?;
    let items = generate_grocery_list(&plan, &pantry, !no_pantry);
    if items.is_empty() {
        println!("No items to export - pantry covers everything!");
        return Ok(());
    }

    let path = export_grocery_list(&items, format, output)?;
    println!("Exported {} items to {}.", items.len(), path.display());
    Ok(())
}

// ── Pantry ───────────────────────────────────────────────────────────

fn cmd_pantry_add(db: &mut Database, ingredient: &str, quantity: f64, unit: &str) -> Result<()> {
    db.add_pantry_item(&PantryItem::new(ingredient, quantity, unit))?;
    println!("Added {} {} of {} to pantry.", quantity, unit, ingredient);
    Ok(())
}

fn cmd_pantry_list(db: &Database) -> Result<()> {
    display_pantry(&db.pantry_items()?);
    Ok(())
}

fn cmd_pantry_update(db: &mut Database, ingredient: &str, quantity: f64, unit: &str) -> Result<()> {
    if db.update_pantry_quantity(ingredient, quantity, unit)? {
        if quantity == 0.0 {
            println!("Removed {} from pantry.", ingredient);
        } else {
            println!("Updated {} to {} {}.", ingredient, quantity, unit);
        }
        Ok(())
    } else {
        Err(PlannerError::InvalidInput(format!(
            "Item '{}' not found in pantry",
            ingredient
        )))
    }
}

fn cmd_pantry_remove(db: &mut Database, ingredient: &str, unit: Option<&str>) -> Result<()> {
    if db.remove_pantry_item(ingredient, unit)? {
        println!("Removed {} from pantry.", ingredient);
        Ok(())
    } else {
        Err(PlannerError::InvalidInput(format!(
            "Item '{}' not found in pantry",
            ingredient
        )))
    }
}

fn cmd_pantry_clear(db: &mut Database, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("Clear the pantry?", false)? {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = db.clear_pantry()?;
    println!("Removed {} pantry items.", removed);
    Ok(())
}
