use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{MealType, Recipe, RecipeIngredient};
use crate::units::parse_ingredient_line;

/// Minimum similarity for a fuzzy recipe-name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_number<T>(prompt: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + std::fmt::Display,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Interactively collect a full recipe.
pub fn prompt_recipe() -> Result<Recipe> {
    let name: String = Input::new().with_prompt("Recipe name").interact_text()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(PlannerError::InvalidInput(
            "Recipe name cannot be empty".to_string(),
        ));
    }

    let meal_type_idx = Select::new()
        .with_prompt("Meal type")
        .items(&MealType::ALL)
        .default(0)
        .interact()?;
    let meal_type = MealType::ALL[meal_type_idx];

    let prep_time: u32 = prompt_number("Prep time (minutes)", 0u32)?;
    let cook_time: u32 = prompt_number("Cook time (minutes)", 0u32)?;
    let servings: u32 = prompt_number("Servings", 4u32)?;
    if servings == 0 {
        return Err(PlannerError::InvalidInput(
            "Servings must be at least 1".to_string(),
        ));
    }

    let cuisine: String = Input::new()
        .with_prompt("Cuisine (optional)")
        .allow_empty(true)
        .interact_text()?;

    let tags_input: String = Input::new()
        .with_prompt("Dietary tags, comma-separated (optional)")
        .allow_empty(true)
        .interact_text()?;
    let dietary_tags: Vec<String> = tags_input
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    println!("Add ingredients (like '2 cups flour, sifted' or '1 onion'); blank line to finish.");
    let mut ingredients = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(format!("Ingredient {}", ingredients.len() + 1))
            .allow_empty(true)
            .interact_text()?;

        let line = line.trim();
        if line.is_empty() {
            break;
        }

        match parse_ingredient_line(line) {
            Ok((quantity, unit, name, preparation)) => ingredients.push(RecipeIngredient {
                name,
                quantity,
                unit,
                preparation,
            }),
            Err(e) => println!("Could not parse ingredient: {}", e),
        }
    }

    if ingredients.is_empty() {
        return Err(PlannerError::InvalidInput(
            "Recipe must have at least one ingredient".to_string(),
        ));
    }

    println!("Instructions (blank line to finish):");
    let mut instruction_lines: Vec<String> = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim().to_string();
        if line.is_empty() {
            break;
        }
        instruction_lines.push(line);
    }

    Ok(Recipe {
        id: None,
        name,
        meal_type,
        prep_time,
        cook_time,
        servings,
        cuisine: cuisine.trim().to_string(),
        dietary_tags,
        ingredients,
        instructions: instruction_lines.join("\n"),
    })
}

/// Resolve typed input to a known recipe name, with fuzzy fallback.
///
/// Exact case-insensitive matches win. Otherwise close names (Jaro-Winkler
/// above 0.7) are offered: a single candidate as a yes/no, several as a menu.
pub fn resolve_recipe_name(input: &str, known: &[Recipe]) -> Result<Option<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(recipe) = known
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(input))
    {
        return Ok(Some(recipe.name.clone()));
    }

    let mut candidates: Vec<(&Recipe, f64)> = known
        .iter()
        .map(|r| {
            (
                r,
                jaro_winkler(&r.name.to_lowercase(), &input.to_lowercase()),
            )
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let name = candidates[0].0.name.clone();
        let confirmed = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;
        return Ok(confirmed.then_some(name));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(r, _)| r.name.clone())
        .collect();
    let mut menu = options.clone();
    menu.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&menu)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}
