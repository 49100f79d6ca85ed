use std::collections::HashMap;

use crate::grocery::categories::{category_for, category_rank};
use crate::models::{GroceryItem, MealPlan, PantryItem};
use crate::units::{can_convert, convert, normalize_ingredient, normalize_unit};

/// Quantities below this are treated as fully covered; absorbs float noise
/// from unit conversion.
const COVERED_EPSILON: f64 = 0.01;

/// Build the consolidated shopping list for a plan.
///
/// Pure function of the plan and pantry: scales each recipe's ingredient
/// lines by the planned servings, merges lines per ingredient (converting
/// compatible units), then optionally subtracts pantry stock floored at zero.
/// Neither input is modified.
pub fn generate_grocery_list(
    plan: &MealPlan,
    pantry: &[PantryItem],
    deduct_pantry: bool,
) -> Vec<GroceryItem> {
    let mut scaled = Vec::new();

    for meal in &plan.meals {
        let multiplier = meal.serving_multiplier();
        for ing in &meal.recipe.ingredients {
            scaled.push((
                ing.name.clone(),
                ing.quantity * multiplier,
                normalize_unit(&ing.unit),
            ));
        }
    }

    let mut items = consolidate(scaled);

    if deduct_pantry {
        items = subtract_pantry(items, pantry);
    }

    items.sort_by(|a, b| {
        category_rank(&a.category)
            .cmp(&category_rank(&b.category))
            .then_with(|| a.ingredient.to_lowercase().cmp(&b.ingredient.to_lowercase()))
    });

    items
}

/// Group accumulator: first-seen display name plus per-unit sums in
/// first-seen unit order.
struct Group {
    display: String,
    by_unit: Vec<(String, f64)>,
}

fn consolidate(lines: Vec<(String, f64, String)>) -> Vec<GroceryItem> {
    let mut groups: HashMap<String, Group> = HashMap::new();

    for (name, quantity, unit) in lines {
        let key = normalize_ingredient(&name);
        let group = groups.entry(key).or_insert_with(|| Group {
            display: name,
            by_unit: Vec::new(),
        });

        match group.by_unit.iter_mut().find(|(u, _)| *u == unit) {
            Some((_, total)) => *total += quantity,
            None => group.by_unit.push((unit, quantity)),
        }
    }

    let mut items = Vec::new();

    for (key, group) in groups {
        let category = category_for(&key).to_string();

        // Fold convertible units into the first-seen one; the rest stay as
        // their own lines.
        let mut folded: Vec<(String, f64)> = Vec::new();
        for (unit, quantity) in group.by_unit {
            match folded
                .iter_mut()
                .find(|(base, _)| can_convert(&unit, base))
            {
                Some((base, total)) => {
                    // can_convert above guarantees this succeeds
                    if let Ok(converted) = convert(quantity, &unit, base) {
                        *total += converted;
                    }
                }
                None => folded.push((unit, quantity)),
            }
        }

        for (unit, quantity) in folded {
            if quantity > 0.0 {
                items.push(GroceryItem {
                    ingredient: group.display.clone(),
                    quantity,
                    unit,
                    category: category.clone(),
                });
            }
        }
    }

    items
}

fn subtract_pantry(items: Vec<GroceryItem>, pantry: &[PantryItem]) -> Vec<GroceryItem> {
    if pantry.is_empty() {
        return items;
    }

    let mut stock: HashMap<String, Vec<(f64, String)>> = HashMap::new();
    for item in pantry {
        stock
            .entry(normalize_ingredient(&item.ingredient))
            .or_default()
            .push((item.quantity, normalize_unit(&item.unit)));
    }

    let mut remaining_items = Vec::new();

    for item in items {
        let key = normalize_ingredient(&item.ingredient);
        let Some(entries) = stock.get(&key) else {
            remaining_items.push(item);
            continue;
        };

        let mut needed = item.quantity;
        for (stock_qty, stock_unit) in entries {
            if needed <= 0.0 {
                break;
            }
            let Ok(usable) = convert(*stock_qty, stock_unit, &item.unit) else {
                continue;
            };
            needed -= needed.min(usable);
        }

        if needed > COVERED_EPSILON {
            remaining_items.push(GroceryItem {
                quantity: needed,
                ..item
            });
        }
    }

    remaining_items
}
