pub mod prompts;
pub mod render;

pub use prompts::{prompt_recipe, prompt_yes_no, resolve_recipe_name};
pub use render::{
    display_grocery_list, display_import_report, display_meal_plan, display_pantry,
    display_recipe, display_recipe_list,
};
