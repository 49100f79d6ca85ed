mod categories;
mod consolidate;
mod export;

pub use categories::{category_for, category_rank, CATEGORY_ORDER};
pub use consolidate::generate_grocery_list;
pub use export::{export_grocery_list, ExportFormat};
