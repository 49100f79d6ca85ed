mod generate;

pub use generate::{generate_plan, PlanOptions};
