mod database;
mod pantry;
mod plan;
mod recipes;

pub use database::Database;
pub use recipes::ImportReport;
