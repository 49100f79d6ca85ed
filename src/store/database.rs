use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{PlannerError, Result};
use crate::grocery::category_for;
use crate::units::normalize_ingredient;

/// Handle to the local SQLite store.
///
/// Single-user, single-process: one owned connection, no pooling.
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    /// Open the database at `path`, or at the platform default location.
    ///
    /// The parent directory is created on demand and the schema initialized.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Open a throwaway in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Platform application-data location for the database file.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "mealplanner", "meal_planner").ok_or_else(|| {
            PlannerError::InvalidInput("Could not determine data directory".to_string())
        })?;
        Ok(dirs.data_dir().join("meal_planner.db"))
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE COLLATE NOCASE,
                meal_type TEXT NOT NULL
                    CHECK(meal_type IN ('breakfast', 'lunch', 'dinner', 'snack')),
                prep_time INTEGER NOT NULL DEFAULT 0,
                cook_time INTEGER NOT NULL DEFAULT 0,
                servings INTEGER NOT NULL DEFAULT 4 CHECK(servings > 0),
                cuisine TEXT NOT NULL DEFAULT '',
                instructions TEXT NOT NULL DEFAULT ''
            );

            CREATE TABLE IF NOT EXISTS ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                category TEXT NOT NULL DEFAULT 'Other'
            );

            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                recipe_id INTEGER NOT NULL
                    REFERENCES recipes(id) ON DELETE CASCADE,
                ingredient_id INTEGER NOT NULL REFERENCES ingredients(id),
                quantity REAL NOT NULL,
                unit TEXT NOT NULL,
                preparation TEXT NOT NULL DEFAULT ''
            );

            CREATE TABLE IF NOT EXISTS dietary_tags (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                recipe_id INTEGER NOT NULL
                    REFERENCES recipes(id) ON DELETE CASCADE,
                tag TEXT NOT NULL,
                UNIQUE(recipe_id, tag)
            );

            CREATE TABLE IF NOT EXISTS pantry (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ingredient_id INTEGER NOT NULL REFERENCES ingredients(id),
                quantity REAL NOT NULL,
                unit TEXT NOT NULL,
                UNIQUE(ingredient_id, unit)
            );

            CREATE TABLE IF NOT EXISTS meal_plan (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                day_number INTEGER NOT NULL CHECK(day_number BETWEEN 1 AND 14),
                meal_type TEXT NOT NULL
                    CHECK(meal_type IN ('breakfast', 'lunch', 'dinner', 'snack')),
                recipe_id INTEGER NOT NULL
                    REFERENCES recipes(id) ON DELETE CASCADE,
                servings INTEGER NOT NULL DEFAULT 2 CHECK(servings > 0),
                UNIQUE(day_number, meal_type)
            );

            CREATE INDEX IF NOT EXISTS idx_recipes_meal_type
                ON recipes(meal_type);
            CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_recipe
                ON recipe_ingredients(recipe_id);
            CREATE INDEX IF NOT EXISTS idx_pantry_ingredient
                ON pantry(ingredient_id);
            CREATE INDEX IF NOT EXISTS idx_dietary_tags_recipe
                ON dietary_tags(recipe_id);",
        )?;
        Ok(())
    }

}

/// Intern an ingredient by normalized name, assigning its store category on
/// first sight. Takes a plain connection so it also works inside transactions.
pub(crate) fn intern_ingredient(conn: &Connection, name: &str) -> Result<i64> {
    let normalized = normalize_ingredient(name);

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM ingredients WHERE name = ?1",
            [&normalized],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO ingredients (name, category) VALUES (?1, ?2)",
        rusqlite::params![normalized, category_for(&normalized)],
    )?;
    Ok(conn.last_insert_rowid())
}
