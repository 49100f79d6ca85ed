use rusqlite::{params, OptionalExtension};

use crate::error::{PlannerError, Result};
use crate::models::PantryItem;
use crate::store::database::intern_ingredient;
use crate::store::Database;
use crate::units::{normalize_ingredient, normalize_unit};

impl Database {
    /// Add stock to the pantry.
    ///
    /// Merges into an existing (ingredient, unit) row; a different unit of the
    /// same ingredient gets its own row.
    pub fn add_pantry_item(&mut self, item: &PantryItem) -> Result<()> {
        if item.quantity <= 0.0 {
            return Err(PlannerError::InvalidInput(
                "Quantity must be positive".to_string(),
            ));
        }

        let unit = normalize_unit(&item.unit);
        let tx = self.conn.transaction()?;
        let ingredient_id = intern_ingredient(&tx, &item.ingredient)?;

        let existing: Option<(i64, f64)> = tx
            .query_row(
                "SELECT id, quantity FROM pantry WHERE ingredient_id = ?1 AND unit = ?2",
                params![ingredient_id, unit],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match existing {
            Some((id, quantity)) => {
                tx.execute(
                    "UPDATE pantry SET quantity = ?1 WHERE id = ?2",
                    params![quantity + item.quantity, id],
                )?;
            }
            None => {
                tx.execute(
                    "INSERT INTO pantry (ingredient_id, quantity, unit) VALUES (?1, ?2, ?3)",
                    params![ingredient_id, item.quantity, unit],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// All pantry rows, sorted by ingredient name.
    pub fn pantry_items(&self) -> Result<Vec<PantryItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT i.name, p.quantity, p.unit
             FROM pantry p
             JOIN ingredients i ON p.ingredient_id = i.id
             ORDER BY i.name, p.unit",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PantryItem {
                ingredient: row.get(0)?,
                quantity: row.get(1)?,
                unit: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<std::result::Result<_, _>>()?)
    }

    /// Replace the stored quantity of an (ingredient, unit) row.
    ///
    /// A quantity of zero removes the row. Returns false when no row matched.
    pub fn update_pantry_quantity(
        &mut self,
        ingredient: &str,
        quantity: f64,
        unit: &str,
    ) -> Result<bool> {
        if quantity < 0.0 {
            return Err(PlannerError::InvalidInput(
                "Quantity cannot be negative".to_string(),
            ));
        }

        let name = normalize_ingredient(ingredient);
        let unit = normalize_unit(unit);

        let changed = if quantity == 0.0 {
            self.conn.execute(
                "DELETE FROM pantry
                 WHERE ingredient_id = (SELECT id FROM ingredients WHERE name = ?1)
                   AND unit = ?2",
                params![name, unit],
            )?
        } else {
            self.conn.execute(
                "UPDATE pantry SET quantity = ?1
                 WHERE ingredient_id = (SELECT id FROM ingredients WHERE name = ?2)
                   AND unit = ?3",
                params![quantity, name, unit],
            )?
        };

        Ok(changed > 0)
    }

    /// Remove an ingredient from the pantry.
    ///
    /// With a unit, removes only that row; without, removes every unit row.
    pub fn remove_pantry_item(&mut self, ingredient: &str, unit: Option<&str>) -> Result<bool> {
        let name = normalize_ingredient(ingredient);

        let removed = match unit {
            Some(unit) => self.conn.execute(
                "DELETE FROM pantry
                 WHERE ingredient_id = (SELECT id FROM ingredients WHERE name = ?1)
                   AND unit = ?2",
                params![name, normalize_unit(unit)],
            )?,
            None => self.conn.execute(
                "DELETE FROM pantry
                 WHERE ingredient_id = (SELECT id FROM ingredients WHERE name = ?1)",
                params![name],
            )?,
        };

        Ok(removed > 0)
    }

    /// Empty the pantry. Returns the number of rows removed.
    pub fn clear_pantry(&mut self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM pantry", [])?)
    }
}
