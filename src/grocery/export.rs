use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::GroceryItem;
use crate::units::format_quantity;

/// Grocery list export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "lowercase")]
pub enum ExportFormat {
    Txt,
    Md,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Md => "md",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write a grocery list to disk. Returns the path written.
///
/// Without an explicit path, writes `exports/grocery_list.<ext>`.
pub fn export_grocery_list(
    items: &[GroceryItem],
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let path = match output {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(format!("exports/grocery_list.{}", format.extension())),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match format {
        ExportFormat::Txt => write_txt(items, &path)?,
        ExportFormat::Md => write_markdown(items, &path)?,
        ExportFormat::Json => write_json(items, &path)?,
        ExportFormat::Csv => write_csv(items, &path)?,
    }

    Ok(path)
}

fn write_txt(items: &[GroceryItem], path: &Path) -> Result<()> {
    let mut f = File::create(path)?;

    writeln!(f, "{}", "=".repeat(50))?;
    writeln!(f, "GROCERY LIST")?;
    writeln!(f, "{}", "=".repeat(50))?;

    let mut current_category = "";
    for item in items {
        if item.category != current_category {
            current_category = &item.category;
            writeln!(f)?;
            writeln!(f, "{}", current_category.to_uppercase())?;
            writeln!(f, "{}", "-".repeat(current_category.len()))?;
        }
        writeln!(
            f,
            "  [ ] {} - {} {}",
            item.ingredient,
            format_quantity(item.quantity),
            item.unit
        )?;
    }

    writeln!(f)?;
    writeln!(f, "{}", "=".repeat(50))?;
    writeln!(f, "Total Items: {}", items.len())?;
    Ok(())
}

fn write_markdown(items: &[GroceryItem], path: &Path) -> Result<()> {
    let mut f = File::create(path)?;

    writeln!(f, "# Grocery List")?;

    let mut current_category = "";
    for item in items {
        if item.category != current_category {
            current_category = &item.category;
            writeln!(f)?;
            writeln!(f, "## {}", current_category)?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "- [ ] {} - {} {}",
            item.ingredient,
            format_quantity(item.quantity),
            item.unit
        )?;
    }

    writeln!(f)?;
    writeln!(f, "---")?;
    writeln!(f, "**Total Items:** {}", items.len())?;
    Ok(())
}

fn write_json(items: &[GroceryItem], path: &Path) -> Result<()> {
    let data = serde_json::json!({
        "items": items,
        "total_items": items.len(),
    });
    fs::write(path, serde_json::to_string_pretty(&data)?)?;
    Ok(())
}

fn write_csv(items: &[GroceryItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["ingredient", "quantity", "unit", "category"])?;
    for item in items {
        wtr.write_record([
            item.ingredient.clone(),
            format!("{}", item.quantity),
            item.unit.clone(),
            item.category.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_items() -> Vec<GroceryItem> {
        vec![
            GroceryItem {
                ingredient: "apple".to_string(),
                quantity: 3.0,
                unit: "whole".to_string(),
                category: "Produce".to_string(),
            },
            GroceryItem {
                ingredient: "flour".to_string(),
                quantity: 2.5,
                unit: "cup".to_string(),
                category: "Pantry".to_string(),
            },
        ]
    }

    #[test]
    fn test_txt_export_groups_by_category() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.txt");

        export_grocery_list(&sample_items(), ExportFormat::Txt, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("PRODUCE"));
        assert!(content.contains("PANTRY"));
        assert!(content.contains("[ ] flour - 2 1/2 cup"));
        assert!(content.contains("Total Items: 2"));
    }

    #[test]
    fn test_markdown_export_has_checkboxes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.md");

        export_grocery_list(&sample_items(), ExportFormat::Md, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("## Produce"));
        assert!(content.contains("- [ ] apple - 3 whole"));
    }

    #[test]
    fn test_json_export_structure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");

        export_grocery_list(&sample_items(), ExportFormat::Json, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["total_items"], 2);
        assert_eq!(parsed["items"][0]["ingredient"], "apple");
        assert_eq!(parsed["items"][1]["quantity"], 2.5);
    }

    #[test]
    fn test_csv_export_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.csv");

        export_grocery_list(&sample_items(), ExportFormat::Csv, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("ingredient,quantity,unit,category"));
        assert_eq!(lines.next(), Some("apple,3,whole,Produce"));
        assert_eq!(lines.next(), Some("flour,2.5,cup,Pantry"));
    }
}
