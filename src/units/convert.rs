use crate::error::{PlannerError, Result};
use crate::units::tables;

/// Normalize a unit string to its canonical abbreviation.
///
/// Unknown units pass through lowercased so they still group with themselves.
pub fn normalize_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();
    match tables::alias(&lower) {
        Some(canonical) => canonical.to_string(),
        None => lower,
    }
}

/// Normalize an ingredient name for grouping and lookups.
pub fn normalize_ingredient(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether two units belong to the same compatibility class.
pub fn can_convert(from: &str, to: &str) -> bool {
    let from = normalize_unit(from);
    let to = normalize_unit(to);

    if from == to {
        return true;
    }

    (tables::volume_factor(&from).is_some() && tables::volume_factor(&to).is_some())
        || (tables::weight_factor(&from).is_some() && tables::weight_factor(&to).is_some())
}

/// Convert a quantity between compatible units.
pub fn convert(quantity: f64, from: &str, to: &str) -> Result<f64> {
    let from = normalize_unit(from);
    let to = normalize_unit(to);

    if from == to {
        return Ok(quantity);
    }

    if let (Some(f), Some(t)) = (tables::volume_factor(&from), tables::volume_factor(&to)) {
        return Ok(quantity * f / t);
    }

    if let (Some(f), Some(t)) = (tables::weight_factor(&from), tables::weight_factor(&to)) {
        return Ok(quantity * f / t);
    }

    Err(PlannerError::IncompatibleUnits { from, to })
}

/// Parse a quantity that may be a decimal, a fraction, or a mixed number.
///
/// Accepts "1.5", "1/2", and "1 1/2".
pub fn parse_quantity(text: &str) -> Result<f64> {
    let text = text.trim();

    let invalid = || PlannerError::InvalidInput(format!("Cannot parse quantity: {}", text));

    if let Some((whole, frac)) = text.split_once(' ') {
        let whole: f64 = whole.trim().parse().map_err(|_| invalid())?;
        return Ok(whole + parse_fraction(frac.trim()).ok_or_else(invalid)?);
    }

    if text.contains('/') {
        return parse_fraction(text).ok_or_else(invalid);
    }

    text.parse().map_err(|_| invalid())
}

fn parse_fraction(text: &str) -> Option<f64> {
    let (num, den) = text.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}

/// Parse a free-form ingredient line into (quantity, unit, name, preparation).
///
/// Accepted shapes: "2 cups flour, sifted", "1 onion", "salt". A second token
/// only counts as a unit when it is a known measure; otherwise the item is
/// counted by the piece ("whole").
pub fn parse_ingredient_line(text: &str) -> Result<(f64, String, String, String)> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PlannerError::InvalidInput(
            "Ingredient cannot be empty".to_string(),
        ));
    }

    // Leading numeric tokens form the quantity ("1 1/2" is two tokens).
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let qty_len = tokens
        .iter()
        .take_while(|t| t.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '/'))
        .count()
        .min(2);

    if qty_len == 0 {
        let (name, prep) = split_preparation(text);
        return Ok((1.0, "whole".to_string(), name, prep));
    }

    let quantity = parse_quantity(&tokens[..qty_len].join(" "))?;
    let rest = &tokens[qty_len..];

    if rest.is_empty() {
        return Err(PlannerError::InvalidInput(format!(
            "Missing ingredient name: {}",
            text
        )));
    }

    // Try two-word units ("fl oz", "fluid ounces") before single-word ones.
    for take in [2usize, 1] {
        if rest.len() > take {
            let candidate = rest[..take].join(" ").to_lowercase();
            let unit = normalize_unit(&candidate);
            if tables::volume_factor(&unit).is_some()
                || tables::weight_factor(&unit).is_some()
                || tables::is_count_unit(&unit)
            {
                let (name, prep) = split_preparation(&rest[take..].join(" "));
                return Ok((quantity, unit, name, prep));
            }
        }
    }

    let (name, prep) = split_preparation(&rest.join(" "));
    Ok((quantity, "whole".to_string(), name, prep))
}

fn split_preparation(text: &str) -> (String, String) {
    match text.split_once(',') {
        Some((name, prep)) => (name.trim().to_string(), prep.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

/// Format a quantity for display, preferring kitchen fractions.
pub fn format_quantity(quantity: f64) -> String {
    const FRACTIONS: [(f64, &str); 6] = [
        (0.125, "1/8"),
        (0.25, "1/4"),
        (0.333, "1/3"),
        (0.5, "1/2"),
        (0.667, "2/3"),
        (0.75, "3/4"),
    ];

    if (quantity - quantity.round()).abs() < 0.01 && quantity.round() >= 0.0 {
        return format!("{}", quantity.round() as i64);
    }

    let whole = quantity.trunc();
    let remainder = quantity - whole;

    for (value, text) in FRACTIONS {
        if (remainder - value).abs() < 0.01 {
            return if whole > 0.0 {
                format!("{} {}", whole as i64, text)
            } else {
                text.to_string()
            };
        }
    }

    let formatted = format!("{:.2}", quantity);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
