use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Volume units and their factor to milliliters.
static VOLUME_TO_ML: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("ml", 1.0);
    m.insert("l", 1000.0);
    m.insert("tsp", 4.929);
    m.insert("tbsp", 14.787);
    m.insert("cup", 236.588);
    m.insert("fl oz", 29.574);
    m.insert("pint", 473.176);
    m.insert("quart", 946.353);
    m.insert("gallon", 3785.41);
    m
});

/// Weight units and their factor to grams.
static WEIGHT_TO_G: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("g", 1.0);
    m.insert("kg", 1000.0);
    m.insert("oz", 28.3495);
    m.insert("lb", 453.592);
    m
});

/// Units counted by the piece. Never converted to anything else.
static COUNT_UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "whole", "item", "items", "piece", "pieces", "clove", "cloves", "bunch", "bunches", "can",
        "cans", "package", "packages", "pkg", "dozen", "slice", "slices", "pinch", "dash",
    ]
    .into_iter()
    .collect()
});

/// Spelled-out and plural unit forms mapped to the canonical abbreviation.
static UNIT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("milliliter", "ml");
    m.insert("milliliters", "ml");
    m.insert("liter", "l");
    m.insert("liters", "l");
    m.insert("teaspoon", "tsp");
    m.insert("teaspoons", "tsp");
    m.insert("tablespoon", "tbsp");
    m.insert("tablespoons", "tbsp");
    m.insert("cups", "cup");
    m.insert("fluid ounce", "fl oz");
    m.insert("fluid ounces", "fl oz");
    m.insert("pints", "pint");
    m.insert("quarts", "quart");
    m.insert("gallons", "gallon");
    m.insert("gram", "g");
    m.insert("grams", "g");
    m.insert("kilogram", "kg");
    m.insert("kilograms", "kg");
    m.insert("ounce", "oz");
    m.insert("ounces", "oz");
    m.insert("pound", "lb");
    m.insert("pounds", "lb");
    m
});

/// Resolve an alias to its canonical unit, if one exists.
pub(crate) fn alias(unit: &str) -> Option<&'static str> {
    UNIT_ALIASES.get(unit).copied()
}

/// Factor to milliliters for a normalized volume unit.
pub fn volume_factor(unit: &str) -> Option<f64> {
    VOLUME_TO_ML.get(unit).copied()
}

/// Factor to grams for a normalized weight unit.
pub fn weight_factor(unit: &str) -> Option<f64> {
    WEIGHT_TO_G.get(unit).copied()
}

/// Whether a normalized unit is counted by the piece.
pub fn is_count_unit(unit: &str) -> bool {
    COUNT_UNITS.contains(unit)
}
