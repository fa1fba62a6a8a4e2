use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::ParsedIngredient;

/// Approximate grams per unit, for calorie math only.
///
/// This is intentionally a different table from the conversion factors in
/// `units`: that one is relative to a family base unit for quantity algebra,
/// this one is absolute grams per unit of the named measure.
const UNIT_GRAMS: &[(&str, f64)] = &[
    // Volume
    ("cup", 240.0),
    ("cups", 240.0),
    ("c", 240.0),
    ("tablespoon", 15.0),
    ("tablespoons", 15.0),
    ("tbsp", 15.0),
    ("tb", 15.0),
    ("teaspoon", 5.0),
    ("teaspoons", 5.0),
    ("tsp", 5.0),
    ("t", 5.0),
    ("fluid ounce", 30.0),
    ("fluid ounces", 30.0),
    ("fl oz", 30.0),
    ("floz", 30.0),
    ("pint", 480.0),
    ("pints", 480.0),
    ("pt", 480.0),
    ("quart", 960.0),
    ("quarts", 960.0),
    ("qt", 960.0),
    ("gallon", 3840.0),
    ("gallons", 3840.0),
    ("gal", 3840.0),
    ("liter", 1000.0),
    ("liters", 1000.0),
    ("l", 1000.0),
    ("milliliter", 1.0),
    ("milliliters", 1.0),
    ("ml", 1.0),
    // Weight
    ("pound", 454.0),
    ("pounds", 454.0),
    ("lb", 454.0),
    ("lbs", 454.0),
    ("ounce", 28.0),
    ("ounces", 28.0),
    ("oz", 28.0),
    ("gram", 1.0),
    ("grams", 1.0),
    ("g", 1.0),
    ("kilogram", 1000.0),
    ("kilograms", 1000.0),
    ("kg", 1000.0),
    // Count (rough estimates)
    ("piece", 50.0),
    ("pieces", 50.0),
    ("pc", 50.0),
    ("whole", 100.0),
    ("item", 50.0),
    ("items", 50.0),
    ("clove", 5.0),
    ("cloves", 5.0),
    ("slice", 30.0),
    ("slices", 30.0),
    ("can", 400.0),
    ("cans", 400.0),
    ("package", 250.0),
    ("packages", 250.0),
    ("pkg", 250.0),
    ("bunch", 100.0),
    ("bunches", 100.0),
    // Size descriptors
    ("small", 50.0),
    ("medium", 100.0),
    ("large", 150.0),
    ("extra-large", 200.0),
    ("xl", 200.0),
];

static UNIT_GRAMS_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| UNIT_GRAMS.iter().copied().collect());

/// Descriptor words stripped for nutrition-API lookups.
static RE_FOOD_NAME_DESCRIPTORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(fresh|dried|frozen|canned|chopped|diced|minced|sliced|grated|shredded|organic|raw|cooked)\b",
    )
    .unwrap()
});

/// Mass estimation heuristics. Domain approximations, not measured data;
/// kept on a struct so callers can tune them without touching the parser.
#[derive(Debug, Clone, Copy)]
pub struct GramEstimator {
    /// Grams assumed per unit of quantity when no unit is given ("3 tomatoes").
    pub grams_per_unitless_item: f64,
    /// Grams assumed when neither unit nor a usable quantity is present.
    pub default_grams: f64,
    /// Lower clamp on every estimate.
    pub min_grams: f64,
    /// Upper clamp on every estimate.
    pub max_grams: f64,
}

impl Default for GramEstimator {
    fn default() -> Self {
        Self {
            grams_per_unitless_item: 100.0,
            default_grams: 100.0,
            min_grams: 5.0,
            max_grams: 2000.0,
        }
    }
}

impl GramEstimator {
    /// Estimate the mass of a parsed ingredient in grams.
    ///
    /// Direct weight units convert exactly; other recognized units go
    /// through the approximate gram table; unitless quantities fall back to
    /// a per-item heuristic. The result is always clamped to
    /// `[min_grams, max_grams]`, so malformed input ("500 cups", "0.001 tsp")
    /// cannot produce pathological values.
    pub fn estimate(&self, item: &ParsedIngredient) -> u32 {
        let quantity = item.quantity;
        let unit = item.unit.to_lowercase();

        let grams = match unit.as_str() {
            "g" | "gram" | "grams" => quantity,
            "kg" | "kilogram" | "kilograms" => quantity * 1000.0,
            "oz" | "ounce" | "ounces" => quantity * 28.0,
            "lb" | "lbs" | "pound" | "pounds" => quantity * 454.0,
            _ => match UNIT_GRAMS_MAP.get(unit.as_str()) {
                Some(per_unit) if !unit.is_empty() => quantity * per_unit,
                _ if quantity > 0.0 && quantity != 1.0 => {
                    quantity * self.grams_per_unitless_item
                }
                _ => self.default_grams,
            },
        };

        grams.clamp(self.min_grams, self.max_grams) as u32
    }
}

/// Estimate grams with the default heuristics.
pub fn estimate_grams(item: &ParsedIngredient) -> u32 {
    GramEstimator::default().estimate(item)
}

/// Extract a clean food name for nutrition-database lookups.
///
/// Starts from the canonicalized `name_for_category` and strips a further
/// set of preparation descriptors, collapsing whitespace.
pub fn extract_food_name(item: &ParsedIngredient) -> String {
    RE_FOOD_NAME_DESCRIPTORS
        .replace_all(&item.name_for_category, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
