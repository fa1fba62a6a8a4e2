use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Family of a measurement unit. Two ingredient entries may only be merged
/// when their families match and neither is `Other`, or when both entries
/// carry no unit at all.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Volume,
    Weight,
    Count,
    #[default]
    Other,
}

/// Conversion factors relative to the base unit of each family.
///
/// Base units: cup for volume, pound for weight. Count units are additive
/// with no conversion, so they all carry a 1:1 factor. This table drives
/// unit algebra during aggregation; the gram-estimation table in `grams`
/// is a separate concern with a different magnitude convention.
const CONVERSION_FACTORS: &[(&str, f64)] = &[
    // Volume (fractions of a cup)
    ("cup", 1.0),
    ("cups", 1.0),
    ("c", 1.0),
    ("tablespoon", 1.0 / 16.0),
    ("tablespoons", 1.0 / 16.0),
    ("tbsp", 1.0 / 16.0),
    ("tb", 1.0 / 16.0),
    ("teaspoon", 1.0 / 48.0),
    ("teaspoons", 1.0 / 48.0),
    ("tsp", 1.0 / 48.0),
    ("t", 1.0 / 48.0),
    ("fluid ounce", 1.0 / 8.0),
    ("fluid ounces", 1.0 / 8.0),
    ("fl oz", 1.0 / 8.0),
    ("floz", 1.0 / 8.0),
    ("pint", 2.0),
    ("pints", 2.0),
    ("pt", 2.0),
    ("quart", 4.0),
    ("quarts", 4.0),
    ("qt", 4.0),
    ("gallon", 16.0),
    ("gallons", 16.0),
    ("gal", 16.0),
    ("liter", 4.22675),
    ("liters", 4.22675),
    ("l", 4.22675),
    ("milliliter", 0.00422675),
    ("milliliters", 0.00422675),
    ("ml", 0.00422675),
    // Weight (fractions of a pound)
    ("pound", 1.0),
    ("pounds", 1.0),
    ("lb", 1.0),
    ("lbs", 1.0),
    ("ounce", 1.0 / 16.0),
    ("ounces", 1.0 / 16.0),
    ("oz", 1.0 / 16.0),
    ("gram", 0.00220462),
    ("grams", 0.00220462),
    ("g", 0.00220462),
    ("kilogram", 2.20462),
    ("kilograms", 2.20462),
    ("kg", 2.20462),
    // Count
    ("piece", 1.0),
    ("pieces", 1.0),
    ("pc", 1.0),
    ("whole", 1.0),
    ("item", 1.0),
    ("items", 1.0),
    ("clove", 1.0),
    ("cloves", 1.0),
    ("slice", 1.0),
    ("slices", 1.0),
    ("can", 1.0),
    ("cans", 1.0),
    ("package", 1.0),
    ("packages", 1.0),
    ("pkg", 1.0),
    ("bunch", 1.0),
    ("bunches", 1.0),
];

/// Size descriptors the parser accepts in unit position ("3 large eggs").
/// They classify as `Other`, so they never participate in unit conversion.
pub(crate) const SIZE_DESCRIPTORS: &[&str] = &[
    "small",
    "medium",
    "large",
    "extra-large",
    "xl",
    "whole",
    "half",
    "quarter",
];

static FACTORS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| CONVERSION_FACTORS.iter().copied().collect());

/// All tokens the parser recognizes in unit position.
pub(crate) fn unit_vocabulary() -> Vec<&'static str> {
    CONVERSION_FACTORS
        .iter()
        .map(|(unit, _)| *unit)
        .chain(SIZE_DESCRIPTORS.iter().copied())
        .collect()
}

/// Classify a raw unit string into its family.
///
/// Returns the trimmed, lowercased unit together with its [`UnitFamily`].
/// Unknown units (including the empty string) classify as `Other`.
pub fn classify_unit(unit: &str) -> (String, UnitFamily) {
    let normalized = unit.trim().to_lowercase();

    let family = match normalized.as_str() {
        "cup" | "cups" | "c" | "tablespoon" | "tablespoons" | "tbsp" | "tb" | "teaspoon"
        | "teaspoons" | "tsp" | "t" | "fluid ounce" | "fluid ounces" | "fl oz" | "floz"
        | "pint" | "pints" | "pt" | "quart" | "quarts" | "qt" | "gallon" | "gallons" | "gal"
        | "liter" | "liters" | "l" | "milliliter" | "milliliters" | "ml" => UnitFamily::Volume,
        "pound" | "pounds" | "lb" | "lbs" | "ounce" | "ounces" | "oz" | "gram" | "grams" | "g"
        | "kilogram" | "kilograms" | "kg" => UnitFamily::Weight,
        "piece" | "pieces" | "pc" | "whole" | "item" | "items" | "clove" | "cloves" | "slice"
        | "slices" | "can" | "cans" | "package" | "packages" | "pkg" | "bunch" | "bunches" => {
            UnitFamily::Count
        }
        _ => UnitFamily::Other,
    };

    (normalized, family)
}

/// Conversion factor of a unit relative to its family's base unit, if known.
pub fn conversion_factor(unit: &str) -> Option<f64> {
    FACTORS.get(unit.trim().to_lowercase().as_str()).copied()
}
