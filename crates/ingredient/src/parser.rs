use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::quantity::parse_quantity;
use crate::units::unit_vocabulary;

/// One ingredient line, structured.
///
/// Produced by [`parse_ingredient`]; immutable once created. `name` keeps the
/// author's capitalization for display, while `name_for_category` is the
/// lowercased, descriptor-stripped form used for categorization and food-name
/// lookups only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub original: String,
    pub quantity: f64,
    pub unit: String,
    pub name: String,
    pub name_for_category: String,
}

impl ParsedIngredient {
    /// Scale the quantity by a serving ratio (target servings over the
    /// recipe's base servings), keeping everything else intact.
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            quantity: self.quantity * ratio,
            ..self.clone()
        }
    }
}

struct RawMatch {
    quantity: f64,
    unit: String,
    name: String,
}

type Matcher = fn(&str) -> Option<RawMatch>;

/// Ordered matcher list; the first pattern that fits the line wins.
const MATCHERS: [Matcher; 5] = [
    match_direct_weight,
    match_range,
    match_mixed_number,
    match_fraction,
    match_number,
];

/// Alternation over every recognized unit token, longest first so that
/// "tablespoon" is never cut short by "t". A trailing word boundary keeps
/// unit tokens from being carved out of longer words ("canned" is not "can").
static UNIT_ALTERNATION: LazyLock<String> = LazyLock::new(|| {
    let mut units = unit_vocabulary();
    units.sort_by_key(|unit| std::cmp::Reverse(unit.len()));
    units
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<_>>()
        .join("|")
});

static RE_DIRECT_WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.?\d*)\s*(grams|gram|g|kg|ml|l|oz|lbs|lb)\b\s*(.*)$").unwrap()
});

static RE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\d+\.?\d*)\s*-\s*(\d+\.?\d*)\s*(?:({})\b)?\s*(.*)$",
        &*UNIT_ALTERNATION
    ))
    .unwrap()
});

static RE_MIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\d+\s+\d+/\d+)\s*(?:({})\b)?\s*(.*)$",
        &*UNIT_ALTERNATION
    ))
    .unwrap()
});

static RE_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\d+/\d+)\s*(?:({})\b)?\s*(.*)$",
        &*UNIT_ALTERNATION
    ))
    .unwrap()
});

static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\d+\.?\d*)\s*(?:({})\b)?\s*(.*)$",
        &*UNIT_ALTERNATION
    ))
    .unwrap()
});

static RE_PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Adjectives stripped when deriving `name_for_category`. Matching only;
/// the display name keeps them.
static RE_DESCRIPTORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(fresh|dried|chopped|diced|minced|sliced|crushed|grated|ground|whole|frozen|canned|organic|raw|cooked|boneless|skinless)\b",
    )
    .unwrap()
});

/// Direct attached weight: "100g chicken", "250 ml milk".
fn match_direct_weight(text: &str) -> Option<RawMatch> {
    let caps = RE_DIRECT_WEIGHT.captures(text)?;
    Some(RawMatch {
        quantity: parse_quantity(&caps[1]).ok()?,
        unit: caps[2].to_string(),
        name: caps[3].trim().to_string(),
    })
}

/// Range: "2-3 medium tomatoes". Collapsed to the arithmetic mean, since the
/// rest of the pipeline is scalar.
fn match_range(text: &str) -> Option<RawMatch> {
    let caps = RE_RANGE.captures(text)?;
    let low = parse_quantity(&caps[1]).ok()?;
    let high = parse_quantity(&caps[2]).ok()?;
    Some(RawMatch {
        quantity: (low + high) / 2.0,
        unit: caps.get(3).map_or(String::new(), |m| m.as_str().to_string()),
        name: caps[4].trim().to_string(),
    })
}

/// Mixed number: "1 1/2 cups sugar".
fn match_mixed_number(text: &str) -> Option<RawMatch> {
    let caps = RE_MIXED_NUMBER.captures(text)?;
    Some(RawMatch {
        quantity: parse_quantity(&caps[1]).ok()?,
        unit: caps.get(2).map_or(String::new(), |m| m.as_str().to_string()),
        name: caps[3].trim().to_string(),
    })
}

/// Bare fraction: "1/2 teaspoon salt".
fn match_fraction(text: &str) -> Option<RawMatch> {
    let caps = RE_FRACTION.captures(text)?;
    Some(RawMatch {
        quantity: parse_quantity(&caps[1]).ok()?,
        unit: caps.get(2).map_or(String::new(), |m| m.as_str().to_string()),
        name: caps[3].trim().to_string(),
    })
}

/// Plain number: "2 cups flour", "3 large eggs".
fn match_number(text: &str) -> Option<RawMatch> {
    let caps = RE_NUMBER.captures(text)?;
    Some(RawMatch {
        quantity: parse_quantity(&caps[1]).ok()?,
        unit: caps.get(2).map_or(String::new(), |m| m.as_str().to_string()),
        name: caps[3].trim().to_string(),
    })
}

/// Parse a single ingredient line into a [`ParsedIngredient`].
///
/// Returns `None` only for empty or whitespace-only input. Malformed
/// quantity or unit text never fails: the line degrades to a name-only
/// entry with quantity 1.0.
///
/// Handles:
/// - "2 cups flour"
/// - "1/2 teaspoon salt"
/// - "1 1/2 cups sugar"
/// - "2-3 medium tomatoes" (ranges, averaged)
/// - "100g chicken" (direct weight)
/// - "3 large eggs"
/// - "salt to taste" (no quantity)
pub fn parse_ingredient(line: &str) -> Option<ParsedIngredient> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let original = line.to_string();
    let text = line.to_lowercase();

    let raw = MATCHERS
        .iter()
        .find_map(|matcher| matcher(&text))
        .unwrap_or_else(|| RawMatch {
            quantity: 1.0,
            unit: String::new(),
            name: text.clone(),
        });

    let quantity = raw.quantity;
    let unit = raw.unit.to_lowercase();
    let mut name = raw.name;

    if name.is_empty() {
        tracing::debug!(line = %original, "no name extracted, using full line");
        name = text.clone();
    }

    if let Some(rest) = name.strip_prefix("of ") {
        name = rest.to_string();
    }

    // Everything after a comma is a recipe note ("butter, softened")
    if let Some((head, _)) = name.split_once(',') {
        name = head.trim().to_string();
    }

    name = RE_PARENTHETICAL.replace_all(&name, "").trim().to_string();

    let name_for_category = RE_DESCRIPTORS
        .replace_all(&name, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    // Recover the author's capitalization by locating the cleaned name in
    // the original line.
    if let Some(first_token) = name.split_whitespace().next() {
        if let Some(start) = original.to_lowercase().find(first_token) {
            if let Some(cased) = original.get(start..start + name.len()) {
                name = cased.trim().to_string();
            }
        }
    }

    Some(ParsedIngredient {
        original,
        quantity,
        unit,
        name,
        name_for_category,
    })
}
