use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::categorization::{categorize_ingredient, Category};
use crate::parser::ParsedIngredient;
use crate::quantity::format_quantity;
use crate::units::{classify_unit, conversion_factor, UnitFamily};

/// One consolidated shopping-list entry: a parsed ingredient plus the sum of
/// all contributing quantities and its shopping category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    pub original: String,
    pub quantity: f64,
    pub unit: String,
    pub name: String,
    pub name_for_category: String,
    pub category: Category,
}

impl AggregatedIngredient {
    fn from_parsed(item: &ParsedIngredient) -> Self {
        Self {
            original: item.original.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            name: item.name.clone(),
            name_for_category: item.name_for_category.clone(),
            category: categorize_ingredient(&item.name_for_category),
        }
    }

    /// Human-friendly rendering of the aggregated quantity.
    pub fn formatted_quantity(&self) -> String {
        format_quantity(self.quantity)
    }
}

/// Check whether two entries may be merged: same name (case-insensitively)
/// and either both without a unit, or both in the same non-`Other` family.
fn can_aggregate(entry: &AggregatedIngredient, item: &ParsedIngredient) -> bool {
    if !entry.name.eq_ignore_ascii_case(&item.name) {
        return false;
    }

    if entry.unit.is_empty() && item.unit.is_empty() {
        return true;
    }

    let (_, entry_family) = classify_unit(&entry.unit);
    let (_, item_family) = classify_unit(&item.unit);

    entry_family == item_family && entry_family != UnitFamily::Other
}

/// Aggregate parsed ingredients into a consolidated shopping list.
///
/// Entries are keyed by (lowercased display name, unit family). The first
/// occurrence of a key sets the display unit; later compatible occurrences
/// are converted through the family's base unit and summed into it. When
/// conversion data is missing for either unit, quantities are added naively
/// rather than dropping the entry. Output preserves the insertion order of
/// first occurrences.
///
/// Note the key uses the display name, not `name_for_category`: "chopped
/// onion" and "onion" categorize identically but stay separate line items.
pub fn aggregate_ingredients(items: &[ParsedIngredient]) -> Vec<AggregatedIngredient> {
    let mut result: Vec<AggregatedIngredient> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let (_, family) = classify_unit(&item.unit);
        let key = format!("{}_{}", item.name.to_lowercase(), family);

        let Some(&position) = index.get(&key) else {
            index.insert(key, result.len());
            result.push(AggregatedIngredient::from_parsed(item));
            continue;
        };

        if !can_aggregate(&result[position], item) {
            // Same key but not mergeable (both units in the Other family,
            // e.g. "2 large eggs" vs "3 small eggs"): keep a separate line
            // item instead of losing the entry.
            tracing::debug!(
                name = %item.name,
                unit = %item.unit,
                entry_unit = %result[position].unit,
                "incompatible units for aggregation key, keeping separate entry"
            );
            result.push(AggregatedIngredient::from_parsed(item));
            continue;
        }

        let entry = &mut result[position];
        match (
            conversion_factor(&item.unit),
            conversion_factor(&entry.unit),
        ) {
            (Some(item_factor), Some(entry_factor)) => {
                // Sum in the base unit, then express the total in the
                // first-seen unit for this key.
                let total_base = item.quantity * item_factor + entry.quantity * entry_factor;
                entry.quantity = total_base / entry_factor;
            }
            _ => {
                tracing::debug!(
                    name = %item.name,
                    unit = %item.unit,
                    entry_unit = %entry.unit,
                    "no conversion data, adding quantities naively"
                );
                entry.quantity += item.quantity;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_ingredient;

    fn parsed(line: &str) -> ParsedIngredient {
        parse_ingredient(line).unwrap()
    }

    #[test]
    fn test_aggregate_same_unit() {
        let items = vec![parsed("1 cup flour"), parsed("1/2 cup flour")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "flour");
        assert_eq!(result[0].unit, "cup");
        assert!((result[0].quantity - 1.5).abs() < 1e-9);
        assert_eq!(result[0].category, Category::GrainsPasta);
    }

    #[test]
    fn test_aggregate_converts_through_base_unit() {
        // 2 tbsp = 1/8 cup, so the merged total is 1.125 cups
        let items = vec![parsed("1 cup butter"), parsed("2 tbsp butter")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].unit, "cup");
        assert!((result[0].quantity - 1.125).abs() < 1e-9);
    }

    #[test]
    fn test_first_seen_unit_sets_display_convention() {
        let items = vec![parsed("2 tbsp butter"), parsed("1 cup butter")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].unit, "tbsp");
        assert!((result[0].quantity - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_synonym_units() {
        // 16 tbsp = 1 cup, "c" is a cup abbreviation
        let items = vec![parsed("1 c flour"), parsed("16 tbsp flour")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].unit, "c");
        assert!((result[0].quantity - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_incompatible_families_stay_separate() {
        let items = vec![parsed("2 cups milk"), parsed("2 lb milk")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].unit, "cups");
        assert_eq!(result[1].unit, "lb");
    }

    #[test]
    fn test_unitless_entries_add_naively() {
        let items = vec![parsed("2 eggs"), parsed("3 eggs")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, 5.0);
        assert_eq!(result[0].unit, "");
    }

    #[test]
    fn test_case_insensitive_name_merge() {
        let items = vec![parsed("1 cup Flour"), parsed("1 cup flour")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, 2.0);
    }

    #[test]
    fn test_descriptor_names_do_not_merge() {
        // the key is the display name, so "chopped onion" and "onion" stay
        // separate even though they categorize identically
        let items = vec![parsed("1 chopped onion"), parsed("1 onion")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].category, Category::Vegetables);
        assert_eq!(result[1].category, Category::Vegetables);
    }

    #[test]
    fn test_size_descriptor_units_stay_separate() {
        // both classify as Other, so they are not mergeable; neither entry
        // is dropped
        let items = vec![parsed("2 large eggs"), parsed("3 small eggs")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_output_preserves_insertion_order() {
        let items = vec![
            parsed("1 cup flour"),
            parsed("2 eggs"),
            parsed("1 cup sugar"),
            parsed("1/2 cup flour"),
        ];
        let result = aggregate_ingredients(&items);

        let names: Vec<&str> = result.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "eggs", "sugar"]);
    }

    #[test]
    fn test_category_uses_canonical_name() {
        let items = vec![parsed("1 tbsp olive oil")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result[0].category, Category::Pantry);
    }

    #[test]
    fn test_formatted_quantity() {
        let items = vec![parsed("1 cup flour"), parsed("1/2 cup flour")];
        let result = aggregate_ingredients(&items);

        assert_eq!(result[0].formatted_quantity(), "1 1/2");
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate_ingredients(&[]).is_empty());
    }
}
