pub mod aggregation;
pub mod categorization;
pub mod grams;
pub mod parser;
pub mod quantity;
pub mod units;

// Re-export commonly used types
pub use aggregation::{aggregate_ingredients, AggregatedIngredient};
pub use categorization::{categorize_ingredient, Category};
pub use grams::{estimate_grams, extract_food_name, GramEstimator};
pub use parser::{parse_ingredient, ParsedIngredient};
pub use quantity::{format_quantity, parse_quantity, QuantityParseError};
pub use units::{classify_unit, conversion_factor, UnitFamily};
