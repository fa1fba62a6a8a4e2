use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Shopping-list category for grocery store organization.
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
pub enum Category {
    Vegetables,
    Fruits,
    #[strum(serialize = "Meat & Seafood")]
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    #[strum(serialize = "Dairy & Eggs")]
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    #[strum(serialize = "Grains & Pasta")]
    #[serde(rename = "Grains & Pasta")]
    GrainsPasta,
    Pantry,
    #[strum(serialize = "Herbs & Spices")]
    #[serde(rename = "Herbs & Spices")]
    HerbsSpices,
    Baking,
    #[strum(serialize = "Nuts & Seeds")]
    #[serde(rename = "Nuts & Seeds")]
    NutsSeeds,
    #[default]
    Other,
}

/// Keyword lists checked in order; the first category with a matching
/// keyword wins. The order is a fixed tie-break: "flour" appears under both
/// Grains & Pasta and Baking, and Grains & Pasta wins because it is checked
/// first.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Vegetables,
        &[
            "tomato", "onion", "garlic", "pepper", "carrot", "celery", "lettuce", "spinach",
            "broccoli", "cauliflower", "cabbage", "zucchini", "cucumber", "potato",
            "sweet potato", "mushroom", "avocado", "bean", "pea", "corn", "kale", "arugula",
            "chard", "eggplant", "squash", "pumpkin", "radish", "beet", "turnip", "parsnip",
            "leek", "shallot",
        ],
    ),
    (
        Category::Fruits,
        &[
            "apple", "banana", "orange", "lemon", "lime", "strawberry", "blueberry",
            "raspberry", "grape", "mango", "pineapple", "watermelon", "melon", "peach",
            "pear", "plum", "cherry", "kiwi", "papaya", "coconut", "fig", "date", "apricot",
            "cranberry",
        ],
    ),
    (
        Category::MeatSeafood,
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "duck", "fish", "salmon", "tuna",
            "shrimp", "prawn", "crab", "lobster", "scallop", "mussel", "clam", "bacon",
            "sausage", "ham", "steak", "ground beef", "ground turkey", "ground pork",
        ],
    ),
    (
        Category::DairyEggs,
        &[
            "milk", "cream", "butter", "cheese", "yogurt", "sour cream", "egg", "mozzarella",
            "cheddar", "parmesan", "feta", "goat cheese", "ricotta", "cottage cheese",
            "cream cheese", "buttermilk", "heavy cream", "half and half", "whipping cream",
        ],
    ),
    (
        Category::GrainsPasta,
        &[
            "rice", "pasta", "noodle", "bread", "flour", "oat", "quinoa", "couscous",
            "barley", "bulgur", "wheat", "rye", "cornmeal", "tortilla", "pita", "bagel",
            "roll", "spaghetti", "fettuccine", "penne", "macaroni", "lasagna", "ravioli",
        ],
    ),
    (
        Category::Pantry,
        &[
            "oil", "olive oil", "vegetable oil", "coconut oil", "vinegar", "balsamic",
            "soy sauce", "worcestershire", "mustard", "ketchup", "mayonnaise", "honey",
            "sugar", "salt", "pepper", "stock", "broth", "tomato sauce", "tomato paste",
            "can", "canned",
        ],
    ),
    (
        Category::HerbsSpices,
        &[
            "basil", "oregano", "thyme", "rosemary", "parsley", "cilantro", "mint", "dill",
            "sage", "bay leaf", "cumin", "paprika", "chili", "cayenne", "turmeric",
            "cinnamon", "nutmeg", "ginger", "curry", "coriander", "cardamom", "clove",
            "vanilla",
        ],
    ),
    (
        Category::Baking,
        &[
            "flour", "sugar", "brown sugar", "powdered sugar", "baking powder",
            "baking soda", "yeast", "vanilla extract", "almond extract", "cocoa powder",
            "chocolate chip", "chocolate", "cornstarch", "gelatin", "molasses", "syrup",
        ],
    ),
    (
        Category::NutsSeeds,
        &[
            "almond", "walnut", "pecan", "cashew", "peanut", "pistachio", "hazelnut",
            "macadamia", "sunflower seed", "pumpkin seed", "sesame seed", "chia seed",
            "flax seed", "pine nut",
        ],
    ),
];

/// Categorize an ingredient by its canonicalized name.
///
/// Matching is a substring test against each category's keywords, in the
/// fixed category order. Ingredients matching nothing land in
/// [`Category::Other`].
pub fn categorize_ingredient(ingredient_name: &str) -> Category {
    let name = ingredient_name.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return *category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_vegetables() {
        assert_eq!(categorize_ingredient("tomato"), Category::Vegetables);
        assert_eq!(categorize_ingredient("red onion"), Category::Vegetables);
        assert_eq!(categorize_ingredient("garlic"), Category::Vegetables);
    }

    #[test]
    fn test_categorize_fruits() {
        assert_eq!(categorize_ingredient("apple"), Category::Fruits);
        assert_eq!(categorize_ingredient("lemon"), Category::Fruits);
    }

    #[test]
    fn test_categorize_meat_seafood() {
        assert_eq!(categorize_ingredient("chicken breast"), Category::MeatSeafood);
        assert_eq!(categorize_ingredient("salmon"), Category::MeatSeafood);
        assert_eq!(categorize_ingredient("bacon"), Category::MeatSeafood);
    }

    #[test]
    fn test_categorize_dairy_eggs() {
        assert_eq!(categorize_ingredient("milk"), Category::DairyEggs);
        assert_eq!(categorize_ingredient("eggs"), Category::DairyEggs);
        assert_eq!(categorize_ingredient("parmesan"), Category::DairyEggs);
    }

    #[test]
    fn test_categorize_pantry() {
        assert_eq!(categorize_ingredient("olive oil"), Category::Pantry);
        assert_eq!(categorize_ingredient("soy sauce"), Category::Pantry);
    }

    #[test]
    fn test_categorize_herbs_spices() {
        assert_eq!(categorize_ingredient("dried oregano"), Category::HerbsSpices);
        assert_eq!(categorize_ingredient("cumin"), Category::HerbsSpices);
    }

    #[test]
    fn test_categorize_nuts_seeds() {
        assert_eq!(categorize_ingredient("walnut"), Category::NutsSeeds);
        assert_eq!(categorize_ingredient("chia seed"), Category::NutsSeeds);
    }

    #[test]
    fn test_categorize_unknown() {
        assert_eq!(categorize_ingredient("mystery item"), Category::Other);
        assert_eq!(categorize_ingredient(""), Category::Other);
    }

    #[test]
    fn test_categorize_case_insensitive() {
        assert_eq!(categorize_ingredient("TOMATO"), Category::Vegetables);
        assert_eq!(categorize_ingredient("ChIcKeN"), Category::MeatSeafood);
    }

    #[test]
    fn test_category_order_breaks_ties() {
        // "flour" is listed under both Grains & Pasta and Baking;
        // Grains & Pasta is checked first
        assert_eq!(categorize_ingredient("flour"), Category::GrainsPasta);
        // "salt" is Pantry even though pepper-adjacent spices exist later
        assert_eq!(categorize_ingredient("salt"), Category::Pantry);
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::MeatSeafood.to_string(), "Meat & Seafood");
        assert_eq!(Category::GrainsPasta.to_string(), "Grains & Pasta");
        assert_eq!(Category::Other.to_string(), "Other");
    }
}
