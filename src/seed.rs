use mealmix_shared::{Category, Ingredient, MealType, PairingRule, RuleType};

use crate::store::Dataset;

const CATEGORIES: &[(&str, &str)] = &[
    ("dairy", "Dairy"),
    ("grains", "Grains & Cereals"),
    ("fruit", "Fruit"),
    ("spreads", "Spreads & Sweeteners"),
    ("nuts", "Nuts & Seeds"),
    ("drinks", "Drinks"),
];

const BOTH: &[MealType] = &[MealType::Breakfast, MealType::Snack];
const BREAKFAST: &[MealType] = &[MealType::Breakfast];
const SNACK: &[MealType] = &[MealType::Snack];

const INGREDIENTS: &[(&str, &str, &str, &[MealType])] = &[
    ("milk", "Milk", "dairy", BREAKFAST),
    ("yogurt", "Yogurt", "dairy", BOTH),
    ("cheese", "Cheese", "dairy", BOTH),
    ("cereals", "Cereals", "grains", BREAKFAST),
    ("oats", "Oats", "grains", BREAKFAST),
    ("bread", "Bread", "grains", BOTH),
    ("crackers", "Crackers", "grains", SNACK),
    ("orange", "Orange", "fruit", BOTH),
    ("banana", "Banana", "fruit", BOTH),
    ("apple", "Apple", "fruit", BOTH),
    ("berries", "Berries", "fruit", BOTH),
    ("honey", "Honey", "spreads", BREAKFAST),
    ("jam", "Jam", "spreads", BREAKFAST),
    ("peanut-butter", "Peanut butter", "spreads", BOTH),
    ("almonds", "Almonds", "nuts", BOTH),
    ("walnuts", "Walnuts", "nuts", SNACK),
    ("orange-juice", "Orange juice", "drinks", BREAKFAST),
    ("tea", "Tea", "drinks", BOTH),
];

const POSITIVE: &[(&str, &str)] = &[
    ("milk", "cereals"),
    ("yogurt", "honey"),
    ("yogurt", "berries"),
    ("oats", "berries"),
    ("oats", "banana"),
    ("bread", "jam"),
    ("bread", "cheese"),
    ("banana", "peanut-butter"),
    ("apple", "peanut-butter"),
    ("crackers", "cheese"),
    ("apple", "walnuts"),
];

const NEGATIVE: &[(&str, &str)] = &[
    ("milk", "orange"),
    ("milk", "orange-juice"),
    ("yogurt", "orange-juice"),
    ("cheese", "jam"),
    ("cheese", "honey"),
    ("orange", "orange-juice"),
    ("tea", "orange-juice"),
];

fn rules(
    pairs: &'static [(&'static str, &'static str)],
    rule_type: RuleType,
) -> impl Iterator<Item = PairingRule> {
    pairs.iter().map(move |(a, b)| PairingRule {
        ingredient_a_id: (*a).to_string(),
        ingredient_b_id: (*b).to_string(),
        rule_type,
    })
}

/// Pantry written by `mealmix init`
pub fn starter_dataset() -> Dataset {
    Dataset {
        categories: CATEGORIES
            .iter()
            .map(|(id, name)| Category {
                id: (*id).to_string(),
                name: (*name).to_string(),
            })
            .collect(),
        ingredients: INGREDIENTS
            .iter()
            .map(|(id, name, category, meal_types)| {
                Ingredient::new(*id, *name, *category, meal_types.iter().copied())
            })
            .collect(),
        pairing_rules: rules(POSITIVE, RuleType::Positive)
            .chain(rules(NEGATIVE, RuleType::Negative))
            .collect(),
        meal_logs: vec![],
    }
}
