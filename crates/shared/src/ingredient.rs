use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{Error, Result};

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum MealType {
    #[default]
    Breakfast,
    Snack,
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RuleType {
    /// The two ingredients go well together
    Positive,
    /// The two ingredients must never be suggested together
    Negative,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub meal_types: BTreeSet<MealType>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_user_added: bool,
}

fn default_is_active() -> bool {
    true
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
        meal_types: impl IntoIterator<Item = MealType>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            meal_types: meal_types.into_iter().collect(),
            is_active: true,
            is_user_added: false,
        }
    }

    /// Active and eligible for the given meal type
    pub fn is_available_for(&self, meal_type: MealType) -> bool {
        self.is_active && self.meal_types.contains(&meal_type)
    }
}

/// A preference or restriction between two ingredients
///
/// The pair is unordered: a rule on (A, B) also applies to (B, A).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PairingRule {
    pub ingredient_a_id: String,
    pub ingredient_b_id: String,
    pub rule_type: RuleType,
}

impl PairingRule {
    pub fn new(
        ingredient_a_id: impl Into<String>,
        ingredient_b_id: impl Into<String>,
        rule_type: RuleType,
    ) -> Result<Self> {
        let rule = Self {
            ingredient_a_id: ingredient_a_id.into(),
            ingredient_b_id: ingredient_b_id.into(),
            rule_type,
        };

        if rule.is_self_pair() {
            return Err(Error::Validate(format!(
                "pairing rule cannot pair ingredient {} with itself",
                rule.ingredient_a_id
            )));
        }

        Ok(rule)
    }

    pub fn positive(a: impl Into<String>, b: impl Into<String>) -> Result<Self> {
        Self::new(a, b, RuleType::Positive)
    }

    pub fn negative(a: impl Into<String>, b: impl Into<String>) -> Result<Self> {
        Self::new(a, b, RuleType::Negative)
    }

    pub fn is_self_pair(&self) -> bool {
        self.ingredient_a_id == self.ingredient_b_id
    }
}
