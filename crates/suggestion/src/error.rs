use mealmix_shared::MealType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    #[error(
        "Not enough ingredients configured for {meal_type}: need at least {minimum}, but only have {current}"
    )]
    InsufficientIngredients {
        meal_type: MealType,
        minimum: usize,
        current: usize,
    },

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),
}

/// Both cases come from user data or user flags
impl From<SuggestionError> for mealmix_shared::Error {
    fn from(value: SuggestionError) -> Self {
        Self::Validate(value.to_string())
    }
}
