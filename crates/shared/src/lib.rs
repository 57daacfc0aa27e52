mod date;
mod error;
pub mod ingredient;
pub mod meal_log;

pub use date::*;
pub use error::*;
pub use ingredient::{Category, Ingredient, MealType, PairingRule, RuleType};
pub use meal_log::{MealComponent, MealLogEntry, NewMealLog};
