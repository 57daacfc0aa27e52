use serde::{Deserialize, Serialize};
use time::Date;

use crate::{MealType, Result};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealComponent {
    pub ingredient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_method_id: Option<String>,
}

/// A meal the user logged
///
/// Only `is_favorite` changes after creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealLogEntry {
    pub id: String,
    pub date: Date,
    pub meal_type: MealType,
    pub ingredient_ids: Vec<String>,
    /// Unix timestamp in seconds
    pub created_at: u64,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<MealComponent>,
}

impl MealLogEntry {
    /// Flip the favorite flag and return the new value
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }
}

/// Request to log a meal, either a picked suggestion or a custom meal
#[derive(Clone, Debug, PartialEq)]
pub struct NewMealLog {
    pub date: Date,
    pub meal_type: MealType,
    pub ingredient_ids: Vec<String>,
    pub name: Option<String>,
    pub components: Vec<MealComponent>,
}

impl NewMealLog {
    pub fn new<I, S>(meal_type: MealType, date: Date, ingredient_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids: Vec<String> = Vec::new();
        for id in ingredient_ids {
            let id = id.into();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        Self {
            date,
            meal_type,
            ingredient_ids: ids,
            name: None,
            components: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
        self
    }

    pub fn with_components(mut self, components: Vec<MealComponent>) -> Self {
        self.components = components;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.ingredient_ids.is_empty() {
            crate::invalid!("a meal needs at least one ingredient");
        }

        if let Some(component) = self
            .components
            .iter()
            .find(|c| !self.ingredient_ids.contains(&c.ingredient_id))
        {
            crate::invalid!(
                "component {} is not one of the meal ingredients",
                component.ingredient_id
            );
        }

        Ok(())
    }

    /// Turn the request into a stored entry; id and timestamp come from the store
    pub fn into_entry(self, id: impl Into<String>, created_at: u64) -> MealLogEntry {
        MealLogEntry {
            id: id.into(),
            date: self.date,
            meal_type: self.meal_type,
            ingredient_ids: self.ingredient_ids,
            created_at,
            is_favorite: false,
            name: self.name,
            components: self.components,
        }
    }
}
