use mealmix_shared::MealLogEntry;
use serde::Serialize;
use std::fmt;

/// Canonical ingredient set: ids sorted and de-duplicated
///
/// Two combinations are equal exactly when they hold the same ingredients, in
/// whatever order they were logged. Ordering is lexicographic over the sorted
/// ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Combination(Vec<String>);

impl Combination {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        ids.sort();
        ids.dedup();
        Self(ids)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ingredient_id: &str) -> bool {
        self.0
            .binary_search_by(|id| id.as_str().cmp(ingredient_id))
            .is_ok()
    }
}

impl From<&MealLogEntry> for Combination {
    fn from(value: &MealLogEntry) -> Self {
        Combination::new(value.ingredient_ids.iter().map(String::as_str))
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("+"))
    }
}
