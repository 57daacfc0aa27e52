use mealmix_shared::{MealLogEntry, MealType};
use std::collections::{BTreeMap, HashMap, HashSet};
use time::{Date, Month};

use crate::Combination;

/// Monthly summary of how repetitive the logged meals were
#[derive(Debug, Clone, PartialEq)]
pub struct VarietyReport {
    pub year: i32,
    pub month: Month,
    pub meal_type: Option<MealType>,
    pub total_meals: usize,
    pub unique_combinations: usize,
    pub distinct_ingredients: usize,
    pub favorites: usize,
    /// Most logged combination and its count; ties go to the smallest combination
    pub most_frequent: Option<(Combination, usize)>,
    /// `None` when nothing was logged, see [`variety_score`]
    pub score: Option<u8>,
}

impl VarietyReport {
    pub fn for_month(
        history: &[MealLogEntry],
        year: i32,
        month: Month,
        meal_type: Option<MealType>,
    ) -> Self {
        let entries: Vec<&MealLogEntry> = history
            .iter()
            .filter(|entry| entry.date.year() == year && entry.date.month() == month)
            .filter(|entry| meal_type.is_none_or(|meal_type| entry.meal_type == meal_type))
            .collect();

        let mut counts: BTreeMap<Combination, usize> = BTreeMap::new();
        let mut ingredients: HashSet<&str> = HashSet::new();

        for entry in &entries {
            *counts.entry(Combination::from(*entry)).or_insert(0) += 1;
            ingredients.extend(entry.ingredient_ids.iter().map(String::as_str));
        }

        let mut most_frequent: Option<(&Combination, usize)> = None;
        for (combination, &count) in &counts {
            if most_frequent.is_none_or(|(_, best)| count > best) {
                most_frequent = Some((combination, count));
            }
        }

        let total_meals = entries.len();
        let unique_combinations = counts.len();

        VarietyReport {
            year,
            month,
            meal_type,
            total_meals,
            unique_combinations,
            distinct_ingredients: ingredients.len(),
            favorites: entries.iter().filter(|entry| entry.is_favorite).count(),
            most_frequent: most_frequent.map(|(c, n)| (c.clone(), n)),
            score: variety_score(unique_combinations, total_meals),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_meals == 0
    }

    pub fn repeated_meals(&self) -> usize {
        self.total_meals - self.unique_combinations
    }
}

/// Variety score in `0..=100`
///
/// `floor(100 × unique / total)`: all-distinct meals score 100, any repeat
/// scores strictly less for the same number of meals. Returns `None` when no
/// meal was logged, which is an empty state rather than poor variety.
pub fn variety_score(unique_combinations: usize, total_meals: usize) -> Option<u8> {
    if total_meals == 0 {
        return None;
    }

    let unique = unique_combinations.min(total_meals);
    Some((unique * 100 / total_meals) as u8)
}

/// Distinct favorite combinations, most recently logged first
pub fn favorite_combinations(history: &[MealLogEntry]) -> Vec<(Combination, Date)> {
    let mut latest: HashMap<Combination, Date> = HashMap::new();

    for entry in history.iter().filter(|entry| entry.is_favorite) {
        latest
            .entry(Combination::from(entry))
            .and_modify(|date| *date = (*date).max(entry.date))
            .or_insert(entry.date);
    }

    let mut favorites: Vec<(Combination, Date)> = latest.into_iter().collect();
    favorites.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    favorites
}
