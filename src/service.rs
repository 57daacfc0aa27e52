use mealmix_shared::{
    Ingredient, MealLogEntry, MealType, NewMealLog, Result, days_before, month_bounds,
};
use mealmix_suggestion::{
    Candidate, Combination, CombinationGenerator, GenerateInput, GeneratorConfig, Suggestions,
    VarietyReport, favorite_combinations,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use time::{Date, Month};

use crate::store::{IngredientStore, MealLogStore, PairingRuleStore};

/// Suggestion use cases over injected stores
///
/// Stores are resolved first; the generator then runs synchronously on the
/// fetched snapshot.
pub struct SuggestionService<S> {
    store: S,
    config: GeneratorConfig,
}

impl<S> SuggestionService<S>
where
    S: IngredientStore + PairingRuleStore + MealLogStore,
{
    pub fn new(store: S, config: GeneratorConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate candidates for a meal type
    ///
    /// `count` overrides the configured candidate count; `seed` makes the draw
    /// reproducible.
    #[tracing::instrument(skip(self))]
    pub async fn suggest(
        &self,
        meal_type: MealType,
        category_id: Option<&str>,
        today: Date,
        count: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Suggestions> {
        let mut config = self.config.clone();
        if let Some(count) = count {
            config = config.with_candidate_count(count);
        }
        let generator = CombinationGenerator::new(config)?;

        let ingredients = self
            .store
            .active_ingredients(meal_type, category_id)
            .await?;
        let pairing_rules = self.store.pairing_rules().await?;
        // Future-dated logs count as seen today
        let history = self
            .store
            .history_between(
                days_before(today, generator.config().lookback_days),
                Date::MAX,
            )
            .await?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let suggestions = generator.generate(
            &GenerateInput {
                meal_type,
                ingredients: &ingredients,
                pairing_rules: &pairing_rules,
                history: &history,
                today,
            },
            &mut rng,
        )?;

        if suggestions.is_partial() {
            tracing::info!(
                found = suggestions.candidates.len(),
                requested = suggestions.requested,
                "fewer combinations available than requested"
            );
        }

        Ok(suggestions)
    }

    /// Log the picked candidate
    pub async fn select(
        &self,
        candidate: &Candidate,
        meal_type: MealType,
        date: Date,
    ) -> Result<MealLogEntry> {
        self.store
            .log(candidate.to_log_request(meal_type, date))
            .await
    }

    /// Log a meal the user composed themselves
    pub async fn log_custom(&self, request: NewMealLog) -> Result<MealLogEntry> {
        self.store.log(request).await
    }

    pub async fn toggle_favorite(&self, id: &str) -> Result<MealLogEntry> {
        self.store.toggle_favorite(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn variety(
        &self,
        year: i32,
        month: Month,
        meal_type: Option<MealType>,
    ) -> Result<VarietyReport> {
        let (first, last) = month_bounds(year, month)?;
        let history = self.store.history_between(first, last).await?;

        Ok(VarietyReport::for_month(&history, year, month, meal_type))
    }

    pub async fn favorites(&self) -> Result<Vec<(Combination, Date)>> {
        let history = self.store.history_between(Date::MIN, Date::MAX).await?;
        Ok(favorite_combinations(&history))
    }

    /// Ingredient names keyed by id, for rendering
    pub async fn ingredient_names(&self) -> Result<HashMap<String, String>> {
        Ok(self
            .store
            .all_ingredients()
            .await?
            .into_iter()
            .map(|Ingredient { id, name, .. }| (id, name))
            .collect())
    }
}

/// Human readable form of a combination, falling back to ids for unknown ingredients
pub fn describe(combination: &Combination, names: &HashMap<String, String>) -> String {
    combination
        .ids()
        .iter()
        .map(|id| names.get(id).map(String::as_str).unwrap_or(id.as_str()))
        .collect::<Vec<_>>()
        .join(" + ")
}
