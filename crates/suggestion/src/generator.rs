use mealmix_shared::{Ingredient, MealLogEntry, MealType, NewMealLog, PairingRule};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use std::collections::HashSet;
use time::Date;

use crate::history::recency_weight;
use crate::{Combination, Freshness, GeneratorConfig, HistoryIndex, PairingIndex, SuggestionError};

/// Everything a generation call reads; the caller resolves it from its stores
#[derive(Debug, Clone, Copy)]
pub struct GenerateInput<'a> {
    pub meal_type: MealType,
    pub ingredients: &'a [Ingredient],
    pub pairing_rules: &'a [PairingRule],
    pub history: &'a [MealLogEntry],
    pub today: Date,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub combination: Combination,
    pub score: f64,
    pub positive_pairs: usize,
    pub freshness: Freshness,
}

impl Candidate {
    /// Log request for the "select" action
    pub fn to_log_request(&self, meal_type: MealType, date: Date) -> NewMealLog {
        NewMealLog::new(meal_type, date, self.combination.ids().iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionMode {
    /// Every valid subset was listed, then drawn without replacement
    Enumerated,
    /// Subsets were drawn at random with rejection
    Sampled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions {
    pub meal_type: MealType,
    pub candidates: Vec<Candidate>,
    pub requested: usize,
    /// The pool ran out of valid combinations before `requested` were found
    pub exhausted: bool,
    pub mode: SelectionMode,
}

impl Suggestions {
    pub fn is_partial(&self) -> bool {
        self.candidates.len() < self.requested
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Suggests ingredient combinations for a meal type
///
/// Hard constraint: no candidate contains a pair with a negative rule.
/// Soft ranking: candidates with more positive pairs rank first, then those
/// built from ingredients that were not logged recently.
///
/// Score = positive pairs + mean recency weight of the ingredients (see
/// [`recency_weight`]). The recency part stays within `[0, 1]`, so one
/// positive pair always outranks any recency difference.
pub struct CombinationGenerator {
    config: GeneratorConfig,
}

impl CombinationGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, SuggestionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        input: &GenerateInput<'_>,
        rng: &mut R,
    ) -> Result<Suggestions, SuggestionError> {
        let pool = eligible_pool(input.ingredients, input.meal_type);

        if pool.len() < self.config.min_size {
            return Err(SuggestionError::InsufficientIngredients {
                meal_type: input.meal_type,
                minimum: self.config.min_size,
                current: pool.len(),
            });
        }

        let pairing = PairingIndex::build(&pool, input.pairing_rules);
        let history = HistoryIndex::build(input.history);

        let min_size = self.config.min_size;
        let max_size = self.config.max_size.min(pool.len());
        let target = self.config.draw_target();

        let subset_count = (min_size..=max_size)
            .map(|k| binomial(pool.len(), k))
            .fold(0usize, usize::saturating_add);

        let (mode, drawn) = if subset_count <= self.config.enumeration_limit {
            (
                SelectionMode::Enumerated,
                draw_enumerated(&pairing, min_size, max_size, target, rng),
            )
        } else {
            let budget = self.config.attempts_per_candidate.saturating_mul(target);
            (
                SelectionMode::Sampled,
                draw_sampled(&pairing, min_size, max_size, target, budget, rng),
            )
        };

        let mut candidates: Vec<Candidate> = drawn
            .iter()
            .map(|subset| {
                let combination =
                    Combination::new(subset.iter().map(|&i| pool[i].id.as_str()));
                let positive_pairs = pairing.positive_pairs(subset);
                let recency = subset
                    .iter()
                    .map(|&i| recency_weight(history.days_since_used(&pool[i].id, input.today)))
                    .sum::<f64>()
                    / subset.len() as f64;
                let freshness =
                    history.freshness(&combination, input.today, self.config.lookback_days);

                Candidate {
                    combination,
                    score: positive_pairs as f64 + recency,
                    positive_pairs,
                    freshness,
                }
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.combination.cmp(&b.combination))
        });
        candidates.dedup_by(|a, b| a.combination == b.combination);
        candidates.truncate(self.config.candidate_count);

        let exhausted = candidates.len() < self.config.candidate_count;

        tracing::debug!(
            meal_type = %input.meal_type,
            pool = pool.len(),
            subsets = subset_count,
            negative_pairs = pairing.negative_pair_count(),
            positive_pairs = pairing.positive_pair_count(),
            mode = ?mode,
            drawn = drawn.len(),
            found = candidates.len(),
            requested = self.config.candidate_count,
            exhausted,
            "generated suggestions"
        );

        Ok(Suggestions {
            meal_type: input.meal_type,
            candidates,
            requested: self.config.candidate_count,
            exhausted,
            mode,
        })
    }
}

/// Active ingredients for the meal type, one per id, ordered by id
fn eligible_pool(ingredients: &[Ingredient], meal_type: MealType) -> Vec<&Ingredient> {
    let mut pool: Vec<&Ingredient> = ingredients
        .iter()
        .filter(|ingredient| ingredient.is_available_for(meal_type))
        .collect();

    pool.sort_by(|a, b| a.id.cmp(&b.id));
    pool.dedup_by(|a, b| a.id == b.id);
    pool
}

/// List every valid subset, then draw uniformly over sizes, then within a size
fn draw_enumerated<R: Rng + ?Sized>(
    pairing: &PairingIndex,
    min_size: usize,
    max_size: usize,
    target: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut by_size: Vec<Vec<Vec<usize>>> = (min_size..=max_size)
        .map(|k| {
            k_subsets(pairing.size(), k)
                .into_iter()
                .filter(|subset| !pairing.violates(subset))
                .collect()
        })
        .collect();

    let mut drawn = Vec::new();

    while drawn.len() < target {
        let sizes: Vec<usize> = by_size
            .iter()
            .enumerate()
            .filter(|(_, subsets)| !subsets.is_empty())
            .map(|(slot, _)| slot)
            .collect();

        let Some(&slot) = sizes.choose(rng) else {
            break;
        };

        let group = &mut by_size[slot];
        let pick = rng.random_range(0..group.len());
        drawn.push(group.swap_remove(pick));
    }

    drawn
}

/// Rejection sampling bounded by an attempt budget
fn draw_sampled<R: Rng + ?Sized>(
    pairing: &PairingIndex,
    min_size: usize,
    max_size: usize,
    target: usize,
    budget: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut drawn = Vec::new();
    let mut attempts = 0;

    while drawn.len() < target && attempts < budget {
        attempts += 1;

        let size = rng.random_range(min_size..=max_size);
        let mut subset = rand::seq::index::sample(rng, pairing.size(), size).into_vec();
        subset.sort_unstable();

        if pairing.violates(&subset) {
            continue;
        }

        if seen.insert(subset.clone()) {
            drawn.push(subset);
        }
    }

    tracing::trace!(attempts, budget, drawn = drawn.len(), "sampling finished");

    drawn
}

/// `C(n, k)`, saturating at `usize::MAX`
fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

/// All `k`-element subsets of `0..n` in lexicographic order
fn k_subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut subsets = Vec::new();
    if k == 0 || k > n {
        return subsets;
    }

    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        subsets.push(indices.clone());

        let Some(i) = (0..k).rev().find(|&i| indices[i] < i + n - k) else {
            break;
        };

        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }

    subsets
}
