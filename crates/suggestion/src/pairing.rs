use mealmix_shared::{Ingredient, PairingRule, RuleType};
use std::collections::HashMap;

/// Pairing rules resolved against an ingredient pool
///
/// Rules are stored as two symmetric adjacency matrices over pool positions, so
/// checking a subset never allocates. Rules that reference ingredients outside
/// the pool are ignored. When a pair carries both a positive and a negative
/// rule, the negative one wins.
#[derive(Debug, Clone)]
pub struct PairingIndex {
    size: usize,
    negative: Vec<bool>,
    positive: Vec<bool>,
}

impl PairingIndex {
    pub fn build(pool: &[&Ingredient], rules: &[PairingRule]) -> Self {
        let size = pool.len();
        let positions: HashMap<&str, usize> = pool
            .iter()
            .enumerate()
            .map(|(i, ingredient)| (ingredient.id.as_str(), i))
            .collect();

        let mut index = PairingIndex {
            size,
            negative: vec![false; size * size],
            positive: vec![false; size * size],
        };

        for rule in rules {
            let (Some(&a), Some(&b)) = (
                positions.get(rule.ingredient_a_id.as_str()),
                positions.get(rule.ingredient_b_id.as_str()),
            ) else {
                continue;
            };

            if a == b {
                continue;
            }

            let matrix = match rule.rule_type {
                RuleType::Negative => &mut index.negative,
                RuleType::Positive => &mut index.positive,
            };
            matrix[a * size + b] = true;
            matrix[b * size + a] = true;
        }

        for (positive, negative) in index.positive.iter_mut().zip(&index.negative) {
            if *negative {
                *positive = false;
            }
        }

        index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_forbidden(&self, a: usize, b: usize) -> bool {
        self.negative[a * self.size + b]
    }

    pub fn is_preferred(&self, a: usize, b: usize) -> bool {
        self.positive[a * self.size + b]
    }

    /// True when any pair of the subset is forbidden
    pub fn violates(&self, subset: &[usize]) -> bool {
        subset.iter().enumerate().any(|(i, &a)| {
            subset[i + 1..]
                .iter()
                .any(|&b| self.is_forbidden(a, b))
        })
    }

    /// Number of preferred pairs fully contained in the subset
    pub fn positive_pairs(&self, subset: &[usize]) -> usize {
        subset
            .iter()
            .enumerate()
            .map(|(i, &a)| {
                subset[i + 1..]
                    .iter()
                    .filter(|&&b| self.is_preferred(a, b))
                    .count()
            })
            .sum()
    }

    pub fn negative_pair_count(&self) -> usize {
        self.negative.iter().filter(|v| **v).count() / 2
    }

    pub fn positive_pair_count(&self) -> usize {
        self.positive.iter().filter(|v| **v).count() / 2
    }
}
