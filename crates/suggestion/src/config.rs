use serde::Deserialize;

use crate::SuggestionError;

/// Tuning knobs for [`crate::CombinationGenerator`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorConfig {
    /// Smallest number of ingredients in a combination (default: 2)
    #[serde(default = "default_min_size")]
    pub min_size: usize,
    /// Largest number of ingredients in a combination (default: 4)
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// Number of candidates returned per call (default: 5)
    #[serde(default = "default_candidate_count")]
    pub candidate_count: usize,
    /// Days a logged combination stays "seen recently" (default: 30)
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    /// Sampling attempts allowed per drawn combination (default: 50)
    #[serde(default = "default_attempts_per_candidate")]
    pub attempts_per_candidate: usize,
    /// Pools with at most this many valid-size subsets are enumerated instead of sampled (default: 500)
    #[serde(default = "default_enumeration_limit")]
    pub enumeration_limit: usize,
    /// Combinations drawn per returned candidate, so scoring has something to rank (default: 3)
    #[serde(default = "default_oversample")]
    pub oversample: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
            max_size: default_max_size(),
            candidate_count: default_candidate_count(),
            lookback_days: default_lookback_days(),
            attempts_per_candidate: default_attempts_per_candidate(),
            enumeration_limit: default_enumeration_limit(),
            oversample: default_oversample(),
        }
    }
}

fn default_min_size() -> usize {
    2
}

fn default_max_size() -> usize {
    4
}

fn default_candidate_count() -> usize {
    5
}

fn default_lookback_days() -> u32 {
    30
}

fn default_attempts_per_candidate() -> usize {
    50
}

fn default_enumeration_limit() -> usize {
    500
}

fn default_oversample() -> usize {
    3
}

impl GeneratorConfig {
    pub fn with_candidate_count(mut self, candidate_count: usize) -> Self {
        self.candidate_count = candidate_count;
        self
    }

    pub fn with_sizes(mut self, min_size: usize, max_size: usize) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn validate(&self) -> Result<(), SuggestionError> {
        if self.min_size == 0 {
            return Err(SuggestionError::InvalidConfig(
                "min_size must be at least 1".to_string(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(SuggestionError::InvalidConfig(format!(
                "min_size ({}) must not exceed max_size ({})",
                self.min_size, self.max_size
            )));
        }
        if self.candidate_count == 0 {
            return Err(SuggestionError::InvalidConfig(
                "candidate_count must be at least 1".to_string(),
            ));
        }
        if self.attempts_per_candidate == 0 {
            return Err(SuggestionError::InvalidConfig(
                "attempts_per_candidate must be at least 1".to_string(),
            ));
        }
        if self.oversample == 0 {
            return Err(SuggestionError::InvalidConfig(
                "oversample must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of combinations drawn before scoring and truncation
    pub(crate) fn draw_target(&self) -> usize {
        self.candidate_count.saturating_mul(self.oversample)
    }
}
