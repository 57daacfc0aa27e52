use mealmix_shared::{MealLogEntry, days_between};
use serde::Serialize;
use std::collections::HashMap;
use strum::{AsRefStr, Display};
use time::Date;

use crate::Combination;

/// How recently the exact combination of a candidate was logged
#[derive(Serialize, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Freshness {
    New,
    SeenRecently,
    SeenToday,
}

impl Freshness {
    /// Short label shown next to a candidate
    pub fn badge(&self) -> &'static str {
        match self {
            Freshness::New => "New!",
            Freshness::SeenRecently => "Recently",
            Freshness::SeenToday => "Today",
        }
    }
}

/// Last-use lookups over a snapshot of logged meals
#[derive(Debug, Clone, Default)]
pub struct HistoryIndex {
    ingredient_last_used: HashMap<String, Date>,
    combination_last_logged: HashMap<Combination, Date>,
}

impl HistoryIndex {
    pub fn build(history: &[MealLogEntry]) -> Self {
        let mut index = HistoryIndex::default();

        for entry in history {
            for id in &entry.ingredient_ids {
                index
                    .ingredient_last_used
                    .entry(id.to_owned())
                    .and_modify(|date| *date = (*date).max(entry.date))
                    .or_insert(entry.date);
            }

            index
                .combination_last_logged
                .entry(Combination::from(entry))
                .and_modify(|date| *date = (*date).max(entry.date))
                .or_insert(entry.date);
        }

        index
    }

    /// Days since the ingredient was last logged, clamped at zero
    pub fn days_since_used(&self, ingredient_id: &str, today: Date) -> Option<i64> {
        self.ingredient_last_used
            .get(ingredient_id)
            .map(|date| days_between(*date, today).max(0))
    }

    pub fn last_logged(&self, combination: &Combination) -> Option<Date> {
        self.combination_last_logged.get(combination).copied()
    }

    /// Classify a combination against its most recent log
    ///
    /// A log dated later than `today` counts as today.
    pub fn freshness(&self, combination: &Combination, today: Date, lookback_days: u32) -> Freshness {
        let Some(date) = self.last_logged(combination) else {
            return Freshness::New;
        };

        let days = days_between(date, today);
        if days <= 0 {
            Freshness::SeenToday
        } else if days <= lookback_days as i64 {
            Freshness::SeenRecently
        } else {
            Freshness::New
        }
    }
}

/// Recency weight of a single ingredient, in `[0, 1]`
///
/// Never-logged ingredients weigh 1.0; an ingredient logged `d` days ago
/// weighs `d / (1 + d)`, so today's ingredients weigh 0 and older ones
/// approach 1.
pub fn recency_weight(days_since_used: Option<i64>) -> f64 {
    match days_since_used {
        None => 1.0,
        Some(days) => {
            let days = days.max(0) as f64;
            days / (1.0 + days)
        }
    }
}
