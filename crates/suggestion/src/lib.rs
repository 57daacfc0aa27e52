pub mod combination;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod pairing;
pub mod variety;

pub use combination::Combination;
pub use config::GeneratorConfig;
pub use error::SuggestionError;
pub use generator::{
    Candidate, CombinationGenerator, GenerateInput, SelectionMode, Suggestions,
};
pub use history::{Freshness, HistoryIndex};
pub use pairing::PairingIndex;
pub use variety::{VarietyReport, favorite_combinations, variety_score};
