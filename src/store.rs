use async_trait::async_trait;
use mealmix_shared::{
    Category, Error, Ingredient, MealLogEntry, MealType, NewMealLog, PairingRule, Result,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime};
use tokio::sync::RwLock;
use uuid::Uuid;

#[async_trait]
pub trait IngredientStore: Send + Sync {
    /// Active ingredients for a meal type, optionally limited to one category
    async fn active_ingredients(
        &self,
        meal_type: MealType,
        category_id: Option<&str>,
    ) -> Result<Vec<Ingredient>>;

    async fn all_ingredients(&self) -> Result<Vec<Ingredient>>;

    async fn categories(&self) -> Result<Vec<Category>>;
}

#[async_trait]
pub trait PairingRuleStore: Send + Sync {
    async fn pairing_rules(&self) -> Result<Vec<PairingRule>>;
}

#[async_trait]
pub trait MealLogStore: Send + Sync {
    /// Entries dated within `from..=to`
    async fn history_between(&self, from: Date, to: Date) -> Result<Vec<MealLogEntry>>;

    async fn log(&self, request: NewMealLog) -> Result<MealLogEntry>;

    async fn toggle_favorite(&self, id: &str) -> Result<MealLogEntry>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// Everything the app persists, as one JSON document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub pairing_rules: Vec<PairingRule>,
    #[serde(default)]
    pub meal_logs: Vec<MealLogEntry>,
}

impl Dataset {
    /// Reject duplicate ingredient ids and rules on unknown ingredients
    pub fn validate(&self) -> Result<()> {
        let mut ids: HashSet<&str> = HashSet::new();
        for ingredient in &self.ingredients {
            if !ids.insert(ingredient.id.as_str()) {
                mealmix_shared::invalid!("duplicate ingredient id {}", ingredient.id);
            }
        }

        for rule in &self.pairing_rules {
            if rule.is_self_pair() {
                mealmix_shared::invalid!(
                    "pairing rule pairs ingredient {} with itself",
                    rule.ingredient_a_id
                );
            }
            for id in [&rule.ingredient_a_id, &rule.ingredient_b_id] {
                if !ids.contains(id.as_str()) {
                    mealmix_shared::invalid!("pairing rule references unknown ingredient {}", id);
                }
            }
        }

        Ok(())
    }
}

/// Store backed by a single JSON file
///
/// The whole dataset is kept in memory and written back after every change.
/// Without a path nothing is written, which is what tests use.
pub struct JsonStore {
    path: Option<PathBuf>,
    data: RwLock<Dataset>,
}

impl JsonStore {
    pub fn in_memory(dataset: Dataset) -> Self {
        Self {
            path: None,
            data: RwLock::new(dataset),
        }
    }

    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(format!("dataset {}", path.display())));
            }
            Err(e) => return Err(e.into()),
        };

        let dataset: Dataset = serde_json::from_str(&content)?;
        dataset.validate()?;

        tracing::debug!(
            ingredients = dataset.ingredients.len(),
            rules = dataset.pairing_rules.len(),
            meal_logs = dataset.meal_logs.len(),
            "dataset loaded"
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            data: RwLock::new(dataset),
        })
    }

    /// Write a new dataset file; refuses to replace an existing one unless `force`
    pub async fn create(path: impl AsRef<Path>, dataset: Dataset, force: bool) -> Result<Self> {
        let path = path.as_ref();
        dataset.validate()?;

        if !force && tokio::fs::try_exists(path).await? {
            mealmix_shared::invalid!(
                "dataset {} already exists, use --force to overwrite",
                path.display()
            );
        }

        write_dataset(path, &dataset).await?;
        tracing::info!(path = %path.display(), "dataset created");

        Ok(Self {
            path: Some(path.to_path_buf()),
            data: RwLock::new(dataset),
        })
    }

    pub async fn snapshot(&self) -> Dataset {
        self.data.read().await.clone()
    }

    /// Write `next` and only then make it the in-memory state
    async fn commit(&self, data: &mut Dataset, next: Dataset) -> Result<()> {
        if let Some(path) = &self.path {
            write_dataset(path, &next).await?;
        }

        *data = next;

        Ok(())
    }
}

/// Write through a sibling temp file renamed over the target
async fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let content = serde_json::to_string_pretty(dataset)?;
    tokio::fs::write(&tmp, content).await?;

    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
            tracing::warn!(path = %tmp.display(), error = %cleanup, "failed to remove temp file");
        }
        return Err(e.into());
    }

    Ok(())
}

#[async_trait]
impl IngredientStore for JsonStore {
    async fn active_ingredients(
        &self,
        meal_type: MealType,
        category_id: Option<&str>,
    ) -> Result<Vec<Ingredient>> {
        let data = self.data.read().await;

        Ok(data
            .ingredients
            .iter()
            .filter(|i| i.is_available_for(meal_type))
            .filter(|i| category_id.is_none_or(|c| i.category_id == c))
            .cloned()
            .collect())
    }

    async fn all_ingredients(&self) -> Result<Vec<Ingredient>> {
        Ok(self.data.read().await.ingredients.clone())
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.data.read().await.categories.clone())
    }
}

#[async_trait]
impl PairingRuleStore for JsonStore {
    async fn pairing_rules(&self) -> Result<Vec<PairingRule>> {
        Ok(self.data.read().await.pairing_rules.clone())
    }
}

#[async_trait]
impl MealLogStore for JsonStore {
    async fn history_between(&self, from: Date, to: Date) -> Result<Vec<MealLogEntry>> {
        let data = self.data.read().await;

        Ok(data
            .meal_logs
            .iter()
            .filter(|entry| entry.date >= from && entry.date <= to)
            .cloned()
            .collect())
    }

    #[tracing::instrument(skip_all, fields(meal_type = %request.meal_type, date = %request.date))]
    async fn log(&self, request: NewMealLog) -> Result<MealLogEntry> {
        request.validate()?;

        let mut data = self.data.write().await;

        if let Some(unknown) = request
            .ingredient_ids
            .iter()
            .find(|id| !data.ingredients.iter().any(|i| &i.id == *id))
        {
            mealmix_shared::invalid!("unknown ingredient {}", unknown);
        }

        let created_at = OffsetDateTime::now_utc().unix_timestamp().max(0) as u64;
        let entry = request.into_entry(Uuid::new_v4().to_string(), created_at);

        let mut next = data.clone();
        next.meal_logs.push(entry.clone());
        self.commit(&mut data, next).await?;

        tracing::info!(id = %entry.id, "meal logged");

        Ok(entry)
    }

    async fn toggle_favorite(&self, id: &str) -> Result<MealLogEntry> {
        let mut data = self.data.write().await;
        let mut next = data.clone();

        let Some(entry) = next.meal_logs.iter_mut().find(|entry| entry.id == id) else {
            return Err(Error::NotFound(format!("meal log {id}")));
        };

        entry.toggle_favorite();
        let entry = entry.clone();
        self.commit(&mut data, next).await?;

        Ok(entry)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut data = self.data.write().await;
        let mut next = data.clone();

        next.meal_logs.retain(|entry| entry.id != id);

        if next.meal_logs.len() == data.meal_logs.len() {
            return Err(Error::NotFound(format!("meal log {id}")));
        }

        self.commit(&mut data, next).await
    }
}
