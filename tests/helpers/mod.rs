use mealmix::seed::starter_dataset;
use mealmix::service::SuggestionService;
use mealmix::store::JsonStore;
use mealmix_suggestion::GeneratorConfig;
use std::path::Path;

pub async fn setup_test_service(
    path: impl AsRef<Path>,
) -> anyhow::Result<SuggestionService<JsonStore>> {
    let store = JsonStore::create(path, starter_dataset(), false).await?;

    Ok(SuggestionService::new(store, GeneratorConfig::default()))
}
