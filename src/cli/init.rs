use mealmix::config::Config;
use mealmix::seed::starter_dataset;
use mealmix::store::JsonStore;

#[tracing::instrument(skip(config))]
pub async fn init(config: Config, force: bool) -> anyhow::Result<()> {
    let store = JsonStore::create(&config.data.path, starter_dataset(), force).await?;
    let dataset = store.snapshot().await;

    println!(
        "Created {} with {} ingredients and {} pairing rules",
        config.data.path,
        dataset.ingredients.len(),
        dataset.pairing_rules.len()
    );

    Ok(())
}
