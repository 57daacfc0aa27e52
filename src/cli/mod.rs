mod init;
mod journal;
mod pantry;
mod suggest;
mod variety;

pub use init::init;
pub use journal::{LogArgs, delete, favorite, favorites, log};
pub use pantry::ingredients;
pub use suggest::{SuggestArgs, suggest};
pub use variety::variety;

use mealmix::config::Config;
use mealmix::service::SuggestionService;
use mealmix::store::JsonStore;
use mealmix_shared::Error;

async fn open_service(config: &Config) -> anyhow::Result<SuggestionService<JsonStore>> {
    let store = match JsonStore::open(&config.data.path).await {
        Ok(store) => store,
        Err(Error::NotFound(what)) => anyhow::bail!("{what} not found, run `mealmix init` first"),
        Err(e) => return Err(e.into()),
    };

    Ok(SuggestionService::new(store, config.generator.clone()))
}
