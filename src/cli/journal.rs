use mealmix::config::Config;
use mealmix::service::describe;
use mealmix_shared::{MealType, NewMealLog, parse_date, today};
use mealmix_suggestion::Combination;

pub struct LogArgs {
    pub meal_type: MealType,
    pub ingredients: Vec<String>,
    pub date: Option<String>,
    pub name: Option<String>,
}

#[tracing::instrument(skip_all, fields(meal_type = %args.meal_type))]
pub async fn log(config: Config, args: LogArgs) -> anyhow::Result<()> {
    let service = super::open_service(&config).await?;

    let date = match args.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => today(&config.locale.timezone),
    };

    let mut request = NewMealLog::new(args.meal_type, date, args.ingredients);
    if let Some(name) = args.name {
        request = request.with_name(name);
    }

    let entry = service.log_custom(request).await?;
    let names = service.ingredient_names().await?;

    println!(
        "Logged {} for {} ({})",
        describe(&Combination::from(&entry), &names),
        entry.date,
        entry.id
    );

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn favorite(config: Config, id: String) -> anyhow::Result<()> {
    let service = super::open_service(&config).await?;
    let entry = service.toggle_favorite(&id).await?;

    if entry.is_favorite {
        println!("Marked {id} as favorite");
    } else {
        println!("Removed {id} from favorites");
    }

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn delete(config: Config, id: String) -> anyhow::Result<()> {
    let service = super::open_service(&config).await?;
    service.delete(&id).await?;

    println!("Deleted {id}");

    Ok(())
}

pub async fn favorites(config: Config) -> anyhow::Result<()> {
    let service = super::open_service(&config).await?;
    let favorites = service.favorites().await?;

    if favorites.is_empty() {
        println!("No favorites yet. Use `mealmix favorite <id>` on a logged meal.");
        return Ok(());
    }

    let names = service.ingredient_names().await?;
    for (combination, last_logged) in favorites {
        println!("{last_logged}  {}", describe(&combination, &names));
    }

    Ok(())
}
