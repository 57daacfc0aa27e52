use mealmix::config::Config;
use mealmix::service::describe;
use mealmix_shared::{MealType, parse_month, today};

#[tracing::instrument(skip(config))]
pub async fn variety(
    config: Config,
    month: Option<String>,
    meal_type: Option<MealType>,
) -> anyhow::Result<()> {
    let service = super::open_service(&config).await?;

    let (year, month) = match month.as_deref() {
        Some(month) => parse_month(month)?,
        None => {
            let today = today(&config.locale.timezone);
            (today.year(), today.month())
        }
    };

    let report = service.variety(year, month, meal_type).await?;
    let scope = meal_type.map(|m| format!(" ({m})")).unwrap_or_default();

    let Some(score) = report.score else {
        println!("No meals logged in {month} {year}{scope} yet. Log a meal to start tracking variety.");
        return Ok(());
    };

    println!("Variety for {month} {year}{scope}: {score}/100");
    println!("  Meals logged:         {}", report.total_meals);
    println!("  Unique combinations:  {}", report.unique_combinations);
    println!("  Repeated meals:       {}", report.repeated_meals());
    println!("  Distinct ingredients: {}", report.distinct_ingredients);
    println!("  Favorites:            {}", report.favorites);

    if let Some((combination, count)) = &report.most_frequent
        && *count > 1
    {
        let names = service.ingredient_names().await?;
        println!(
            "  Most repeated:        {} ({count} times)",
            describe(combination, &names)
        );
    }

    Ok(())
}
