use mealmix::config::Config;
use mealmix::service::describe;
use mealmix_shared::{Error, MealType, today};

pub struct SuggestArgs {
    pub meal_type: MealType,
    pub category: Option<String>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub log: Option<usize>,
}

#[tracing::instrument(skip_all, fields(meal_type = %args.meal_type))]
pub async fn suggest(config: Config, args: SuggestArgs) -> anyhow::Result<()> {
    let service = super::open_service(&config).await?;
    let today = today(&config.locale.timezone);

    let suggestions = match service
        .suggest(
            args.meal_type,
            args.category.as_deref(),
            today,
            args.count,
            args.seed,
        )
        .await
    {
        Ok(suggestions) => suggestions,
        // Not enough ingredients, or a bad --count
        Err(Error::Validate(message)) => {
            eprintln!("{message}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if suggestions.is_empty() {
        println!("No valid {} combinations: every pairing is ruled out.", args.meal_type);
        return Ok(());
    }

    let names = service.ingredient_names().await?;

    println!("{} ideas for {today}:", args.meal_type);
    for (position, candidate) in suggestions.candidates.iter().enumerate() {
        println!(
            "{:>3}. {:<40} [{}]",
            position + 1,
            describe(&candidate.combination, &names),
            candidate.freshness.badge()
        );
    }

    if suggestions.is_partial() {
        println!(
            "Only {} of {} requested combinations are possible with the current ingredients.",
            suggestions.candidates.len(),
            suggestions.requested
        );
    }

    let Some(position) = args.log else {
        return Ok(());
    };

    let Some(candidate) = position
        .checked_sub(1)
        .and_then(|index| suggestions.candidates.get(index))
    else {
        anyhow::bail!(
            "--log expects a number between 1 and {}",
            suggestions.candidates.len()
        );
    };

    let entry = service.select(candidate, args.meal_type, today).await?;
    println!(
        "Logged {} for {} ({})",
        describe(&candidate.combination, &names),
        entry.date,
        entry.id
    );

    Ok(())
}
