use mealmix::config::Config;
use mealmix::store::IngredientStore;
use mealmix_shared::MealType;

/// List ingredients grouped by category
pub async fn ingredients(config: Config, meal_type: Option<MealType>) -> anyhow::Result<()> {
    let service = super::open_service(&config).await?;
    let store = service.store();

    let categories = store.categories().await?;
    let ingredients: Vec<_> = store
        .all_ingredients()
        .await?
        .into_iter()
        .filter(|i| meal_type.is_none_or(|m| i.meal_types.contains(&m)))
        .collect();

    for category in &categories {
        let members: Vec<_> = ingredients
            .iter()
            .filter(|i| i.category_id == category.id)
            .collect();
        if members.is_empty() {
            continue;
        }

        println!("{}", category.name);
        for ingredient in members {
            let meal_types: Vec<&str> = ingredient.meal_types.iter().map(|m| m.as_ref()).collect();
            let status = if ingredient.is_active { "" } else { " (inactive)" };
            println!(
                "  {:<16} {:<20} {}{status}",
                ingredient.id,
                ingredient.name,
                meal_types.join(", ")
            );
        }
    }

    let uncategorized: Vec<_> = ingredients
        .iter()
        .filter(|i| !categories.iter().any(|c| c.id == i.category_id))
        .collect();
    if !uncategorized.is_empty() {
        println!("Other");
        for ingredient in uncategorized {
            println!("  {:<16} {}", ingredient.id, ingredient.name);
        }
    }

    Ok(())
}
