use anyhow::Result;
use clap::{Parser, Subcommand};
use mealmix_shared::MealType;

mod cli;

/// mealmix - Breakfast and snack ideas from your own pantry
#[derive(Parser)]
#[command(name = "mealmix")]
#[command(about = "Ingredient combination ideas that respect your pairing rules", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter dataset with a small pantry and sample pairing rules
    Init {
        /// Overwrite an existing dataset file
        #[arg(long)]
        force: bool,
    },
    /// Suggest ingredient combinations
    Suggest {
        #[arg(long, short)]
        meal_type: MealType,

        /// Only use ingredients from this category
        #[arg(long)]
        category: Option<String>,

        /// Number of candidates (overrides config file)
        #[arg(long, short)]
        count: Option<usize>,

        /// Seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,

        /// Log the N-th suggestion (1-based) for today
        #[arg(long, value_name = "N")]
        log: Option<usize>,
    },
    /// Log a meal
    Log {
        #[arg(long, short)]
        meal_type: MealType,

        /// Comma separated ingredient ids
        #[arg(long, short, value_delimiter = ',', required = true)]
        ingredients: Vec<String>,

        /// Date of the meal as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Optional name for the meal
        #[arg(long)]
        name: Option<String>,
    },
    /// Toggle the favorite flag of a logged meal
    Favorite { id: String },
    /// Delete a logged meal
    Delete { id: String },
    /// List favorite combinations
    Favorites,
    /// Show the monthly variety report
    Variety {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        #[arg(long, short)]
        meal_type: Option<MealType>,
    },
    /// List ingredients by category
    Ingredients {
        #[arg(long, short)]
        meal_type: Option<MealType>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealmix::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealmix::observability::init_observability(
        "mealmix",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Init { force } => cli::init(config, force).await,
        Commands::Suggest {
            meal_type,
            category,
            count,
            seed,
            log,
        } => {
            cli::suggest(
                config,
                cli::SuggestArgs {
                    meal_type,
                    category,
                    count,
                    seed,
                    log,
                },
            )
            .await
        }
        Commands::Log {
            meal_type,
            ingredients,
            date,
            name,
        } => {
            cli::log(
                config,
                cli::LogArgs {
                    meal_type,
                    ingredients,
                    date,
                    name,
                },
            )
            .await
        }
        Commands::Favorite { id } => cli::favorite(config, id).await,
        Commands::Delete { id } => cli::delete(config, id).await,
        Commands::Favorites => cli::favorites(config).await,
        Commands::Variety { month, meal_type } => cli::variety(config, month, meal_type).await,
        Commands::Ingredients { meal_type } => cli::ingredients(config, meal_type).await,
    };

    mealmix::observability::shutdown_observability();

    result
}
