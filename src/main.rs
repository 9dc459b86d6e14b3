use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recipe_match::{Fixture, MatchRequest, RecipeMatchConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipe-match")]
#[command(about = "Match pantry ingredients against a recipe fixture", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML engine configuration; defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Rank fixture recipes by ingredient coverage.
    Match {
        /// Fixture with `catalog` and `recipes`.
        fixture: PathBuf,

        #[arg(required = true)]
        ingredients: Vec<String>,

        #[arg(long)]
        min_match: Option<u8>,

        #[arg(long)]
        max_results: Option<usize>,

        /// Score against the literal ingredient list only.
        #[arg(long)]
        no_expand: bool,
    },
    /// Check a submission against the fixture's recipes.
    Duplicate {
        fixture: PathBuf,

        #[arg(short, long)]
        title: String,

        #[arg(required = true)]
        ingredients: Vec<String>,
    },
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match &cli.config {
        Some(path) => RecipeMatchConfig::from_file(path)?,
        None => RecipeMatchConfig::default(),
    };
    let matcher = config.build_matcher()?;

    match cli.command {
        Command::Match {
            fixture,
            ingredients,
            min_match,
            max_results,
            no_expand,
        } => {
            let mut fixture = Fixture::from_file(fixture)?;
            fixture.embed(&**matcher.provider())?;

            let mut req = MatchRequest::new(ingredients).with_expand(!no_expand);
            req.min_match_percentage = min_match;
            req.max_results = max_results;

            let response = matcher.match_recipes(&req, &fixture.recipes, &fixture.catalog)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Duplicate {
            fixture,
            title,
            ingredients,
        } => {
            let fixture = Fixture::from_file(fixture)?;
            let verdict =
                matcher.check_duplicate(&title, &ingredients, &fixture.existing_recipes())?;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
    }

    Ok(())
}
