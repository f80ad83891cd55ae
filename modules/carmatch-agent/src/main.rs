use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use carmatch_agent::catalog::JsonCatalog;
use carmatch_agent::validate::validate_draft;
use carmatch_agent::{CarGenerator, CarSearch};
use carmatch_common::{CarMatchError, Config};
use gemini_client::Gemini;

#[derive(Parser)]
#[command(name = "carmatch-agent", about = "AI-assisted car search and listing generation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the best-matching catalog entry for a free-text description.
    Search { description: String },
    /// Generate a car listing draft from a car name.
    Generate {
        name: String,
        /// Validate the draft against the add-car constraints before printing.
        #[arg(long)]
        validate: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("carmatch=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let mut model = Gemini::new(&config.gemini_api_key, &config.gemini_model);
    if let Some(ref url) = config.gemini_base_url {
        model = model.with_base_url(url);
    }

    match cli.command {
        Command::Search { description } => {
            let catalog = JsonCatalog::new(&config.catalog_path);
            let search = CarSearch::new(model, catalog);

            match search.search(&description).await {
                Ok(id) => println!("{id}"),
                Err(CarMatchError::NotFound) => println!("No car found"),
                Err(e) => return Err(e.into()),
            }
        }
        Command::Generate { name, validate } => {
            let generator = CarGenerator::new(model);
            let object = generator.generate(&name).await?;

            if validate {
                let draft = validate_draft(object)?;
                info!(name = draft.name.as_str(), "Draft passed validation");
                println!("{}", serde_json::to_string_pretty(&draft)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&object)?);
            }
        }
    }

    Ok(())
}
