use clap::Parser;
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scour_core::engines::lemmy::{LemmyConfig, LemmyEngine, DEFAULT_INSTANCE};
use scour_core::{Engine, EngineError, SearchClient, SearchQuery};

#[derive(Parser)]
#[command(name = "scour", version, about = "Search a Lemmy instance from the terminal")]
struct Cli {
    /// Search terms
    query: String,

    /// What to search for: Communities, Users, Posts or Comments
    #[arg(long, default_value = "Communities")]
    kind: String,

    /// Base URL of the Lemmy instance to query
    #[arg(long, default_value = DEFAULT_INSTANCE)]
    instance: String,

    /// 1-based result page
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Print raw JSON instead of formatted output
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scour_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), EngineError> {
    let engine = LemmyEngine::new(LemmyConfig::new(&cli.instance, &cli.kind)?);
    let query = SearchQuery::new(&cli.query).with_page(cli.page);

    let results = SearchClient::new().run(&engine, &query).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", "No results.".dimmed());
        return Ok(());
    }

    println!(
        "{} {} results from {}",
        engine.name().bold().cyan(),
        results.len(),
        cli.instance.dimmed()
    );
    println!();

    for (i, result) in results.iter().enumerate() {
        println!("{} {}", format!("{:>3}.", i + 1).dimmed(), result.title.bold());
        println!("     {}", result.url.cyan());
        if !result.content.is_empty() {
            println!("     {}", result.content);
        }
        println!();
    }

    Ok(())
}
