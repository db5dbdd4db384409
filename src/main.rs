use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use neo_hazard::backend::client::BackendClient;
use neo_hazard::backend::traits::ReportGenerator;
use neo_hazard::config::Config;

/// neo-hazard: rank near-Earth asteroids by estimated hazard.
///
/// Fetches asteroid records from the backend, estimates impact energy,
/// crater size, risk zones and a Torino-like scale for each, and ranks
/// them by importance.
#[derive(Parser)]
#[command(name = "neo-hazard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, enrich and rank every asteroid
    Rank {
        /// How many records to show (default: NEO_MAX_VISIBLE)
        #[arg(long)]
        limit: Option<usize>,

        /// Print the top ranked records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show every estimate for a single asteroid
    Show {
        /// The asteroid's reference id (e.g. 2000433)
        id: String,
    },

    /// Write an offline Markdown hazard brief
    Brief {
        /// How many ranked records to include (default: NEO_MAX_VISIBLE)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Request an AI-written HTML report from the backend
    Report {
        /// Report on the top N ranked asteroids (default: NEO_MAX_VISIBLE)
        #[arg(long)]
        limit: Option<usize>,

        /// Report on these ids instead of the top-ranked ones
        #[arg(long, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Check the backend and summarize its data
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("neo_hazard=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    config.require_backend()?;
    let client = BackendClient::new(&config.backend_url, config.request_timeout)?;

    match cli.command {
        Commands::Rank { limit, json } => {
            let ranked = neo_hazard::pipeline::refresh::run(&client).await?;
            let limit = limit.unwrap_or(config.max_visible);

            if json {
                println!("{}", neo_hazard::output::render_json(&ranked, limit)?);
                return Ok(());
            }

            neo_hazard::output::terminal::display_ranked_list(&ranked, limit);
            let summary = neo_hazard::pipeline::summary::summarize(&ranked);
            neo_hazard::output::terminal::display_summary(&summary);
        }

        Commands::Show { id } => {
            match neo_hazard::pipeline::refresh::run_one(&client, &id).await? {
                Some(record) => neo_hazard::output::terminal::display_record_detail(&record),
                None => anyhow::bail!("Asteroid {id} not found on the backend"),
            }
        }

        Commands::Brief { limit } => {
            let ranked = neo_hazard::pipeline::refresh::run(&client).await?;
            let summary = neo_hazard::pipeline::summary::summarize(&ranked);
            let limit = limit.unwrap_or(config.max_visible);

            let path = neo_hazard::output::markdown::generate_brief(
                &ranked,
                &summary,
                limit,
                &config.output_path("neo-hazard-brief.md"),
            )?;

            println!("{}", format!("Hazard brief saved to: {path}").bold());
        }

        Commands::Report { limit, ids } => {
            let ids = if ids.is_empty() {
                let ranked = neo_hazard::pipeline::refresh::run(&client).await?;
                let limit = limit.unwrap_or(config.max_visible);
                ranked
                    .iter()
                    .take(limit)
                    .map(|r| r.id().to_string())
                    .collect()
            } else {
                ids
            };

            if ids.is_empty() {
                println!("No asteroids to report on.");
                return Ok(());
            }

            info!(count = ids.len(), "Requesting AI report");

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {msg} ({elapsed})")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("Generating report for {} asteroids", ids.len()));
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result = client.generate_report(&ids).await;
            spinner.finish_and_clear();

            let html = result?;
            let path = neo_hazard::output::write_file(
                &config.output_path("neo-hazard-report.html"),
                &html,
            )?;
            println!("{}", format!("Report saved to: {path}").bold());
        }

        Commands::Status => {
            neo_hazard::status::show(&client).await?;
        }
    }

    Ok(())
}
