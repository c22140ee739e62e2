use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use green_or_not::service::ResponseBody;
use green_or_not::{
    analyze_html, Config, HttpFetcher, ImageFallback, LabelScope, ProductAnalyzer, ServiceResponse,
};

#[derive(Parser)]
#[command(name = "green-or-not", about = "Score how sustainable a product page looks")]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Overrides {
    /// JSON config file
    #[arg(long, global = true, env = "GREEN_OR_NOT_CONFIG")]
    config: Option<PathBuf>,
    /// User-Agent sent when fetching pages
    #[arg(long, global = true)]
    user_agent: Option<String>,
    /// Fetch timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
    /// Image URL reported when a page has none
    #[arg(long, global = true)]
    placeholder_image: Option<String>,
    /// Only look for eco-labels in visible text
    #[arg(long, global = true)]
    visible_text_labels: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a product page and score it
    Analyze {
        url: String,
    },
    /// Score a saved page without fetching
    Inspect {
        /// Saved HTML file
        #[arg(long)]
        html: PathBuf,
        /// URL the page was saved from, used to resolve relative images
        #[arg(long)]
        source_url: String,
    },
    /// Answer a JSON request body read from stdin
    Request,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.overrides)?;

    match cli.command {
        Commands::Analyze { url } => {
            let analyzer = ProductAnalyzer::new(HttpFetcher::new(&config.fetch), config.extract);
            match analyzer.analyze(&url) {
                Ok(report) => print_json(&report),
                Err(err) => {
                    let message = err.to_string();
                    let response: ServiceResponse = err.into();
                    print_json(&response.body)?;
                    anyhow::bail!(message)
                }
            }
        }
        Commands::Inspect { html, source_url } => {
            let page = std::fs::read_to_string(&html)
                .with_context(|| format!("failed to read {}", html.display()))?;
            print_json(&analyze_html(&page, &source_url, &config.extract))
        }
        Commands::Request => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read request from stdin")?;
            let analyzer = ProductAnalyzer::new(HttpFetcher::new(&config.fetch), config.extract);
            let response = analyzer.handle(&body);
            print_json(&response)?;
            if matches!(response.body, ResponseBody::Failure { .. }) {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn load_config(overrides: &Overrides) -> anyhow::Result<Config> {
    let mut config = match &overrides.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(user_agent) = &overrides.user_agent {
        config.fetch.user_agent = user_agent.clone();
    }
    if let Some(timeout) = overrides.timeout {
        config.fetch.timeout_secs = timeout;
    }
    if let Some(placeholder) = &overrides.placeholder_image {
        config.extract.image_fallback = ImageFallback::Placeholder(placeholder.clone());
    }
    if overrides.visible_text_labels {
        config.extract.label_scope = LabelScope::VisibleText;
    }

    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
