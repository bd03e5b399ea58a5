//! Factbox CLI - natural-language fact lookup

use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use url::Url;

use factbox::error::{FactboxError, FixSuggestion};
use factbox::handlers::default_rules;
use factbox::repl;
use factbox::rules::Outcome;
use factbox::wiki::WikiClient;

#[derive(Parser)]
#[command(name = "factbox")]
#[command(about = "Factbox - ask natural-language questions about the world")]
#[command(version)]
struct Cli {
    /// Wikipedia language edition
    #[arg(short, long, default_value = "en", global = true)]
    lang: String,

    /// Override the MediaWiki API base URL
    #[arg(long, global = true)]
    api_base: Option<Url>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single query and exit
    Ask {
        /// The question, e.g. "what is the capital of france"
        query: String,
    },

    /// Start the interactive query loop (the default)
    Repl,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Ask { ref query }) => ask(&cli, query).await,
        Some(Commands::Repl) | None => run_repl(&cli).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn build_client(cli: &Cli) -> Result<Arc<WikiClient>, FactboxError> {
    let mut client = WikiClient::new(&cli.lang)?;
    if let Some(ref base) = cli.api_base {
        client = client.with_api_base(base.clone());
    }
    Ok(Arc::new(client))
}

async fn run_repl(cli: &Cli) -> Result<(), FactboxError> {
    let rules = default_rules(build_client(cli)?);
    repl::run(&rules).await?;
    Ok(())
}

async fn ask(cli: &Cli, query: &str) -> Result<(), FactboxError> {
    let rules = default_rules(build_client(cli)?);
    match repl::answer_once(&rules, query).await {
        Outcome::Exit => {}
        Outcome::Answers(answers) => {
            for answer in answers {
                println!("{answer}");
            }
        }
    }
    Ok(())
}
