use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use armsref_api::{ApiConfig, Client};
use armsref_search::SearchResult;

#[derive(Parser)]
#[command(name = "armsref")]
#[command(about = "Military-trade reference catalog search", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML); defaults apply when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one dataset (or all) by keyword
    Search {
        dataset: Dataset,
        /// Keyword; empty browses the first page
        keyword: Vec<String>,
    },
    /// Show recorded search history, most recent first
    History,
    /// Show the curated hot keywords
    Hot,
    /// Ask the FAQ responder a question
    Ask { text: Vec<String> },
}

#[derive(Copy, Clone, ValueEnum)]
enum Dataset {
    Countries,
    Ammunition,
    Artillery,
    All,
}

fn load_config(cli: &Cli) -> Result<ApiConfig> {
    let mut config = match &cli.config {
        Some(path) => ApiConfig::load(path).context("loading config")?,
        None => ApiConfig::default(),
    };
    if config.history_path.is_none() {
        config.history_path = dirs::data_dir().map(|dir| dir.join("armsref/search_history.json"));
    }
    Ok(config)
}

fn print_result<T: Serialize + RecordLine>(result: &SearchResult<T>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    println!("{} match(es) for '{}'", result.total, result.keyword);
    for record in &result.data {
        println!("  {}", record.line());
    }
    if !result.suggestions.is_empty() {
        println!("try also: {}", result.suggestions.join(", "));
    }
    Ok(())
}

/// One-line plain rendering per record type.
trait RecordLine {
    fn line(&self) -> String;
}

impl RecordLine for armsref_catalog::Country {
    fn line(&self) -> String {
        format!("{} ({}) - {}", self.name, self.name_en, self.region)
    }
}

impl RecordLine for armsref_catalog::Ammunition {
    fn line(&self) -> String {
        format!(
            "{} [{}] {}mm {} - {}",
            self.name, self.abbreviation, self.caliber, self.kind, self.country
        )
    }
}

impl RecordLine for armsref_catalog::Artillery {
    fn line(&self) -> String {
        format!(
            "{} {}mm {} - {}",
            self.name, self.caliber, self.kind, self.country
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = load_config(&cli)?;
    log::debug!("effective config: {config:?}");
    let client = Client::new(config);

    match &cli.command {
        Commands::Search { dataset, keyword } => {
            let keyword = keyword.join(" ");
            match dataset {
                Dataset::Countries => {
                    let result = client.search_countries(&keyword).await?;
                    print_result(&result, cli.json)?;
                }
                Dataset::Ammunition => {
                    let result = client.search_ammunition(&keyword).await?;
                    print_result(&result, cli.json)?;
                }
                Dataset::Artillery => {
                    let result = client.search_artillery(&keyword).await?;
                    print_result(&result, cli.json)?;
                }
                Dataset::All => {
                    let all = client.search_all(&keyword).await?;
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&all)?);
                    } else {
                        print_result(&all.countries, false)?;
                        print_result(&all.ammunition, false)?;
                        print_result(&all.artillery, false)?;
                    }
                }
            }
            client.record_search(&keyword);
        }
        Commands::History => {
            let history = client.search_history();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else if history.is_empty() {
                println!("no searches recorded");
            } else {
                for (index, keyword) in history.iter().enumerate() {
                    println!("{:2}. {keyword}", index + 1);
                }
            }
        }
        Commands::Hot => {
            let hot = client.hot_keywords().await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&hot)?);
            } else {
                println!("{}", hot.join(", "));
            }
        }
        Commands::Ask { text } => {
            let question = text.join(" ");
            println!("{}", armsref_faq::respond(&question));
        }
    }

    Ok(())
}
