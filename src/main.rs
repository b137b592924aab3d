//! duckterm CLI - DuckDuckGo search and chat from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use duckterm::{
    format, provider::DuckDuckGo, ImageSize, SafeSearch, SearchClient, SearchQuery,
};

/// duckterm - DuckDuckGo search and chat from the terminal
#[derive(Parser)]
#[command(name = "duckterm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the web
    Search(SearchArgs),

    /// Search for images
    Images(ImagesArgs),

    /// Get a short canned reply assembled from search snippets
    Chat {
        /// Chat query
        query: String,
    },
}

#[derive(Parser)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "5")]
    limit: usize,

    /// Region for search results (e.g., us-en; wt-wt means no region)
    #[arg(short, long, default_value = "wt-wt")]
    region: String,

    /// Safe search level
    #[arg(short, long, value_enum, default_value_t = SafeSearch::Moderate)]
    safe_search: SafeSearch,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Parser)]
struct ImagesArgs {
    /// Search query
    query: String,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "5")]
    limit: usize,

    /// Image size filter
    #[arg(short, long, value_enum)]
    size: Option<ImageSize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    // Failures are reported as text; the process exits 0 either way.
    match cli.command {
        Commands::Search(args) => run_search(args).await,
        Commands::Images(args) => run_images(args).await,
        Commands::Chat { query } => run_chat(&query).await,
    }

    Ok(())
}

async fn run_search(args: SearchArgs) {
    let client = SearchClient::new(DuckDuckGo::new());
    let query = SearchQuery::new(&args.query)
        .with_limit(args.limit)
        .with_region(&args.region)
        .with_safe_search(args.safe_search);

    match client.search(&query).await {
        Ok(results) => match args.format {
            OutputFormat::Text => print!("{}", format::render(&results, &args.query)),
            OutputFormat::Json => match serde_json::to_string_pretty(&results) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing results: {}", e),
            },
            OutputFormat::Compact => {
                for result in &results {
                    println!("{}\t{}", result.title, result.url);
                }
            }
        },
        Err(e) => eprintln!("{}", format::render_error(&e)),
    }
}

async fn run_images(args: ImagesArgs) {
    let client = SearchClient::new(DuckDuckGo::new());
    let query = SearchQuery::new(&args.query).with_limit(args.limit);

    match client.image_search(&query, args.size).await {
        Ok(results) => match args.format {
            OutputFormat::Text => print!("{}", format::render_images(&results, &args.query)),
            OutputFormat::Json => match serde_json::to_string_pretty(&results) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing results: {}", e),
            },
            OutputFormat::Compact => {
                for image in &results {
                    println!("{}\t{}", image.title, image.image_url);
                }
            }
        },
        Err(e) => eprintln!("{}", format::render_error(&e)),
    }
}

async fn run_chat(text: &str) {
    let client = SearchClient::new(DuckDuckGo::new());
    let query = SearchQuery::new(text).with_limit(3);

    println!("You: {}\n", text);

    // A failed search degrades to the fixed apology, same as no matches.
    let results = client.search(&query).await.unwrap_or_default();
    println!("duckterm:\n{}", format::summarize(&results));
}
