use clap::Parser;
use moodcat::config::{DEFAULT_BASE_URL, DEFAULT_DOWNLOAD_BASE};
use moodcat::persist::DEFAULT_OUTPUT_PATH;
use moodcat::{CatalogGenerator, ClientConfig, FreeSelection, DEFAULT_LIMIT, DEFAULT_MOODS};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "moodcat-cli")]
#[command(about = "Generate a mood-filtered free/pro music catalog", long_about = None)]
struct Cli {
    /// Where to write the catalog JSON
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Mood keyword to match against each piece's feel (repeatable)
    #[arg(short, long = "mood", default_values_t = DEFAULT_MOODS.map(String::from))]
    moods: Vec<String>,

    /// Maximum number of matching pieces to keep
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Number of pieces to mark free
    #[arg(long, default_value_t = moodcat::partition::DEFAULT_FREE_SLOTS)]
    free: usize,

    /// Catalog base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Base URL for audio downloads
    #[arg(long, default_value = DEFAULT_DOWNLOAD_BASE)]
    download_base: String,

    /// Mark every piece equal to a chosen one as free, duplicates included
    #[arg(long)]
    match_by_equality: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::default()
        .with_base_url(cli.base_url)
        .with_download_base(cli.download_base);

    let mut generator = match CatalogGenerator::with_config(config) {
        Ok(generator) => generator,
        Err(e) => {
            println!("An error occurred: {}", e);
            return ExitCode::FAILURE;
        }
    };
    generator.set_moods(cli.moods);
    generator.set_limit(cli.limit);
    generator.set_free_slots(cli.free);
    generator.set_output_path(&cli.output);
    if cli.match_by_equality {
        generator.set_selection(FreeSelection::ByEquality);
    }

    match generator.run().await {
        Ok(report) => {
            println!("Generated catalog with {} pieces", report.total_pieces);
            println!("- Free access: {} pieces", report.free_count);
            println!("- Pro access: {} pieces", report.pro_count);
            println!("Saved to {}", report.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) if e.is_api_error() => {
            println!("Error accessing the API: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}
