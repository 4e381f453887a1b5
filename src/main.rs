// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing -> stderr)
// 3. Crawl the docs site and save every page as Markdown
// 4. Print a summary (or a JSON report)
// 5. Exit with 0; individual page failures are reported, never fatal.
//    Exit code 2 means the run could not start (bad URL, bad flags, ...)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validated crawl settings
mod crawl; // src/crawl/ - link discovery
mod error; // src/error.rs - page-scoped error types
mod markdown; // src/markdown/ - HTML -> Markdown conversion
mod pipeline; // src/pipeline.rs - discovery + save phases
mod save; // src/save/ - URL -> file mapping and the worker pool

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::{CrawlConfig, ReportFormat};
use pipeline::{CrawlSummary, Progress};
use save::PageReport;
use tracing_subscriber::EnvFilter;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If the run could not even start, print why and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CrawlConfig::from_cli(&cli)?;

    tracing::info!(
        "Scraping {} (base path '{}') into '{}'",
        config.base_url,
        config.base_path,
        config.output_dir.display()
    );

    let show_progress = config.format == ReportFormat::Text;
    let summary = pipeline::crawl_and_scrape(&config, |progress| {
        if show_progress {
            print_progress(progress);
        }
    })
    .await?;

    match config.format {
        ReportFormat::Json => print_json(&summary)?,
        ReportFormat::Text => print_summary(&summary, &config),
    }

    Ok(0)
}

// Logs go to stderr so stdout only carries results
// RUST_LOG wins over the defaults when it is set
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Text-mode progress lines, printed as the crawl runs
fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::Discovered(0) => {}
        Progress::Discovered(count) => {
            println!("\n📄 Found {} total doc pages. Scraping in parallel...\n", count);
        }
        Progress::PageDone(outcome) => println!("{}", outcome),
    }
}

fn print_json(summary: &CrawlSummary) -> Result<()> {
    let reports: Vec<PageReport> = summary.outcomes.iter().map(|o| o.report()).collect();
    let json_output = serde_json::to_string_pretty(&reports)?;
    println!("{}", json_output);
    Ok(())
}

fn print_summary(summary: &CrawlSummary, config: &CrawlConfig) {
    if !summary.base_reachable {
        println!(
            "\n⚠️  Could not reach base URL {} - nothing to scrape",
            config.base_url
        );
        return;
    }

    if summary.pages_found == 0 {
        println!("\n⚠️  No doc pages found under '{}'", config.base_path);
        return;
    }

    println!();
    println!("📊 Summary:");
    println!("   ✅ Saved: {}", summary.saved());
    println!("   ❌ Failed: {}", summary.failed());
    println!("   📋 Total: {}", summary.pages_found);
    println!(
        "\n✅ All docs saved to '{}'!",
        config.output_dir.display()
    );
}
