// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Run the crawl and collect the extracted records
// 4. Print them as a table or JSON, optionally writing a JSON file
// 5. Exit with proper code (0 = records found, 1 = none found, 2 = error)
//
// Rust concepts used:
// - async/await: Because the crawl makes many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - the crawl engine (queue, fetching, dispatch)
mod spider;        // src/spider/ - the extraction handlers

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method
use spider::CastRecord;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = records extracted
//   Ok(1) = crawl completed but produced zero records
//   Err = unexpected error (mapped to exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Title { title_url, json, output } => {
            handle_title_crawl(&title_url, json, output.as_deref()).await
        }
        Commands::Actor { actor_url, json, output } => {
            handle_actor_scrape(&actor_url, json, output.as_deref()).await
        }
    }
}

// Handles the 'title' subcommand: the full three-hop crawl
//
// Parameters:
//   title_url: IMDb title page URL (the seed)
//   json: whether to output JSON format
//   output: optional path for a JSON file of the records
async fn handle_title_crawl(title_url: &str, json: bool, output: Option<&str>) -> Result<i32> {
    println!("🎬 Crawling cast of: {}", title_url);

    // Walk title -> full credits -> actor pages and collect records
    let records = crawl::crawl_cast(title_url).await?;

    finish(&records, json, output)
}

// Handles the 'actor' subcommand: a single actor page, no crawl
async fn handle_actor_scrape(actor_url: &str, json: bool, output: Option<&str>) -> Result<i32> {
    println!("🎭 Scraping actor page: {}", actor_url);

    let records = crawl::scrape_actor(actor_url).await?;

    finish(&records, json, output)
}

// Prints the records, writes the optional output file, picks the exit code
fn finish(records: &[CastRecord], json: bool, output: Option<&str>) -> Result<i32> {
    print_records(records, json)?;

    if let Some(path) = output {
        write_records(records, path)?;
        println!("💾 Wrote {} record(s) to {}", records.len(), path);
    }

    if records.is_empty() {
        Ok(1)  // Exit code 1 = crawl ran but nothing was extracted
    } else {
        Ok(0)  // Exit code 0 = records extracted
    }
}

// Prints the records either as a table or JSON
fn print_records(records: &[CastRecord], json: bool) -> Result<()> {
    if json {
        // Serialize records to JSON and print
        let json_output = serde_json::to_string_pretty(records)?;
        println!("{}", json_output);
    } else {
        // Print human-readable table
        print_table(records);
    }
    Ok(())
}

// Writes the records as pretty JSON to a file
fn write_records(records: &[CastRecord], path: &str) -> Result<()> {
    let json_output = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json_output)?;
    Ok(())
}

// Prints records as a human-readable table in the terminal
fn print_table(records: &[CastRecord]) {
    // Print table header
    println!("{:<40} {:<60}", "ACTOR", "MOVIE / TV SHOW");
    println!("{}", "=".repeat(100));

    // Print each record
    for record in records {
        let title_display = record.movie_or_tv_name.as_deref().unwrap_or("(title not found)");

        // Truncate the actor name if too long for display
        // (counted in chars, not bytes - names are often non-ASCII)
        let actor_display = if record.actor.chars().count() > 37 {
            let truncated: String = record.actor.chars().take(37).collect();
            format!("{}...", truncated)
        } else {
            record.actor.clone()
        };

        println!("{:<40} {:<60}", actor_display, title_display);
    }

    println!();

    // Print summary
    let actor_count = records
        .iter()
        .map(|r| r.actor.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len();
    let missing_count = records.iter().filter(|r| r.movie_or_tv_name.is_none()).count();

    println!("📊 Summary:");
    println!("   🎭 Actors: {}", actor_count);
    println!("   🎬 Credits: {}", records.len());
    if missing_count > 0 {
        println!("   ⚠️  Credits missing a title: {}", missing_count);
    }
}
