// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "cast-crawler",
    version = "0.1.0",
    about = "A CLI tool to extract (actor, production) records from IMDb",
    long_about = "cast-crawler starts from one IMDb title page, walks its full cast & crew \
                  list, and emits one record per acting credit per cast member. \
                  It can also scrape a single actor page directly."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (title, actor)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a title's full cast and emit every cast member's acting credits
    ///
    /// Example: cast-crawler title https://www.imdb.com/title/tt5348176/
    Title {
        /// IMDb title page URL (e.g. https://www.imdb.com/title/tt5348176/)
        ///
        /// This is a positional argument (required, no flag needed)
        title_url: String,

        /// Output records in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Write the records as JSON to this file as well
        ///
        /// The table/JSON on stdout is unaffected
        #[arg(long)]
        output: Option<String>,
    },

    /// Scrape a single actor page for their acting credits (no crawl)
    ///
    /// Example: cast-crawler actor https://www.imdb.com/name/nm0000123/
    Actor {
        /// IMDb actor page URL (e.g. https://www.imdb.com/name/nm0000123/)
        actor_url: String,

        /// Output records in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Write the records as JSON to this file as well
        #[arg(long)]
        output: Option<String>,
    },
}
