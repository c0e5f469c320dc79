//! BisectKV CLI
//!
//! Command-line demo: build the table, look up a key, print the result.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use bisectkv::{Config, SortedTable};

/// Printed when a lookup misses
const NOT_FOUND: i64 = -1;

/// BisectKV CLI
#[derive(Parser, Debug)]
#[command(name = "bisectkv-cli")]
#[command(about = "Binary-search lookups over a sorted key/data table")]
#[command(version)]
struct Args {
    /// Number of entries in the table
    #[arg(short = 'n', long, default_value = "100")]
    entries: usize,

    /// Multiplier applied to each index to produce its data value
    #[arg(short, long, default_value = "123")]
    multiplier: i64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a key and print the associated data
    Lookup {
        /// The key to look up
        #[arg(default_value = "88")]
        key: i64,
    },

    /// Print every entry in the table
    Dump {
        /// Emit the table as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing/logging; RUST_LOG=bisectkv=trace shows the probes
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bisectkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .entry_count(args.entries)
        .data_multiplier(args.multiplier)
        .build();

    let table = SortedTable::new(&config);
    tracing::debug!(entries = table.len(), "table populated");

    // No subcommand behaves like the classic demo: look up key 88
    match args.command.unwrap_or(Commands::Lookup { key: 88 }) {
        Commands::Lookup { key } => {
            let result = table.lookup(key).unwrap_or(NOT_FOUND);
            println!("{}", result);
        }
        Commands::Dump { json } => {
            if json {
                match serde_json::to_string_pretty(table.entries()) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        tracing::error!("Failed to serialize table: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                for entry in table.entries() {
                    println!("{}\t{}", entry.key, entry.data);
                }
            }
        }
    }
}
