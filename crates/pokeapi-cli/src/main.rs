//! Command-line wrapper around the PokeAPI client
//!
//! Fetched records go to stdout as indented JSON; log events go to stderr
//! as JSON lines. A failed lookup prints an `Error:` line and still exits
//! zero, only usage errors terminate with a non-zero status.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;

use pokeapi_client::PokeApiClient;

#[derive(Debug, Parser)]
#[command(name = "pokeapi-cli", version, about = "Look up entries in the PokeAPI species catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a single Pokemon by numeric id or name
    GetPokemon {
        /// Name or id of the Pokemon
        #[arg(long)]
        name: String,
    },
    /// Fetch one page of the Pokemon listing
    GetPokemons {
        /// Maximum number of entries in the page
        #[arg(long, default_value_t = 20)]
        limit: i64,
        /// Number of entries to skip before the page starts
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; stderr keeps stdout clean for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokeapi_cli=info".into()),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = PokeApiClient::new();

    match cli.command {
        Command::GetPokemon { name } => match client.get_pokemon(&name).await {
            Ok(pokemon) => print_json(&pokemon),
            Err(e) => {
                error!(error = %e, "Failed to get Pokemon");
                println!("Error: {}", e);
            }
        },
        Command::GetPokemons { limit, offset } => match client.get_pokemons(offset, limit).await {
            Ok(page) => print_json(&page),
            Err(e) => {
                error!(error = %e, "Failed to get Pokemon list");
                println!("Error: {}", e);
            }
        },
    }
}

/// Indented JSON on stdout; an encode failure takes the same user-facing
/// path as a failed lookup
fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!(error = %e, "Failed to encode output");
            println!("Error: {}", e);
        }
    }
}
