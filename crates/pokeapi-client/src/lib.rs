//! Rust client for the [PokeAPI](https://pokeapi.co/) species catalog
//!
//! Wraps the two lookup endpoints of the public PokeAPI service behind a
//! small typed client. Transport failures and 5xx responses are retried
//! with exponential backoff; any other non-200 status is surfaced to the
//! caller unchanged.
//!
//! # Example
//!
//! ```no_run
//! use pokeapi_client::PokeApiClient;
//!
//! # async fn example() -> Result<(), pokeapi_client::PokeApiError> {
//! let client = PokeApiClient::new();
//!
//! // Single lookup by numeric id or name
//! let pikachu = client.get_pokemon("pikachu").await?;
//! println!("{} ({})", pikachu.name, pikachu.id);
//!
//! // Paginated listing
//! let page = client.get_pokemons(0, 20).await?;
//! for entry in page.results {
//!     println!("{}", entry.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /pokemon/{id or name}` - fetch a single Pokemon record
//! - `GET /pokemon?offset={offset}&limit={limit}` - fetch a listing page

mod client;
mod config;
mod error;
mod types;

pub use client::PokeApiClient;
pub use config::ClientConfig;
pub use error::{PokeApiError, Result};
pub use types::{Pokemon, PokemonList, PokemonSummary};
