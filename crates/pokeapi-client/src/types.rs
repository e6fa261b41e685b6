//! Data types for PokeAPI responses
//!
//! These structs mirror the PokeAPI wire shapes. The upstream documents
//! carry many more fields; anything not listed here is ignored on decode.

use serde::{Deserialize, Serialize};

/// A single Pokemon record from `/pokemon/{id or name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
}

/// Name/URL pair pointing at a full Pokemon record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

/// One page of the paginated `/pokemon` listing
///
/// `next` and `previous` hold the adjacent page URLs, or `None` at either
/// end of the listing (the service sends JSON null there).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PokemonSummary>,
}
