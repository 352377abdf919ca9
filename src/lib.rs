pub mod config;
pub mod error;

// Graph core
pub mod graph;

// Recipe loading
pub mod dataset;

// HTTP API
pub mod api;

// CLI
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use graph::{IngredientNetwork, QueryEngine};
