// Command-line interface
// One-shot queries, an interactive explorer and the HTTP server

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ingredient-graph")]
#[command(about = "Ingredient co-occurrence graph built from a recipe corpus", long_about = None)]
pub struct Cli {
    /// Recipe dataset: JSON file or directory of .cook files
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Minimum number of shared recipes for two ingredients to be connected
    #[arg(long, global = true)]
    pub min_cooccurrence: Option<u64>,

    /// YAML file with stopwords removed during normalization
    #[arg(long, global = true)]
    pub stopwords: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingredients most often used together with an ingredient
    Related {
        /// Ingredient name
        ingredient: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Shortest chain of pairings connecting two ingredients
    Path {
        /// Starting ingredient
        from: String,

        /// Target ingredient
        to: String,
    },

    /// Ingredient paired with the most other ingredients
    MostConnected,

    /// Statistics for an ingredient
    Stats {
        /// Ingredient name
        ingredient: String,
    },

    /// Graph size and build parameters
    Summary,

    /// Interactive menu for exploring the graph
    Explore,

    /// Start the HTTP query server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },
}
