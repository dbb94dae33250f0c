//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - recommend: rank the catalog against a user profile
//! - tools / categories / roles: browse the catalog
//! - seed: load the starter catalog into an empty store
//! - history: show logged queries

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolmatch - find the right tools for your role and workflow
#[derive(Parser, Debug)]
#[command(name = "toolmatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file (overrides storage.db_path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend tools for a user profile
    Recommend {
        /// Your role (e.g. Developer, Writer)
        #[arg(short, long)]
        role: String,

        /// Your primary workflow (e.g. "Content creation")
        #[arg(short, long)]
        workflow: String,

        /// Your skill level (beginner, intermediate, advanced)
        #[arg(short, long)]
        skill: String,

        /// A challenge you face; repeat for several
        #[arg(short, long = "pain")]
        pain: Vec<String>,

        /// Maximum number of recommendations (overrides recommend.limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print recommendations as JSON
        #[arg(long)]
        json: bool,

        /// Do not record this query in the query log
        #[arg(long)]
        no_log: bool,
    },

    /// List tools in the catalog
    Tools {
        /// Only show tools in this category
        #[arg(long)]
        category: Option<String>,

        /// Print tools as JSON
        #[arg(long)]
        json: bool,
    },

    /// List distinct tool categories
    Categories,

    /// List distinct target roles
    Roles,

    /// Load a seed catalog into an empty store
    Seed {
        /// YAML seed file (defaults to the bundled catalog)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show recently logged queries
    History {
        /// Number of queries to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}
