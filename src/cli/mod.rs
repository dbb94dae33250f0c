//! CLI module for toolmatch - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for recommendations,
//! catalog browsing, seeding and the query log.

pub mod commands;
pub mod output;

pub use commands::Cli;
