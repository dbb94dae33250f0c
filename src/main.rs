use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use cli::output::{render_query, render_recommendation, render_tool};
use config::Config;
use toolmatch::store::{bundled_tools, load_seed_file};
use toolmatch::{CatalogProvider, CatalogStore, Query, Recommender};

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolmatch")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolmatch.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_store(cli: &Cli, config: &Config) -> Result<CatalogStore> {
    let db_path = cli.db.as_ref().unwrap_or(&config.storage.db_path);
    CatalogStore::open_at(db_path).context(format!("Failed to open catalog at {}", db_path.display()))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let mut store = open_store(cli, config)?;

    match &cli.command {
        Commands::Recommend {
            role,
            workflow,
            skill,
            pain,
            limit,
            json,
            no_log,
        } => {
            let query = Query::parse(role.as_str(), workflow.as_str(), skill, pain.iter().cloned())?;
            let limit = limit.unwrap_or(config.recommend.limit);
            let log_query = config.recommend.log_queries && !*no_log;
            handle_recommend_command(&mut store, &query, limit, log_query, *json)
        }
        Commands::Tools { category, json } => handle_tools_command(&store, category.as_deref(), *json),
        Commands::Categories => handle_categories_command(&store),
        Commands::Roles => handle_roles_command(&store),
        Commands::Seed { file } => handle_seed_command(&mut store, file.as_deref()),
        Commands::History { limit } => handle_history_command(&store, *limit),
    }
}

fn handle_recommend_command(
    store: &mut CatalogStore,
    query: &Query,
    limit: usize,
    log_query: bool,
    json: bool,
) -> Result<()> {
    info!(
        "Recommending for role: {}, workflow: {}, skill: {}",
        query.role(),
        query.workflow(),
        query.skill_level()
    );

    if log_query {
        store.log_query(query).context("Failed to log query")?;
    }

    let engine = Recommender::new(&*store).with_limit(limit);
    let recommendations = engine.recommend(query).context("Failed to rank catalog")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("{}", "No tools matched your profile.".yellow());
        return Ok(());
    }

    for (i, rec) in recommendations.iter().enumerate() {
        println!("{}\n", render_recommendation(i + 1, rec));
    }
    Ok(())
}

fn handle_tools_command(store: &CatalogStore, category: Option<&str>, json: bool) -> Result<()> {
    info!("Listing tools - category: {:?}", category);
    let tools: Vec<_> = store
        .list_tools()?
        .into_iter()
        .filter(|t| category.is_none_or(|c| t.category.eq_ignore_ascii_case(c)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    if tools.is_empty() {
        println!("{}", "No tools in catalog. Run `toolmatch seed` to load the starter catalog.".yellow());
    }
    for tool in &tools {
        println!("{}", render_tool(tool));
    }
    Ok(())
}

fn handle_categories_command(store: &CatalogStore) -> Result<()> {
    info!("Listing categories");
    for category in store.list_categories()? {
        println!("{}", category);
    }
    Ok(())
}

fn handle_roles_command(store: &CatalogStore) -> Result<()> {
    info!("Listing roles");
    for role in store.list_roles()? {
        println!("{}", role);
    }
    Ok(())
}

fn handle_seed_command(store: &mut CatalogStore, file: Option<&Path>) -> Result<()> {
    let tools = match file {
        Some(path) => {
            info!("Seeding from file: {}", path.display());
            load_seed_file(path)?
        }
        None => {
            info!("Seeding from bundled catalog");
            bundled_tools()?
        }
    };

    let inserted = store.seed_if_empty(&tools).context("Failed to seed catalog")?;
    if inserted == 0 {
        println!("{}", "Catalog already contains data. Skipping initialization.".yellow());
    } else {
        println!("{} Catalog initialized with {} tools.", "Seeded:".green(), inserted);
    }
    Ok(())
}

fn handle_history_command(store: &CatalogStore, limit: usize) -> Result<()> {
    info!("Showing query history - limit: {}", limit);
    let records = store.recent_queries(limit)?;
    if records.is_empty() {
        println!("{}", "No queries logged yet.".yellow());
    }
    for record in &records {
        println!("{}", render_query(record));
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging
    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
