use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use dbgui::catalog::{filter_db_services, select_service};
use dbgui::config::DbguiConfig;
use dbgui::error::DbguiError;
use dbgui::tools::{ToolId, build_launch_command};
use dbgui::{environment, launcher};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dbgui")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("dbgui.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &DbguiConfig) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    // Tool resolution: CLI flag beats config; neither present is an error
    let tool_name = cli
        .tool
        .clone()
        .or_else(|| config.tool.clone())
        .ok_or(DbguiError::NoToolSpecified)?;
    let tool: ToolId = tool_name.parse()?;

    let services = environment::inspect(None)?;
    let candidates = filter_db_services(services);
    info!("Found {} database service(s)", candidates.len());
    if cli.is_verbose() {
        for candidate in &candidates {
            println!("  {} ({} {})", candidate.name, candidate.kind, candidate.version);
        }
    }

    let service = select_service(&candidates, cli.service.as_deref())?;
    info!(
        "Selected service '{}' ({} {})",
        service.name, service.kind, service.version
    );

    let command = build_launch_command(service, tool, config.docker_ip.as_deref())?;
    println!("{}", command);

    if cli.dry_run {
        info!("Dry run requested, not executing launch command");
        return Ok(());
    }

    println!("{} {} for service '{}'", "Opening:".green(), tool, service.name);
    launcher::launch(&command)?;

    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = DbguiConfig::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config)?;

    Ok(())
}
