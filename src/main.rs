mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use portfolio_dashboard::config::DashboardConfig;
use portfolio_dashboard::repository::Catalog;
use portfolio_dashboard::services::dashboard_session::load_action_log;
use portfolio_dashboard::services::{DashboardSession, ExportService};
use portfolio_dashboard::ui::views::filters_view;
use portfolio_dashboard::ui::{render_dashboard, RenderOptions};

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => DashboardConfig::load().context("Failed to load config"),
    }
}

fn config_path(explicit: Option<&PathBuf>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.clone(),
        None => DashboardConfig::config_path()?,
    };
    if !path.exists() {
        DashboardConfig::default()
            .save_to(&path)
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;
    }
    println!("{}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config.log_level);

    let command = cli.command.clone().unwrap_or(Commands::Show);
    if let Commands::ConfigPath = command {
        return config_path(cli.config.as_ref());
    }

    let catalog = match cli.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => {
            info!("Using built-in sample catalog");
            Catalog::seed()
        }
    };
    let catalog = Arc::new(catalog);

    let today = cli.today.unwrap_or_else(|| config.today());
    let mut session = DashboardSession::new(Arc::clone(&catalog), today);

    cli.filters.warn_unknown_values(session.catalog());
    session.replay(cli.filters.to_actions(config.default_quick_filter));
    if let Some(path) = &cli.filters.actions {
        let actions = load_action_log(path)
            .with_context(|| format!("Failed to replay actions from {}", path.display()))?;
        session.replay(actions);
    }

    let mut options = RenderOptions::from_config(&config);
    options.color = options.color && !cli.no_color;

    match command {
        Commands::Show => {
            print!("{}", render_dashboard(session.snapshot(), &options));
        }
        Commands::Options => {
            print!("{}", filters_view::render(&session.options(), session.state(), &options));
        }
        Commands::Export { format, output } => {
            let exporter = ExportService::new(Arc::clone(&catalog));
            match output {
                Some(path) => {
                    exporter
                        .export_to_file(session.state(), format, &path)
                        .with_context(|| format!("Failed to export to {}", path.display()))?;
                    println!("Exported {} projects to {}", session.filtered().len(), path.display());
                }
                None => print!("{}", exporter.export(session.state(), format)?),
            }
        }
        Commands::ConfigPath => {}
    }

    Ok(())
}
