use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use window_shell::app::{App, AppConfig, DemoHandler};
use window_shell::diagnostics;

/// Native window shell with keyboard and mouse event queues
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration profile (defaults to APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Run startup diagnostics, print the report and exit
    #[arg(long)]
    health_check: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.health_check {
        let report = diagnostics::run_all_checks();
        diagnostics::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let loaded = match &cli.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    };
    let config = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using default configuration");
        AppConfig::fallback(cli.profile.as_deref().unwrap_or("release"))
    });

    App::new(config, Box::new(DemoHandler::new()))
        .run()
        .context("application exited with an error")
}
