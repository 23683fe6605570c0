// SPDX-License-Identifier: PMPL-1.0-or-later

//! linpeas-web: render a LinPEAS report as HTML and serve it locally

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use linpeas_web::config::Config;
use linpeas_web::serve::StaticServer;
use linpeas_web::{logging, report};
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

#[derive(Parser)]
#[command(name = "linpeas-web")]
#[command(version)]
#[command(about = "Render LinPEAS output as a browsable HTML report and serve it locally")]
#[command(long_about = None)]
struct Cli {
    /// LinPEAS output file (default: linpeas.txt)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_default()?;
    if let Some(input) = cli.input {
        config.input = input;
    }
    logging::init_logging(&config.log_level);

    build(&config)?;
    serve(&config)
}

fn build(config: &Config) -> Result<()> {
    println!("Parsing report: {}", config.input.display());

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let report = report::build(&config.input, config.output_path(), &generated_at)?;
    report::print_report(&report);
    Ok(())
}

fn serve(config: &Config) -> Result<()> {
    env::set_current_dir(&config.output_dir)
        .with_context(|| format!("entering {}", config.output_dir.display()))?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = shutdown.clone();
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }

    let server = StaticServer::bind(".", &config.addr())?;
    println!(
        "\nServing report at {} (Ctrl+C to stop)",
        config.display_url().bold().green()
    );
    server.run(&shutdown)?;

    println!("\nWeb server stopped.");
    Ok(())
}
