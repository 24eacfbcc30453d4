// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printready — print-readiness checks for photo uploads.
//
// Entry point. Initialises logging, loads configuration, checks every file
// named on the command line, and prints one JSON result per file on stdout.

mod services;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use services::app_config::AppConfig;
use services::app_services::CheckService;
use services::data_dir;

/// Check photo uploads for print readiness.
#[derive(Debug, Parser)]
#[command(name = "printready")]
#[command(about = "Check images for aspect ratio, ICC profile, and printable sizes")]
#[command(version)]
struct Cli {
    /// Configuration file (JSON). Defaults to the per-user config if present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration before checking.
    #[arg(long)]
    print_config: bool,

    /// Images to check.
    #[arg(value_name = "IMAGE", required_unless_present = "print_config")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(2),
            };
        }
    };

    let config = match AppConfig::resolve(args.config.as_deref(), &data_dir::default_config_path())
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return ExitCode::from(2);
        }
    };

    if args.print_config {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "failed to render configuration");
                return ExitCode::from(2);
            }
        }
    }

    let service = match CheckService::new(config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };

    tracing::info!(files = args.files.len(), "printready starting");

    let mut all_valid = true;
    for path in &args.files {
        let outcome = service.check_file(path);
        all_valid &= outcome.valid;
        match serde_json::to_string(&outcome) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                tracing::error!(error = %e, file = %path.display(), "failed to render result");
                all_valid = false;
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
