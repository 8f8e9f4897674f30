//! apigw CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Synthesis error

use std::process::ExitCode;

use apigw_cfn::CfnError;
use apigw_config::ConfigError;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const SYNTHESIS_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Synth(args) => commands::synth::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Routes(args) => commands::routes::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Logs go to stderr so `synth` output can be piped.
fn init_logging(verbose: bool, quiet: bool) {
    let (global, crates) = if verbose {
        (LevelFilter::WARN, "apigw=debug")
    } else if quiet {
        (LevelFilter::ERROR, "apigw=error")
    } else {
        (LevelFilter::WARN, "apigw=info")
    };

    let mut filter = EnvFilter::from_default_env().add_directive(global.into());
    if let Ok(directive) = crates.parse() {
        filter = filter.add_directive(directive);
    }

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(err);
        }
        if let Some(err) = cause.downcast_ref::<CfnError>() {
            return match err {
                CfnError::Config(inner) => config_exit_code(inner),
                _ => ExitCodes::SYNTHESIS_ERROR,
            };
        }
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("validation") {
        ExitCodes::VALIDATION_FAILURE
    } else if msg.contains("argument") || msg.contains("not found") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::NotFound(_) | ConfigError::UnsupportedFormat(_) => ExitCodes::INVALID_ARGS,
        _ => ExitCodes::VALIDATION_FAILURE,
    }
}
