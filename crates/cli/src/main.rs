// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nsc - screen sessions for ROS workers

mod color;
mod commands;
mod env;
mod output;
mod table;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{codec, logs, paths, session, start};
use ns_adapters::{ScreenCli, ScreenConfig, TracedScreen};

#[derive(Parser)]
#[command(
    name = "nsc",
    version,
    about = "Screen sessions for ROS workers: names, logs and start commands"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List running screen sessions
    List {
        /// Only sessions of this worker (e.g. /arm/driver)
        name: Option<String>,
    },
    /// Encode a worker name as a session name
    Encode { name: String },
    /// Decode a session name back to a worker name
    Decode { fragment: String },
    /// Show the log, config and pid paths of a worker
    Paths { name: String },
    /// Write a worker's screen config and print the command that starts it
    StartCmd(start::StartArgs),
    /// Delete a worker's log, config and pid files
    Clean { name: String },
    /// Log directory housekeeping
    Logs(logs::LogsArgs),
    /// Check that the screen binary is installed
    Check,
}

#[tokio::main]
async fn main() {
    setup_logging();
    if let Err(e) = run().await {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn cli_command() -> clap::Command {
    Cli::command()
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise we render the full chain so context
/// isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided, print help and exit 0
            cli_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    // Codec commands need no configuration
    match &command {
        Commands::Encode { name } => return codec::encode(name, format),
        Commands::Decode { fragment } => return codec::decode(fragment, format),
        _ => {}
    }

    let config = ScreenConfig::load()?;
    tracing::debug!(
        log_root = %config.log_root().display(),
        screen_bin = %config.screen_bin.display(),
        "loaded configuration"
    );
    let screen = TracedScreen::new(ScreenCli::from_config(&config));

    match command {
        Commands::List { name } => session::list(&screen, name.as_deref(), format).await?,
        Commands::Check => {
            let bin = screen.inner().bin().display().to_string();
            session::check(&screen, &bin, format)?
        }
        Commands::Paths { name } => paths::handle(config.log_root(), &name, format)?,
        Commands::StartCmd(args) => start::handle(&config, args, format)?,
        Commands::Clean { name } => logs::clean(config.log_root(), &name, format)?,
        Commands::Logs(args) => logs::handle(args.command, config.log_root(), format)?,
        Commands::Encode { .. } | Commands::Decode { .. } => unreachable!(),
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
