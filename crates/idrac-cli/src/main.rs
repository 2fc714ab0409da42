/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use idrac_cli::cfg::config::Config;
use idrac_cli::errors::{CliError, CliResult};
use tracing::metadata::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli);

    if cli.default_config {
        print!("{}", Config::default().into_annotated_config_file());
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ CliError::CommandNotFound(_)) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("The command exited with an error:\n{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    idrac_cli::run(cli.args, config).await
}

#[derive(clap::Parser, Debug)]
#[clap(
    name = "idrac",
    about = "Manage a Dell iDRAC from the command line. Run `idrac help` for the list of commands.",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[clap(long, help = "Turn on debug logging (same as RUST_LOG=debug)")]
    debug: bool,
    #[clap(long, env = "IDRAC_CONFIG", help = "Path to TOML configuration file")]
    config: Option<PathBuf>,
    #[clap(long, help = "Output a default TOML config file for use with --config")]
    default_config: bool,
    #[clap(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "<command> [-flag value]... [argument]..."
    )]
    args: Vec<String>,
}

fn setup_logging(cli: &Cli) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::util::SubscriberInitExt;

    // stdout only carries command output
    let level = if cli.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .try_init()
    {
        eprintln!("Failed to initialize logging: {e}");
    }
}
