//! Param Cleaner - Command-line tool for building example payloads.
//!
//! Reads a JSON or YAML document of parameter descriptors keyed by dotted/bracketed
//! paths and prints the nested example payload they describe.
//!
//! # Usage
//!
//! ```bash
//! param-cleaner [OPTIONS] <INPUT>
//! ```
//!
//! # Examples
//!
//! Print an example JSON body:
//! ```bash
//! param-cleaner body_params.json
//! ```
//!
//! Clean every parameter group of an endpoint and write YAML:
//! ```bash
//! param-cleaner endpoint.yaml -m endpoint -f yaml -o examples.yaml
//! ```
//!
//! Print a form payload with verbose logging:
//! ```bash
//! param-cleaner body_params.json -f form -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use param_cleaner::cli;

fn main() -> Result<()> {
    // The verbose flag decides the log level, so parse before the logger exists
    let args_for_verbose = cli::CliArgs::parse();

    cli::logger_builder(
        env_logger::Env::default().default_filter_or("info"),
        args_for_verbose.verbose,
    )
    .init();

    info!("Param Cleaner starting...");

    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    cli::run(args)?;

    info!("Example generation completed successfully");

    Ok(())
}
