//! silence-acl command-line interface
//!
//! Loads an ACL configuration and answers authorization questions about
//! silences:
//!
//! - `silence-acl validate acl.yaml` checks a configuration file
//! - `silence-acl check acl.yaml --user bob --alertmanager prod -m team=db`
//!   evaluates the ordered silence rules
//! - `silence-acl permit acl.yaml --subject bob -m team=db` evaluates a
//!   subject's required matchers
//!
//! Exit status is 0 when allowed, 1 when denied and 2 on errors.

mod args;
mod commands;
mod console;
mod router;

use args::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let console = console::CliConsole::new(cli.verbose);
    match router::route(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            console.error(&format!("{:#}", e));
            ExitCode::from(router::ERROR_STATUS)
        }
    }
}
