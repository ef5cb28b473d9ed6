//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use std::process::ExitCode;

/// Process status for commands that failed with an error
pub const ERROR_STATUS: u8 = 2;

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allowed,
    Denied,
}

impl Outcome {
    pub fn from_allowed(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }

    pub fn status(self) -> u8 {
        match self {
            Self::Allowed => 0,
            Self::Denied => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> anyhow::Result<Outcome> {
    let output = commands::OutputOptions {
        verbose: cli.verbose,
        json: cli.json,
    };

    match cli.command {
        Commands::Validate { config } => commands::validate::execute(&config, output),
        Commands::Check(args) => commands::check::execute(&args, output),
        Commands::Permit(args) => commands::permit::execute(&args, output),
    }
}
