//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "silence-acl")]
#[command(about = "Evaluate silence access-control rules")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output and debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate an ACL configuration file
    Validate {
        /// Path to the ACL configuration (yaml, toml or json)
        config: PathBuf,
    },

    /// Evaluate the silence ACL rules for a silence
    Check(CheckArgs),

    /// Check a single matcher against a subject's required matchers
    Permit(PermitArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the ACL configuration (yaml, toml or json)
    pub config: PathBuf,

    /// User creating the silence
    #[arg(long, short)]
    pub user: String,

    /// Alertmanager the silence is sent to
    #[arg(long, short)]
    pub alertmanager: String,

    /// Silence matcher, e.g. `team=db`, `env!=dev`, `job=~node.*`
    #[arg(long = "matcher", short = 'm', required_unless_present = "silence")]
    pub matchers: Vec<String>,

    /// Read the silence from a JSON file instead of --matcher
    #[arg(long, conflicts_with = "matchers")]
    pub silence: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PermitArgs {
    /// Path to the ACL configuration (yaml, toml or json)
    pub config: PathBuf,

    /// Subject (user or group) whose rules are consulted
    #[arg(long, short)]
    pub subject: String,

    /// Candidate matcher, e.g. `team=db`
    #[arg(long = "matcher", short = 'm')]
    pub matcher: String,
}
