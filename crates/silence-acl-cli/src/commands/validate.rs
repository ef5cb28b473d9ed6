//! Configuration validation command

use super::OutputOptions;
use crate::console::CliConsole;
use crate::router::Outcome;
use anyhow::Context;
use serde::Serialize;
use silence_acl_core::{LoadedAcl, load_from_file};
use std::path::Path;

#[derive(Debug, Serialize)]
struct Summary {
    valid: bool,
    groups: usize,
    rules: usize,
    subjects: usize,
}

impl Summary {
    fn of(loaded: &LoadedAcl) -> Self {
        Self {
            valid: true,
            groups: loaded.rules.groups().len(),
            rules: loaded.rules.rules().len(),
            subjects: loaded.policy.len(),
        }
    }
}

/// Load a configuration file and report what it contains
pub fn execute(config: &Path, output: OutputOptions) -> anyhow::Result<Outcome> {
    let loaded = load_from_file(config)
        .with_context(|| format!("invalid ACL configuration: {}", config.display()))?;
    let summary = Summary::of(&loaded);

    if output.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(Outcome::Allowed);
    }

    let console = CliConsole::new(output.verbose);
    console.print_header("ACL Configuration");
    console.success(&format!("Configuration is valid: {}", config.display()));
    println!("Groups:   {}", summary.groups);
    println!("Rules:    {}", summary.rules);
    println!("Subjects: {}", summary.subjects);

    if output.verbose {
        for (index, rule) in loaded.rules.rules().iter().enumerate() {
            console.info(&format!("rule #{} {}: {}", index, rule.action, rule.reason));
        }
    }
    if summary.rules == 0 && summary.subjects == 0 {
        console.warn("Configuration defines no rules, every silence will be allowed");
    }

    Ok(Outcome::Allowed)
}
