//! Silence ACL evaluation command

use super::OutputOptions;
use crate::args::CheckArgs;
use crate::console::CliConsole;
use crate::router::Outcome;
use anyhow::Context;
use serde::Serialize;
use silence_acl_core::{AclDecision, CandidateMatcher, Silence, load_from_file};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize)]
struct Report<'a> {
    user: &'a str,
    alertmanager: &'a str,
    #[serde(flatten)]
    decision: &'a AclDecision,
}

/// Evaluate a silence against the configured rules
pub fn execute(args: &CheckArgs, output: OutputOptions) -> anyhow::Result<Outcome> {
    let loaded = load_from_file(&args.config)
        .with_context(|| format!("invalid ACL configuration: {}", args.config.display()))?;

    let silence = match &args.silence {
        Some(path) => read_silence(path)?,
        None => Silence::new(parse_matchers(&args.matchers)?),
    };
    debug!(matchers = silence.matchers.len(), "evaluating silence");

    let decision = loaded
        .rules
        .evaluate(&silence, &args.user, &args.alertmanager);

    if output.json {
        let report = Report {
            user: &args.user,
            alertmanager: &args.alertmanager,
            decision: &decision,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let console = CliConsole::new(output.verbose);
        for matcher in &silence.matchers {
            console.info(&format!("matcher {}", matcher));
        }
        match &decision {
            AclDecision::Allowed { .. } => console.success(&format!("Silence {}", decision)),
            AclDecision::Blocked { .. } => console.error(&format!("Silence {}", decision)),
        }
    }

    Ok(Outcome::from_allowed(decision.is_allowed()))
}

fn parse_matchers(matchers: &[String]) -> anyhow::Result<Vec<CandidateMatcher>> {
    matchers
        .iter()
        .map(|m| m.parse::<CandidateMatcher>().map_err(anyhow::Error::from))
        .collect()
}

fn read_silence(path: &Path) -> anyhow::Result<Silence> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read silence file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse silence file: {}", path.display()))
}
