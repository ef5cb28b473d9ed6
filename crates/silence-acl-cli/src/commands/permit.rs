//! Subject policy evaluation command

use super::OutputOptions;
use crate::args::PermitArgs;
use crate::console::CliConsole;
use crate::router::Outcome;
use anyhow::Context;
use serde_json::json;
use silence_acl_core::{CandidateMatcher, load_from_file};

/// Check one candidate matcher against a subject's required matchers
pub fn execute(args: &PermitArgs, output: OutputOptions) -> anyhow::Result<Outcome> {
    let loaded = load_from_file(&args.config)
        .with_context(|| format!("invalid ACL configuration: {}", args.config.display()))?;
    let candidate: CandidateMatcher = args.matcher.parse()?;

    let rules = loaded.policy.rules(&args.subject);
    let permitted = loaded.policy.is_permitted(&args.subject, &candidate);

    if output.json {
        let report = json!({
            "subject": args.subject,
            "matcher": candidate,
            "permitted": permitted,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let console = CliConsole::new(output.verbose);
        if rules.is_empty() {
            console.warn(&format!("Subject '{}' has no required matchers", args.subject));
        }
        for rule in rules {
            console.info(&format!("{} -> {}", rule, rule.is_match(&candidate)));
        }
        if permitted {
            console.success(&format!("{} is permitted for {}", candidate, args.subject));
        } else {
            console.error(&format!("{} is not permitted for {}", candidate, args.subject));
        }
    }

    Ok(Outcome::from_allowed(permitted))
}
