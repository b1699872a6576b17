//! Name validation command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Check names against DNS subdomain (default) or DNS label rules.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Check against DNS label rules instead of DNS subdomain rules.
    #[arg(long)]
    label: bool,

    /// Names to check.
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct CheckResult {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Rule")]
    rule: &'static str,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Problem")]
    #[serde(skip_serializing_if = "String::is_empty")]
    problem: String,
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let results = self.check();
        print_output(&results, ctx.format);

        let invalid = results.iter().filter(|r| !r.valid).count();
        if invalid > 0 {
            return Err(CliError::ValidationFailed {
                invalid,
                total: results.len(),
            }
            .into());
        }

        Ok(())
    }

    fn check(&self) -> Vec<CheckResult> {
        let (rule, validate): (_, fn(&str) -> Result<(), fname_names::DnsNameError>) =
            if self.label {
                ("dns-label", fname_names::validate_dns_label_name)
            } else {
                ("dns-subdomain", fname_names::validate_dns_subdomain_name)
            };

        self.names
            .iter()
            .map(|name| {
                let outcome = validate(name);
                debug!(%name, rule, valid = outcome.is_ok(), "checked name");
                CheckResult {
                    name: name.clone(),
                    rule,
                    valid: outcome.is_ok(),
                    problem: outcome.err().map(|e| e.to_string()).unwrap_or_default(),
                }
            })
            .collect()
    }
}
