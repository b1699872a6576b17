//! Sanitize command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::output::print_single;

use super::CommandContext;

/// Replace characters that are illegal in DNS names.
#[derive(Debug, Args)]
pub struct SanitizeCommand {
    /// Raw identifier to sanitize.
    raw: String,
}

#[derive(Debug, Serialize)]
struct Sanitized<'a> {
    raw: &'a str,
    sanitized: String,
}

impl SanitizeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let out = self.sanitized();
        print_single(&out.sanitized, &out, ctx.format);
        Ok(())
    }

    fn sanitized(&self) -> Sanitized<'_> {
        Sanitized {
            raw: &self.raw,
            sanitized: fname_names::sanitize(&self.raw),
        }
    }
}
