//! Instance friendly name command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

/// Build a friendly name from a workload instance identity.
#[derive(Debug, Args)]
pub struct InstanceCommand {
    /// Namespace of the workload.
    #[arg(long)]
    namespace: String,

    /// Kind of the workload, e.g. `Pod`.
    #[arg(long)]
    kind: String,

    /// Name of the workload.
    #[arg(long)]
    name: String,

    /// Hashed instance ID.
    hashed_id: String,
}

#[derive(Debug, Serialize)]
struct InstanceName {
    namespace: String,
    kind: String,
    name: String,
    friendly_name: String,
}

impl InstanceCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let out = self.build()?;
        info!(friendly_name = %out.friendly_name, "built instance friendly name");
        print_single(&out.friendly_name, &out, ctx.format);
        Ok(())
    }

    fn build(self) -> Result<InstanceName, CliError> {
        let friendly_name = fname_names::instance_id_to_friendly_name(
            &self.name,
            &self.namespace,
            &self.kind,
            &self.hashed_id,
        )?;

        Ok(InstanceName {
            namespace: self.namespace,
            kind: self.kind,
            name: self.name,
            friendly_name,
        })
    }
}
