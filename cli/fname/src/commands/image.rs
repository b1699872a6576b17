//! Image friendly name command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

/// Build a friendly name from an image tag and image hash.
#[derive(Debug, Args)]
pub struct ImageCommand {
    /// Image tag or reference, e.g. `docker.io/nginx:latest`.
    tag: String,

    /// Image content hash (bare hex digest).
    hash: String,
}

#[derive(Debug, Serialize)]
struct ImageName<'a> {
    image_tag: &'a str,
    image_hash: &'a str,
    friendly_name: String,
}

impl ImageCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let out = build(&self.tag, &self.hash)?;
        info!(friendly_name = %out.friendly_name, "built image friendly name");
        print_single(&out.friendly_name, &out, ctx.format);
        Ok(())
    }
}

fn build<'a>(tag: &'a str, hash: &'a str) -> Result<ImageName<'a>, CliError> {
    let friendly_name = fname_names::image_info_to_friendly_name(tag, hash)?;
    Ok(ImageName {
        image_tag: tag,
        image_hash: hash,
        friendly_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_image_name() {
        let out = build(
            "docker.io/nginx:latest",
            "f4e3b6489888647ce1834b601c6c06b9f8c03dee6e097e13ed3e28c01ea3ac8c",
        )
        .unwrap();
        assert_eq!(out.friendly_name, "docker.io-nginx-latest-a3ac8c");
    }

    #[test]
    fn test_build_image_name_bad_hash() {
        let err = build("nginx", "sha256:abcdef").unwrap_err();
        assert!(matches!(err, CliError::InvalidFriendlyName(_)));
    }
}
