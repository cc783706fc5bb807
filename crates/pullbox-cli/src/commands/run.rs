//! `pbx run` — pull an image and run a command isolated inside it.

use anyhow::Context;
use clap::Args;
use pullbox_common::config::RegistryConfig;
use pullbox_common::types::ImageReference;
use pullbox_image::RegistryClient;
use pullbox_runtime::{LaunchSpec, launch};

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Image reference, `name[:tag]`; tag defaults to `latest`.
    pub image: String,

    /// Command and arguments to run inside the image, after `--`.
    #[arg(last = true, required = true)]
    pub command: Vec<String>,

    /// Hostname inside the container.
    #[arg(long)]
    pub hostname: Option<String>,

    /// Keep the pulled root filesystem on disk for inspection.
    #[arg(long)]
    pub keep_root: bool,
}

/// Executes the `run` command and returns the child's exit code.
///
/// # Errors
///
/// Returns an error if the reference is invalid, the pull fails, or
/// the launch itself fails. A non-zero exit of the in-container
/// command is not an error; its code is returned.
pub fn execute(args: RunArgs) -> anyhow::Result<i32> {
    let reference = ImageReference::parse(&args.image)?;
    let (program, command_args) = args
        .command
        .split_first()
        .context("no command supplied after --")?;

    // Fresh root per invocation; the guard removes it on success and
    // failure unless --keep-root disarms it.
    let root = tempfile::Builder::new()
        .prefix("pullbox-")
        .tempdir()
        .context("failed to create root directory")?;
    let root_path = root.path().to_path_buf();
    if args.keep_root {
        let kept = root.keep();
        tracing::info!(root = %kept.display(), "keeping root filesystem");
    }

    let client = RegistryClient::new(reference.clone(), RegistryConfig::default());
    client
        .pull(&root_path)
        .with_context(|| format!("pulling {reference}"))?;

    let mut spec = LaunchSpec::new(program.clone(), command_args.to_vec());
    spec.hostname = args.hostname;
    let code = launch(spec, &root_path).context("launching isolated process")?;

    Ok(code)
}
