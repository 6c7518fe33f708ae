//! Shader header generator CLI
//!
//! Run inside a shader directory to (re)generate `Shaders.h`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shader_embed::{WriteOutcome, OUTPUT_FILE};

#[derive(Parser)]
#[command(name = "shader-embed")]
#[command(about = "Embed shader sources into Shaders.h", long_about = None)]
#[command(version)]
struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long = "directory", default_value = ".")]
    directory: PathBuf,

    /// Only check that the header is in sync, never write it
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = cli.directory.join(OUTPUT_FILE);

    if cli.check {
        let in_sync = shader_embed::check_in(&cli.directory)
            .with_context(|| format!("Failed to check {}", output.display()))?;
        if !in_sync {
            anyhow::bail!(
                "{} is out of sync. Run 'shader-embed' to regenerate.",
                output.display()
            );
        }
        tracing::info!("{} is in sync", output.display());
        return Ok(());
    }

    let outcome = shader_embed::generate_in(&cli.directory)
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    match outcome {
        WriteOutcome::Written => tracing::info!("Generated {}", output.display()),
        WriteOutcome::Unchanged => tracing::debug!("{} unchanged", output.display()),
    }

    Ok(())
}
