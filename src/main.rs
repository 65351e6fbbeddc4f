// shader-embed
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;

use shader_embed::cli::Cli;
use shader_embed::config::load_config;
use shader_embed::{logging, Embedder};

fn main() -> Result<()> {
    // Usage errors exit here with status 2, before any file is touched
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    tracing::debug!(?config, "Effective configuration");

    let summary = Embedder::new(config)
        .run(&cli.input_dir)
        .with_context(|| format!("Failed to embed {}", cli.input_dir.display()))?;

    tracing::info!(
        "Embedded {} file(s) into {}",
        summary.constants,
        summary.output.display()
    );
    Ok(())
}
