// shader-embed - embed shader sources into a C header
// Library exports

pub mod cli;
pub mod config;
pub mod embed;
pub mod errors;
pub mod logging;

pub use config::EmbedConfig;
pub use embed::{EmbedSummary, Embedder};
pub use errors::{EmbedError, Result};

use std::path::Path;

/// Embed `input_dir` with the given settings
pub fn embed(input_dir: &Path, config: EmbedConfig) -> Result<EmbedSummary> {
    Embedder::new(config).run(input_dir)
}
