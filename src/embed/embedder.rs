// Embedder - walks an input tree and writes one header of string constants

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::naming::plan_names;
use super::output::output_path;
use super::walk::discover;
use super::writer::HeaderWriter;
use super::SourceFile;
use crate::config::EmbedConfig;
use crate::errors::{EmbedError, Result};

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSummary {
    pub output: PathBuf,
    pub constants: usize,
}

pub struct Embedder {
    config: EmbedConfig,
}

impl Embedder {
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// Embed every file under `input_dir` into a single header.
    ///
    /// The tree is walked and every name checked before the output is
    /// opened, so a rejected tree leaves no file behind. Once writing has
    /// started, a failing input aborts the run and the partial header stays
    /// on disk.
    pub fn run(&self, input_dir: &Path) -> Result<EmbedSummary> {
        let metadata = fs::metadata(input_dir).map_err(|e| EmbedError::io(input_dir, e))?;
        if !metadata.is_dir() {
            return Err(EmbedError::InputNotDirectory(input_dir.to_path_buf()));
        }

        let output = output_path(input_dir, &self.config)?;
        let mut files = discover(input_dir, self.config.order)?;
        exclude_output(&mut files, &output);
        let constants = plan_names(&files, self.config.strict)?;

        self.announce(&output);
        let file = File::create(&output).map_err(|e| EmbedError::io(&output, e))?;
        let mut writer = HeaderWriter::new(BufWriter::new(file), &output, self.config.escape);

        for constant in &constants {
            self.announce(constant.source());
            let text = read_source(constant.source())?;
            debug!(name = %constant.name, bytes = text.len(), "Embedding");
            writer.write_block(constant, &text)?;
        }

        let count = writer.blocks();
        writer.finish()?;

        info!(output = %output.display(), constants = count, "Header written");
        Ok(EmbedSummary {
            output,
            constants: count,
        })
    }

    fn announce(&self, path: &Path) {
        if self.config.announce {
            println!("{}", path.display());
        }
    }
}

/// Drop a stale copy of the header when it lives inside the input tree
fn exclude_output(files: &mut Vec<SourceFile>, output: &Path) {
    let Ok(target) = output.canonicalize() else {
        return;
    };
    files.retain(|file| match file.path.canonicalize() {
        Ok(path) if path == target => {
            debug!("Skipping previous output: {}", file.path.display());
            false
        }
        _ => true,
    });
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| EmbedError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| EmbedError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
