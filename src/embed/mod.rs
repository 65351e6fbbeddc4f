// Embedding pipeline
//
// discover (walk) -> plan names (naming) -> resolve output (output)
// -> stream one block per file (escape + writer), driven by `Embedder`.

pub mod embedder;
pub mod escape;
pub mod naming;
pub mod output;
pub mod walk;
pub mod writer;

pub use embedder::{EmbedSummary, Embedder};
pub use naming::{derive_name, is_c_identifier, plan_names};
pub use output::output_path;
pub use walk::discover;
pub use writer::{render_block, HeaderWriter};

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// One file found under the input tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as produced by the walk, rooted at the input directory as given
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Base name of the file, lossily decoded
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
    }
}

/// A string constant to emit for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedConstant {
    /// Identifier of the generated `const char *`
    pub name: String,
    /// File whose text becomes the constant's value
    pub source: PathBuf,
}

impl EmittedConstant {
    pub fn source(&self) -> &Path {
        &self.source
    }
}
