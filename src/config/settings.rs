// Configuration structs

use super::constants::DEFAULT_EXTENSION;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Order in which discovered files are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WalkOrder {
    /// Sorted by path, stable across machines
    #[default]
    Sorted,
    /// Whatever order the filesystem hands back
    Walk,
}

/// Rule for deriving the output path from the input directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputNaming {
    /// `<input dir>` + extension, as a sibling of the input directory
    #[default]
    DirName,
    /// dirname of the path as typed + extension (`shaders` gives `.h`)
    Literal,
}

/// How each source line is encoded inside its string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EscapeMode {
    /// Escape quotes, backslashes and control bytes; reject NUL
    #[default]
    C,
    /// Write lines verbatim
    #[serde(rename = "none")]
    #[value(name = "none")]
    Verbatim,
}

/// Settings for one embedding run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedConfig {
    /// Extension appended to the derived output path (e.g. ".h", ".hpp")
    pub extension: String,

    /// Explicit output path; bypasses `output_naming` when set
    pub output: Option<PathBuf>,

    pub output_naming: OutputNaming,

    pub order: WalkOrder,

    pub escape: EscapeMode,

    /// Reject duplicate or non-identifier constant names before writing
    pub strict: bool,

    /// Print the output path and each input path to stdout
    pub announce: bool,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            output: None,
            output_naming: OutputNaming::default(),
            order: WalkOrder::default(),
            escape: EscapeMode::default(),
            strict: true,
            announce: true,
        }
    }
}

impl EmbedConfig {
    /// Extension with a guaranteed leading dot
    pub fn normalized_extension(&self) -> String {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            self.extension.clone()
        } else {
            format!(".{}", self.extension)
        }
    }
}
