// Command-line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::{EmbedConfig, EscapeMode, OutputNaming, WalkOrder};

/// Embed every shader source under a directory into a single C header
#[derive(Debug, Parser)]
#[command(name = "shader-embed", version, about)]
pub struct Cli {
    /// Directory of shader sources to embed
    pub input_dir: PathBuf,

    /// Write the header here instead of deriving a name from INPUT_DIR
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Extension of the derived header name
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Order of constants in the header
    #[arg(long, value_enum)]
    pub order: Option<WalkOrder>,

    /// How the header name is derived from INPUT_DIR
    #[arg(long, value_enum)]
    pub naming: Option<OutputNaming>,

    /// How source lines are encoded in string literals
    #[arg(long, value_enum)]
    pub escape: Option<EscapeMode>,

    /// Allow duplicate and non-identifier constant names
    #[arg(long)]
    pub no_strict: bool,

    /// Do not print the header and source paths
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file (defaults to ./shader-embed.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line flags over file settings
    pub fn apply(&self, config: &mut EmbedConfig) {
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(naming) = self.naming {
            config.output_naming = naming;
        }
        if let Some(escape) = self.escape {
            config.escape = escape;
        }
        if self.no_strict {
            config.strict = false;
        }
        if self.quiet {
            config.announce = false;
        }
    }
}
