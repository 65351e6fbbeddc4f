// Header block rendering and streaming output

use std::io::Write;
use std::path::PathBuf;

use super::escape::{encode_line, split_lines};
use super::EmittedConstant;
use crate::config::constants::{BLOCK_TERMINATOR, DECLARATION_PREFIX};
use crate::config::EscapeMode;
use crate::errors::{EmbedError, Result};

/// Render the block for one constant:
///
/// ```text
/// // shaders/vertex.glsl
/// const char *vertex_glsl =
/// "void main(){}\n"
/// "\0";
/// ```
pub fn render_block(
    constant: &EmittedConstant,
    text: &str,
    escape: EscapeMode,
) -> Result<String> {
    let mut block = String::with_capacity(text.len() + text.len() / 4 + 64);
    block.push_str("// ");
    block.push_str(&constant.source.display().to_string());
    block.push('\n');
    block.push_str(DECLARATION_PREFIX);
    block.push_str(&constant.name);
    block.push_str(" =\n");

    for (index, line) in split_lines(text, escape).enumerate() {
        let encoded = encode_line(line, escape).map_err(|_| EmbedError::EmbeddedNul {
            path: constant.source.clone(),
            line: index + 1,
        })?;
        block.push('"');
        block.push_str(&encoded);
        block.push_str("\\n\"\n");
    }

    block.push_str(BLOCK_TERMINATOR);
    block.push('\n');
    Ok(block)
}

/// Writes rendered blocks to the output as each file is processed
pub struct HeaderWriter<W: Write> {
    inner: W,
    path: PathBuf,
    escape: EscapeMode,
    blocks: usize,
}

impl<W: Write> HeaderWriter<W> {
    /// `path` is only used to label write errors
    pub fn new(inner: W, path: impl Into<PathBuf>, escape: EscapeMode) -> Self {
        Self {
            inner,
            path: path.into(),
            escape,
            blocks: 0,
        }
    }

    /// Number of blocks written so far
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    pub fn write_block(&mut self, constant: &EmittedConstant, text: &str) -> Result<()> {
        let block = render_block(constant, text, self.escape)?;
        self.inner
            .write_all(block.as_bytes())
            .map_err(|e| EmbedError::io(&self.path, e))?;
        self.blocks += 1;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|e| EmbedError::io(&self.path, e))?;
        Ok(self.inner)
    }
}
