// Output path derivation

use std::ffi::OsString;
use std::path::{is_separator, Path, PathBuf};

use crate::config::{EmbedConfig, OutputNaming};
use crate::errors::{EmbedError, Result};

/// Resolve where the header for `input_dir` is written.
///
/// An explicit `output` wins. Otherwise `OutputNaming::DirName` appends the
/// extension to the input directory itself (`assets/shaders/` gives
/// `assets/shaders.h`), and `OutputNaming::Literal` appends it to the
/// dirname of the path exactly as typed (`shaders/` gives `shaders.h`, but
/// `shaders` gives `.h`).
pub fn output_path(input_dir: &Path, config: &EmbedConfig) -> Result<PathBuf> {
    if let Some(output) = &config.output {
        return Ok(output.clone());
    }

    let extension = config.normalized_extension();
    match config.output_naming {
        OutputNaming::DirName => dir_name_path(input_dir, &extension),
        OutputNaming::Literal => Ok(literal_path(input_dir, &extension)),
    }
}

fn dir_name_path(input_dir: &Path, extension: &str) -> Result<PathBuf> {
    if let Some(path) = sibling_with_extension(input_dir, extension) {
        return Ok(path);
    }

    // `.`, `..` and friends have no final component until resolved
    let resolved = input_dir
        .canonicalize()
        .map_err(|e| EmbedError::io(input_dir, e))?;
    sibling_with_extension(&resolved, extension)
        .ok_or_else(|| EmbedError::NoFileName(input_dir.to_path_buf()))
}

fn sibling_with_extension(dir: &Path, extension: &str) -> Option<PathBuf> {
    let name = dir.file_name()?;
    let mut file_name = OsString::from(name);
    file_name.push(extension);
    Some(match dir.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    })
}

fn literal_path(input_dir: &Path, extension: &str) -> PathBuf {
    let typed = input_dir.to_string_lossy();
    PathBuf::from(format!("{}{}", dirname(&typed), extension))
}

/// Everything before the last separator, with trailing separators removed
/// unless the head is nothing but separators.
fn dirname(path: &str) -> &str {
    let split = path.rfind(is_separator).map_or(0, |i| i + 1);
    let head = &path[..split];
    if head.is_empty() || head.chars().all(is_separator) {
        head
    } else {
        head.trim_end_matches(is_separator)
    }
}
