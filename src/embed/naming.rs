// Constant name derivation

use std::collections::HashMap;
use std::path::PathBuf;

use super::{EmittedConstant, SourceFile};
use crate::errors::{EmbedError, Result};

/// Derive a constant name from a file's base name: every `.` becomes `_`.
pub fn derive_name(file_name: &str) -> String {
    file_name.replace('.', "_")
}

/// True when `name` can be used as a C identifier
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Derive one constant per file, in the given order.
///
/// With `strict`, the first repeated name fails with both source paths, and
/// names that are not C identifiers are rejected. Without it, names pass
/// through unchecked and duplicates are emitted as-is.
pub fn plan_names(files: &[SourceFile], strict: bool) -> Result<Vec<EmittedConstant>> {
    let mut seen: HashMap<String, PathBuf> = HashMap::with_capacity(files.len());
    let mut constants = Vec::with_capacity(files.len());

    for file in files {
        let name = derive_name(&file.file_name());

        if strict {
            if !is_c_identifier(&name) {
                return Err(EmbedError::InvalidIdentifier {
                    name,
                    path: file.path.clone(),
                });
            }
            if let Some(first) = seen.get(&name) {
                return Err(EmbedError::NameCollision {
                    name,
                    first: first.clone(),
                    second: file.path.clone(),
                });
            }
            seen.insert(name.clone(), file.path.clone());
        }

        constants.push(EmittedConstant {
            name,
            source: file.path.clone(),
        });
    }

    Ok(constants)
}
