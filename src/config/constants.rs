// Project-wide constants
//
// Centralised here so file names and the generated-code format have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Extension appended to the derived output path.
pub const DEFAULT_EXTENSION: &str = ".h";

/// Settings file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "shader-embed.toml";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "shader_embed=debug";

/// Type prefix of every emitted declaration.
pub const DECLARATION_PREFIX: &str = "const char *";

/// Closing line of every emitted constant.
///
/// The explicit `\0` sits on top of the terminator the C compiler already
/// appends. Downstream consumers rely on the exact bytes.
pub const BLOCK_TERMINATOR: &str = "\"\\0\";";
