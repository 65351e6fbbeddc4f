// CLI module
// Argument parsing for the shader-embed binary

mod args;

pub use args::Cli;
