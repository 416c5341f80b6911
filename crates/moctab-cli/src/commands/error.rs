use std::io;
use std::path::PathBuf;

use moctab_compiler::EmitError;
use moctab_core::DescriptionError;
use moctab_format::ViewError;

/// Failure of one CLI command. Paths are kept so messages name the input.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Description {
        path: PathBuf,
        source: DescriptionError,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: {source}", path.display())]
    Generate { path: PathBuf, source: EmitError },

    #[error("{}: generated table does not decode: {source}", path.display())]
    Decode { path: PathBuf, source: ViewError },

    #[error("failed to write output: {0}")]
    Stdout(#[source] io::Error),
}
