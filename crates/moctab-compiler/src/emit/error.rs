//! Error types for table emission.

use moctab_core::DescriptionError;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The description breaks the front-end contract.
    #[error(transparent)]
    Description(#[from] DescriptionError),

    /// The data array would not be addressable with the runtime's `int` indices.
    #[error("data array needs {0} words (max 2147483647)")]
    TableTooLarge(usize),

    #[error("failed to format generated source")]
    Fmt(#[from] std::fmt::Error),
}
