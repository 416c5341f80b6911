#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Meta-object table compiler.
//!
//! Turns one [`ClassDescription`] into the revision-7 data array, its string
//! table and the dispatch glue the introspection runtime links against.
//!
//! Pipeline:
//! - `emit`: layout, string interning and table encoding
//! - `codegen`: C++ source text for the tables, the static record and the
//!   dispatch functions

pub mod codegen;
pub mod emit;

mod config;

#[cfg(test)]
pub mod test_utils;


use moctab_core::ClassDescription;
use tracing::info;

pub use config::Config;
pub use emit::{EmitError, Emitted, emit};

/// Result type for generation.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Everything produced for one class.
#[derive(Debug, Clone)]
pub struct Generated {
    /// C++ source: tables, static record and, for introspection
    /// participants, the dispatch functions.
    pub source: String,
    /// Numeric data array including the trailing terminator.
    pub data: Vec<u32>,
    /// String table entries in index order.
    pub strings: Vec<String>,
}

impl Generated {
    pub fn string_refs(&self) -> Vec<&str> {
        self.strings.iter().map(String::as_str).collect()
    }
}

/// Validate `class`, encode its tables and render the source.
pub fn generate(class: &ClassDescription, config: &Config) -> Result<Generated> {
    let emitted = emit(class)?;
    let source = codegen::render(class, &emitted, config)?;
    let data = emitted.table.values();

    info!(
        class = %class.qualified_name,
        methods = class.method_count(),
        properties = class.properties.len(),
        constructors = class.constructor_count(),
        strings = emitted.strings.len(),
        words = data.len(),
        "generated meta-object"
    );

    Ok(Generated {
        source,
        data,
        strings: emitted.strings.into_strings(),
    })
}
