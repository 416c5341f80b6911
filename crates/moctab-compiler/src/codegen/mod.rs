//! C++ source generation from an emitted table.
//!
//! Output order: data array, string data, static meta-object record and, for
//! introspection participants, `metaObject`, `qt_metacast`, `qt_metacall`,
//! `qt_static_metacall` and one function per signal.

mod generator;
mod introspection;
mod metacall;
mod signals;
mod static_metacall;
mod tables;
mod types;

#[cfg(test)]
mod metacall_tests;
#[cfg(test)]
mod tables_tests;

use moctab_core::ClassDescription;

pub use generator::CodeGenerator;
pub use tables::packed_literal;

use crate::Config;
use crate::emit::{EmitError, Emitted};

/// Render the complete source for one class.
pub fn render(
    class: &ClassDescription,
    emitted: &Emitted,
    config: &Config,
) -> Result<String, EmitError> {
    Ok(CodeGenerator::new(class, emitted, config).render()?)
}
