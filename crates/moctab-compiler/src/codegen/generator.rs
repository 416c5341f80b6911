//! Code generator state.

use std::fmt;

use moctab_core::ClassDescription;

use crate::Config;
use crate::emit::Emitted;

pub struct CodeGenerator<'a> {
    pub(super) class: &'a ClassDescription,
    pub(super) emitted: &'a Emitted,
    pub(super) config: &'a Config,
    /// Class name usable inside identifiers.
    pub(super) ident: String,
    pub(super) output: String,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(class: &'a ClassDescription, emitted: &'a Emitted, config: &'a Config) -> Self {
        Self {
            class,
            emitted,
            config,
            ident: class.identifier(),
            output: String::new(),
        }
    }

    pub fn render(mut self) -> Result<String, fmt::Error> {
        self.write_data_array()?;
        self.write_string_data()?;
        self.write_static_record()?;

        if self.class.has_introspection_root {
            self.write_meta_object()?;
            self.write_metacast()?;
            self.write_metacall()?;
            self.write_static_metacall()?;
            self.write_signals()?;
        }

        Ok(self.output)
    }
}
