//! Front-end contract checks.
//!
//! Generation assumes a well-formed description. These checks run once when a
//! description enters the system so that later passes can index freely.

use crate::clones::MemberRole;
use crate::description::ClassDescription;

/// A description that breaks the front-end contract, or could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    #[error("invalid class description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("class description has an empty qualified name")]
    EmptyClassName,

    #[error("{role} `{name}` requires {required} arguments but declares only {declared}")]
    RequiredArgsExceedParameters {
        role: MemberRole,
        name: String,
        required: usize,
        declared: usize,
    },

    #[error("property #{index} has an empty name")]
    UnnamedProperty { index: usize },

    #[error("property `{property}` has an empty type")]
    UntypedProperty { property: String },

    #[error(
        "property `{property}` notifies through method {signal}, \
         but the class declares {signal_count} signal entries"
    )]
    DanglingNotify {
        property: String,
        signal: u32,
        signal_count: usize,
    },

    #[error(
        "property `{property}` notifies through method {signal}, \
         which is a reduced-arity clone of signal `{of}`"
    )]
    NotifyOnClone {
        property: String,
        signal: u32,
        of: String,
    },
}

impl ClassDescription {
    /// Check the front-end contract.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        if self.qualified_name.trim().is_empty() {
            return Err(DescriptionError::EmptyClassName);
        }

        for role in [
            MemberRole::Signal,
            MemberRole::Slot,
            MemberRole::Method,
            MemberRole::Constructor,
        ] {
            for member in self.members(role) {
                let required = member.min_required_args();
                let declared = member.parameters.len();
                if required > declared {
                    return Err(DescriptionError::RequiredArgsExceedParameters {
                        role,
                        name: member.name.clone(),
                        required,
                        declared,
                    });
                }
            }
        }

        let signal_count = self.signal_count();
        for (index, property) in self.properties.iter().enumerate() {
            if property.name.is_empty() {
                return Err(DescriptionError::UnnamedProperty { index });
            }
            if property.ty.trim().is_empty() {
                return Err(DescriptionError::UntypedProperty {
                    property: property.name.clone(),
                });
            }
            let Some(signal) = property.notify else {
                continue;
            };
            if signal as usize >= signal_count {
                return Err(DescriptionError::DanglingNotify {
                    property: property.name.clone(),
                    signal,
                    signal_count,
                });
            }
            // In range but not canonical: the index falls inside the clone
            // run of the last signal starting at or before it.
            if let Some((_, of)) = self
                .canonical_signals()
                .take_while(|(start, _)| *start <= signal as usize)
                .last()
                .filter(|(start, _)| *start != signal as usize)
            {
                return Err(DescriptionError::NotifyOnClone {
                    property: property.name.clone(),
                    signal,
                    of: of.name.clone(),
                });
            }
        }

        Ok(())
    }
}
