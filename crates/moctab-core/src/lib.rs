#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the moctab meta-object table compiler.
//!
//! Two layers:
//! - **Description layer**: the fully-resolved shape of one introspectable class,
//!   as produced by a front-end (members, properties, enums, annotations)
//! - **Expansion layer**: clone enumeration over callable members, shared by every
//!   pass that needs per-overload indices

pub mod utils;

mod clones;
mod description;
mod invariants;
mod types;
mod validate;


pub use clones::{INVOKABLE_ROLES, MemberRole, MethodClone};
pub use description::{
    Access, Attribute, CallableMember, ClassDescription, EnumKey, EnumMember, FlagValue,
    Parameter, PropertyMember,
};
pub use types::{NamedType, TypeRef};
pub use validate::DescriptionError;

/// Result type for description loading and validation.
pub type Result<T> = std::result::Result<T, DescriptionError>;
