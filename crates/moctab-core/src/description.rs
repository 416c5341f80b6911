//! The class description consumed by the table compiler.
//!
//! A description is built once per analyzed class by the front-end and is
//! read-only afterwards. Field order inside every sequence is significant: it
//! fixes method indices, property indices and string-table order.

use serde::{Deserialize, Serialize};

use crate::clones::MemberRole;
use crate::types::TypeRef;
use crate::validate::DescriptionError;

/// Fully-resolved introspectable shape of one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDescription {
    /// Qualified class name, e.g. `app::Counter`.
    pub qualified_name: String,
    /// The single base class consulted for chaining. Empty when there is none.
    #[serde(default)]
    pub base_name: String,
    /// Whether the class takes part in the introspection runtime (dispatch glue
    /// is emitted only when it does).
    #[serde(default = "default_true")]
    pub has_introspection_root: bool,
    /// Free-form key/value annotations, emitted in order.
    #[serde(default)]
    pub class_info: Vec<(String, String)>,
    #[serde(default)]
    pub signals: Vec<CallableMember>,
    #[serde(default)]
    pub slots: Vec<CallableMember>,
    #[serde(default)]
    pub methods: Vec<CallableMember>,
    #[serde(default)]
    pub constructors: Vec<CallableMember>,
    #[serde(default)]
    pub properties: Vec<PropertyMember>,
    #[serde(default)]
    pub enums: Vec<EnumMember>,
}

fn default_true() -> bool {
    true
}

impl ClassDescription {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            has_introspection_root: true,
            ..Self::default()
        }
    }

    /// Parse a description from JSON and check the front-end contract.
    pub fn from_json(json: &str) -> Result<Self, DescriptionError> {
        let class: Self = serde_json::from_str(json)?;
        class.validate()?;
        Ok(class)
    }

    pub fn to_json(&self) -> Result<String, DescriptionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Qualified name with `:` replaced by `_`, usable inside C identifiers.
    pub fn identifier(&self) -> String {
        crate::utils::mangle_qualified_name(&self.qualified_name)
    }

    pub fn has_base(&self) -> bool {
        !self.base_name.is_empty()
    }

    /// Declared members of one role, in declaration order.
    pub fn members(&self, role: MemberRole) -> &[CallableMember] {
        match role {
            MemberRole::Signal => &self.signals,
            MemberRole::Slot => &self.slots,
            MemberRole::Method => &self.methods,
            MemberRole::Constructor => &self.constructors,
        }
    }
}

/// Visibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    Public,
    Protected,
    Private,
}

/// Markers sourced from free-form member annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Scriptable,
    Compat,
    Revision(u32),
}

/// A signal, slot, invokable method or constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallableMember {
    /// Member name; empty for constructors and anonymous members.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub result: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Smallest argument count the member accepts. Defaults to all parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_required_args: Option<usize>,
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_pure: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl CallableMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_result(mut self, result: impl Into<TypeRef>) -> Self {
        self.result = result.into();
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Mark the trailing parameters beyond `count` as defaulted.
    pub fn with_min_required_args(mut self, count: usize) -> Self {
        self.min_required_args = Some(count);
        self
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn min_required_args(&self) -> usize {
        self.min_required_args.unwrap_or(self.parameters.len())
    }

    /// Number of reduced-arity overloads implied by default arguments.
    ///
    /// # Panics
    /// Panics if `min_required_args` exceeds the parameter count; validated
    /// descriptions never do.
    pub fn clone_count(&self) -> usize {
        self.ensure_arity()
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// Revision from a `revision(N)` annotation, if any.
    pub fn revision(&self) -> Option<u32> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Revision(n) => Some(*n),
            _ => None,
        })
    }
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Parameter {
    pub fn new(ty: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: Some(name.into()),
        }
    }

    pub fn unnamed(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            name: None,
        }
    }
}

/// Tri-state value of a boolean property attribute.
///
/// On the wire: absent or `null` is unset, `true`/`false` (or the strings
/// `"true"`/`"false"`) are literals, any other string is an expression
/// evaluated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<RawFlagValue>", into = "Option<RawFlagValue>")]
pub enum FlagValue {
    /// Resolve at runtime.
    #[default]
    Unset,
    Literal(bool),
    Expression(String),
}

impl FlagValue {
    pub fn expression(&self) -> Option<&str> {
        match self {
            FlagValue::Expression(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, FlagValue::Expression(_))
    }
}

impl From<&str> for FlagValue {
    fn from(text: &str) -> Self {
        match text.trim() {
            "" => FlagValue::Unset,
            "true" => FlagValue::Literal(true),
            "false" => FlagValue::Literal(false),
            expr => FlagValue::Expression(expr.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFlagValue {
    Literal(bool),
    Text(String),
}

impl From<Option<RawFlagValue>> for FlagValue {
    fn from(raw: Option<RawFlagValue>) -> Self {
        match raw {
            None => FlagValue::Unset,
            Some(RawFlagValue::Literal(value)) => FlagValue::Literal(value),
            Some(RawFlagValue::Text(text)) => FlagValue::from(text.as_str()),
        }
    }
}

impl From<FlagValue> for Option<RawFlagValue> {
    fn from(value: FlagValue) -> Self {
        match value {
            FlagValue::Unset => None,
            FlagValue::Literal(value) => Some(RawFlagValue::Literal(value)),
            FlagValue::Expression(text) => Some(RawFlagValue::Text(text)),
        }
    }
}

/// A data property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub read: String,
    #[serde(default)]
    pub write: String,
    #[serde(default)]
    pub reset: String,
    #[serde(default)]
    pub member: String,
    /// Indirection prefix (e.g. `d_func()`) for accessors living in a private class.
    #[serde(default)]
    pub in_private_class: String,
    #[serde(default)]
    pub designable: FlagValue,
    #[serde(default)]
    pub scriptable: FlagValue,
    #[serde(default)]
    pub stored: FlagValue,
    #[serde(default)]
    pub editable: FlagValue,
    #[serde(default)]
    pub user: FlagValue,
    #[serde(default)]
    pub constant: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    /// Canonical method index of the notifying signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<u32>,
    /// Zero means unrevisioned.
    #[serde(default)]
    pub revision: u32,
}

impl PropertyMember {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    pub fn is_readable(&self) -> bool {
        !self.read.is_empty() || !self.member.is_empty()
    }

    pub fn is_writable(&self) -> bool {
        !self.write.is_empty() || (!self.member.is_empty() && !self.constant)
    }

    pub fn is_resettable(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Accessor prefix including the `->`, or empty.
    pub fn accessor_prefix(&self) -> String {
        if self.in_private_class.is_empty() {
            String::new()
        } else {
            format!("{}->", self.in_private_class)
        }
    }
}

/// An enumeration or flag set with front-end resolved key values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumMember {
    pub name: String,
    #[serde(default, rename = "flag")]
    pub is_flag: bool,
    #[serde(default)]
    pub keys: Vec<EnumKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumKey {
    pub name: String,
    pub value: i32,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, name: impl Into<String>, value: i32) -> Self {
        self.keys.push(EnumKey {
            name: name.into(),
            value,
        });
        self
    }
}
