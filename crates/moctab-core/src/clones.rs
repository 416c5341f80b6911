//! Clone expansion of callable members.
//!
//! A member with defaulted trailing parameters is exposed to the runtime as
//! one entry per accepted arity: clone 0 is the full-arity form, clone `c`
//! drops the last `c` parameters. Every pass that assigns or consumes method
//! indices walks members through [`ClassDescription::expand`], so the order is
//! defined in exactly one place.

use std::fmt;

use crate::description::{CallableMember, ClassDescription, Parameter};

/// The role a callable plays in the method table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberRole {
    Signal,
    Slot,
    Method,
    Constructor,
}

/// Roles sharing the contiguous method table, in table order.
pub const INVOKABLE_ROLES: [MemberRole; 3] =
    [MemberRole::Signal, MemberRole::Slot, MemberRole::Method];

impl MemberRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberRole::Signal => "signal",
            MemberRole::Slot => "slot",
            MemberRole::Method => "method",
            MemberRole::Constructor => "constructor",
        }
    }

    /// Plural label used for table comments.
    pub fn plural(self) -> &'static str {
        match self {
            MemberRole::Signal => "signals",
            MemberRole::Slot => "slots",
            MemberRole::Method => "methods",
            MemberRole::Constructor => "constructors",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One expanded overload of a callable member.
#[derive(Debug, Clone, Copy)]
pub struct MethodClone<'a> {
    pub role: MemberRole,
    pub member: &'a CallableMember,
    /// Number of trailing parameters dropped; 0 is the canonical form.
    pub clone: usize,
}

impl<'a> MethodClone<'a> {
    /// Effective argument count of this overload.
    pub fn argc(&self) -> usize {
        self.member.parameters.len() - self.clone
    }

    pub fn is_cloned(&self) -> bool {
        self.clone > 0
    }

    /// Parameters accepted by this overload.
    pub fn parameters(&self) -> &'a [Parameter] {
        &self.member.parameters[..self.argc()]
    }
}

impl CallableMember {
    /// Every overload of this member, canonical form first.
    pub fn clones(&self, role: MemberRole) -> impl Iterator<Item = MethodClone<'_>> {
        (0..=self.clone_count()).map(move |clone| MethodClone {
            role,
            member: self,
            clone,
        })
    }
}

impl ClassDescription {
    /// Expanded overloads of one role, in declaration order.
    pub fn expand(&self, role: MemberRole) -> impl Iterator<Item = MethodClone<'_>> {
        self.members(role)
            .iter()
            .flat_map(move |member| member.clones(role))
    }

    /// Expanded overloads of all signals, slots and methods, in table order.
    pub fn expand_invokables(&self) -> impl Iterator<Item = MethodClone<'_>> {
        INVOKABLE_ROLES
            .into_iter()
            .flat_map(move |role| self.expand(role))
    }

    /// Number of rows the role contributes to its table.
    pub fn expanded_count(&self, role: MemberRole) -> usize {
        self.members(role).iter().map(|m| m.clone_count() + 1).sum()
    }

    /// Number of rows in the method table (signals, slots and methods).
    pub fn method_count(&self) -> usize {
        INVOKABLE_ROLES
            .into_iter()
            .map(|role| self.expanded_count(role))
            .sum()
    }

    pub fn signal_count(&self) -> usize {
        self.expanded_count(MemberRole::Signal)
    }

    pub fn constructor_count(&self) -> usize {
        self.expanded_count(MemberRole::Constructor)
    }

    /// Declared signals paired with the method index of their canonical form.
    pub fn canonical_signals(&self) -> impl Iterator<Item = (usize, &CallableMember)> {
        self.signals.iter().scan(0usize, |next, member| {
            let index = *next;
            *next += member.clone_count() + 1;
            Some((index, member))
        })
    }
}
