//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::description::CallableMember;

impl CallableMember {
    pub(crate) fn ensure_arity(&self) -> usize {
        let declared = self.parameters.len();
        let required = self.min_required_args();
        declared.checked_sub(required).unwrap_or_else(|| {
            panic!(
                "CallableMember: `{}` requires {required} arguments but declares {declared} \
                 (front-end must validate arity before generation)",
                self.name
            )
        })
    }
}
