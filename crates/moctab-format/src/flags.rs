//! Flag words stored in method, property and enum rows.
//!
//! Access and role are 2-bit fields, not independent bits: `ACCESS_PRIVATE`
//! and `METHOD` are both zero, so they are read back with a masked compare
//! rather than `contains`.

bitflags::bitflags! {
    /// Access, role and marker bits of a method or constructor row.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct MethodFlags: u32 {
        const ACCESS_PRIVATE = 0x00;
        const ACCESS_PROTECTED = 0x01;
        const ACCESS_PUBLIC = 0x02;
        const ACCESS_MASK = 0x03;

        const METHOD = 0x00;
        const SIGNAL = 0x04;
        const SLOT = 0x08;
        const CONSTRUCTOR = 0x0c;
        const TYPE_MASK = 0x0c;

        const COMPATIBILITY = 0x10;
        const CLONED = 0x20;
        const SCRIPTABLE = 0x40;
        const REVISIONED = 0x80;
    }
}

impl MethodFlags {
    pub fn access(self) -> Self {
        self & Self::ACCESS_MASK
    }

    pub fn role(self) -> Self {
        self & Self::TYPE_MASK
    }

    pub fn access_name(self) -> &'static str {
        let access = self.access();
        if access == Self::ACCESS_PRIVATE {
            "private"
        } else if access == Self::ACCESS_PROTECTED {
            "protected"
        } else {
            "public"
        }
    }

    pub fn role_name(self) -> &'static str {
        let role = self.role();
        if role == Self::METHOD {
            "method"
        } else if role == Self::SIGNAL {
            "signal"
        } else if role == Self::SLOT {
            "slot"
        } else {
            "constructor"
        }
    }

    /// Role, access, then set markers, space separated.
    pub fn describe(self) -> String {
        let mut parts = vec![self.role_name(), self.access_name()];
        for (flag, name) in [
            (Self::COMPATIBILITY, "compat"),
            (Self::CLONED, "cloned"),
            (Self::SCRIPTABLE, "scriptable"),
            (Self::REVISIONED, "revisioned"),
        ] {
            if self.contains(flag) {
                parts.push(name);
            }
        }
        parts.join(" ")
    }
}

bitflags::bitflags! {
    /// Bits of a property row. `RESOLVE_*` bits defer the attribute to runtime.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u32 {
        const READABLE = 0x0000_0001;
        const WRITABLE = 0x0000_0002;
        const RESETTABLE = 0x0000_0004;
        const ENUM_OR_FLAG = 0x0000_0008;
        const STD_CPP_SET = 0x0000_0100;
        const CONSTANT = 0x0000_0400;
        const FINAL = 0x0000_0800;
        const DESIGNABLE = 0x0000_1000;
        const RESOLVE_DESIGNABLE = 0x0000_2000;
        const SCRIPTABLE = 0x0000_4000;
        const RESOLVE_SCRIPTABLE = 0x0000_8000;
        const STORED = 0x0001_0000;
        const RESOLVE_STORED = 0x0002_0000;
        const EDITABLE = 0x0004_0000;
        const RESOLVE_EDITABLE = 0x0008_0000;
        const USER = 0x0010_0000;
        const RESOLVE_USER = 0x0020_0000;
        const NOTIFY = 0x0040_0000;
        const REVISIONED = 0x0080_0000;
    }
}

impl PropertyFlags {
    const NAMES: [(Self, &'static str); 19] = [
        (Self::READABLE, "readable"),
        (Self::WRITABLE, "writable"),
        (Self::RESETTABLE, "resettable"),
        (Self::ENUM_OR_FLAG, "enum"),
        (Self::STD_CPP_SET, "std-set"),
        (Self::CONSTANT, "constant"),
        (Self::FINAL, "final"),
        (Self::DESIGNABLE, "designable"),
        (Self::RESOLVE_DESIGNABLE, "designable?"),
        (Self::SCRIPTABLE, "scriptable"),
        (Self::RESOLVE_SCRIPTABLE, "scriptable?"),
        (Self::STORED, "stored"),
        (Self::RESOLVE_STORED, "stored?"),
        (Self::EDITABLE, "editable"),
        (Self::RESOLVE_EDITABLE, "editable?"),
        (Self::USER, "user"),
        (Self::RESOLVE_USER, "user?"),
        (Self::NOTIFY, "notify"),
        (Self::REVISIONED, "revisioned"),
    ];

    /// Names of the set bits in bit order. Runtime-resolved bits end in `?`.
    pub fn describe(self) -> String {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

bitflags::bitflags! {
    /// Bits of an enum row.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct EnumFlags: u32 {
        const IS_FLAG = 0x1;
    }
}
