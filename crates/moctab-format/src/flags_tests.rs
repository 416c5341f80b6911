use crate::{EnumFlags, MethodFlags, PropertyFlags};

#[test]
fn method_flags_describe_role_access_and_markers() {
    let flags = MethodFlags::SIGNAL | MethodFlags::ACCESS_PROTECTED | MethodFlags::CLONED;

    assert_eq!(flags.bits(), 0x25);
    assert_eq!(flags.describe(), "signal protected cloned");
}

#[test]
fn method_flags_zero_is_private_method() {
    let flags = MethodFlags::empty();

    assert_eq!(flags.describe(), "method private");
    assert_eq!(flags.role(), MethodFlags::METHOD);
    assert_eq!(flags.access(), MethodFlags::ACCESS_PRIVATE);
}

#[test]
fn role_and_access_are_masked_fields() {
    let constructor = MethodFlags::CONSTRUCTOR | MethodFlags::ACCESS_PUBLIC;
    let slot = MethodFlags::SLOT | MethodFlags::ACCESS_PRIVATE | MethodFlags::SCRIPTABLE;

    assert_eq!(constructor.describe(), "constructor public");
    assert_eq!(slot.describe(), "slot private scriptable");
    // A slot word carries no signal bit even though 0xc covers both.
    assert_ne!(slot.role(), MethodFlags::CONSTRUCTOR);
    assert!(!slot.contains(MethodFlags::SIGNAL));
}

#[test]
fn unknown_bits_survive_decoding() {
    let flags = MethodFlags::from_bits_retain(0x1_0006);

    assert_eq!(flags.bits(), 0x1_0006);
    assert_eq!(flags.describe(), "signal public");
}

#[test]
fn property_flags_describe_in_bit_order() {
    let mut flags = PropertyFlags::READABLE | PropertyFlags::RESOLVE_STORED;
    flags |= PropertyFlags::FINAL;

    assert_eq!(flags.describe(), "readable final stored?");
    assert_eq!(flags.bits(), 0x20801);
}

#[test]
fn enum_flag_bit() {
    assert_eq!(EnumFlags::IS_FLAG.bits(), 1);
    assert!(EnumFlags::from_bits_retain(1).contains(EnumFlags::IS_FLAG));
    assert!(!EnumFlags::empty().contains(EnumFlags::IS_FLAG));
}
