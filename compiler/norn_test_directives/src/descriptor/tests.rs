use super::*;

static WITH_STDLIB: DirectiveDescriptor =
    DirectiveDescriptor::flag("WITH_STDLIB", "Links the standard library");

static MODULE_NAME: DirectiveDescriptor =
    DirectiveDescriptor::valued("MODULE_NAME", "Overrides the compiled module name");

static LANGUAGE_VERSION: DirectiveDescriptor = DirectiveDescriptor::valued_with(
    "LANGUAGE_VERSION",
    "Pins the language version the test compiles under",
    is_version,
);

fn is_version(value: &str) -> bool {
    value.split('.').count() == 2 && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[test]
fn flag_takes_no_values() {
    assert!(!WITH_STDLIB.takes_values());
    assert!(!WITH_STDLIB.accepts_value("anything"));
}

#[test]
fn valued_accepts_any_value_without_validator() {
    assert!(MODULE_NAME.takes_values());
    assert!(MODULE_NAME.accepts_value("box"));
    assert!(MODULE_NAME.accepts_value(""));
}

#[test]
fn validator_gates_values() {
    assert!(LANGUAGE_VERSION.takes_values());
    assert!(LANGUAGE_VERSION.accepts_value("1.4"));
    assert!(!LANGUAGE_VERSION.accepts_value("latest"));
    assert!(!LANGUAGE_VERSION.accepts_value("1.4.0"));
}

#[test]
fn name_and_description_are_exposed() {
    assert_eq!(WITH_STDLIB.name(), "WITH_STDLIB");
    assert_eq!(WITH_STDLIB.description(), "Links the standard library");
    assert!(matches!(WITH_STDLIB.kind(), DirectiveKind::Flag));
}
