use pretty_assertions::assert_eq;

use norn_test_directives::RegisteredDirectives;

use super::*;
use crate::backend::BackendKind;
use crate::platform::TargetPlatform;

const STALE_MESSAGE: &str =
    "Looks like this test can be unmuted. Remove IGNORE_BACKEND directive";

fn module(
    ignored: &[&str],
    kind: BackendKind,
    platform: TargetPlatform,
) -> TestModule {
    let mut directives = RegisteredDirectives::empty();
    if !ignored.is_empty() {
        directives.append_values(&IGNORE_BACKEND, ignored.iter().map(|s| (*s).to_string()));
    }
    TestModule::new("main", directives, kind, platform).unwrap()
}

fn one_failure() -> Vec<AssertionFailure> {
    vec![AssertionFailure::new("expected 42, got 41")]
}

fn evaluate(failures: Vec<AssertionFailure>, modules: &[TestModule]) -> Vec<AssertionFailure> {
    IgnoredBackendSuppressor.evaluate(failures, modules)
}

#[test]
fn no_directive_returns_failures_unchanged() {
    let modules = [module(&[], BackendKind::Ir, TargetPlatform::Jvm)];
    let failures = one_failure();
    assert_eq!(evaluate(failures.clone(), &modules), failures);
    assert_eq!(evaluate(Vec::new(), &modules), []);
}

#[test]
fn any_mutes_failures() {
    let modules = [module(&["ANY"], BackendKind::Classic, TargetPlatform::Jvm)];
    assert_eq!(evaluate(one_failure(), &modules), []);
}

#[test]
fn any_mutes_even_with_no_applicable_backends() {
    let modules = [module(&["ANY"], BackendKind::NoBackend, TargetPlatform::Common)];
    assert_eq!(evaluate(one_failure(), &modules), []);
}

#[test]
fn any_reports_stale_directive_without_suffix() {
    let modules = [module(&["ANY"], BackendKind::Classic, TargetPlatform::Jvm)];
    let out = evaluate(Vec::new(), &modules);
    assert_eq!(out, [AssertionFailure::new(STALE_MESSAGE)]);
}

#[test]
fn matched_backend_mutes_failures() {
    let modules = [module(&["JVM_IR"], BackendKind::Ir, TargetPlatform::Jvm)];
    assert_eq!(evaluate(one_failure(), &modules), []);
}

#[test]
fn matched_js_ir_mutes_failures() {
    let modules = [module(&["JS_IR"], BackendKind::Ir, TargetPlatform::Js)];
    assert_eq!(evaluate(one_failure(), &modules), []);
}

#[test]
fn matched_backend_reports_stale_directive_with_suffix() {
    let modules = [module(&["JS_IR"], BackendKind::Ir, TargetPlatform::Js)];
    let out = evaluate(Vec::new(), &modules);
    assert_eq!(
        out,
        [AssertionFailure::new(format!("{STALE_MESSAGE} for JS_IR"))]
    );
}

#[test]
fn suffix_lists_all_matched_backends_in_canonical_order() {
    let modules = [module(
        &["JVM_OLD", "JVM"],
        BackendKind::Classic,
        TargetPlatform::Jvm,
    )];
    let out = evaluate(Vec::new(), &modules);
    assert_eq!(
        out,
        [AssertionFailure::new(format!(
            "{STALE_MESSAGE} for JVM, JVM_OLD"
        ))]
    );
}

#[test]
fn unmatched_backend_does_not_suppress() {
    // JVM_IR is ignored, but a classic JVM module runs on JVM and JVM_OLD.
    let modules = [module(&["JVM_IR"], BackendKind::Classic, TargetPlatform::Jvm)];
    let failures = one_failure();
    assert_eq!(evaluate(failures.clone(), &modules), failures);
    assert_eq!(evaluate(Vec::new(), &modules), []);
}

#[test]
fn directive_and_backend_may_come_from_different_modules() {
    // The directive sits on a common module; the backend comes from the
    // platform module. Collection is a union across all modules.
    let modules = [
        module(&["JVM_IR"], BackendKind::NoBackend, TargetPlatform::Common),
        module(&[], BackendKind::Ir, TargetPlatform::Jvm),
    ];
    assert_eq!(evaluate(one_failure(), &modules), []);
}

#[test]
fn all_failures_are_muted_not_just_one() {
    let modules = [module(&["JVM_IR"], BackendKind::Ir, TargetPlatform::Jvm)];
    let failures = vec![
        AssertionFailure::new("first"),
        AssertionFailure::new("second"),
        AssertionFailure::new("third"),
    ];
    assert_eq!(evaluate(failures, &modules), []);
}

#[test]
fn no_modules_means_no_suppression() {
    let failures = one_failure();
    assert_eq!(evaluate(failures.clone(), &[]), failures);
}

#[test]
fn directive_container_exposes_ignore_backend() {
    let containers = IgnoredBackendSuppressor.directives();
    assert_eq!(containers.len(), 1);
    assert!(containers[0].find("IGNORE_BACKEND").is_some());
}

#[test]
fn ignored_backends_accessor_parses_values() {
    let mut directives = RegisteredDirectives::empty();
    directives.append_values(&IGNORE_BACKEND, ["JVM".to_string(), "ANY".to_string()]);
    assert_eq!(
        ignored_backends(&directives).unwrap(),
        [TargetBackend::Jvm, TargetBackend::Any]
    );
}

#[test]
fn ignored_backends_accessor_rejects_unknown_names() {
    let mut directives = RegisteredDirectives::empty();
    directives.append_values(&IGNORE_BACKEND, ["NATIVE".to_string()]);
    assert!(ignored_backends(&directives).is_err());
}

mod proptest_contract {
    use proptest::prelude::*;

    use super::*;

    fn failures(messages: Vec<String>) -> Vec<AssertionFailure> {
        messages.into_iter().map(AssertionFailure::new).collect()
    }

    proptest! {
        #[test]
        fn without_directives_the_suppressor_is_identity(
            messages in proptest::collection::vec(".*", 0..8)
        ) {
            let modules = [module(&[], BackendKind::Ir, TargetPlatform::Jvm)];
            let input = failures(messages);
            prop_assert_eq!(evaluate(input.clone(), &modules), input);
        }

        #[test]
        fn any_directive_flips_the_verdict(
            messages in proptest::collection::vec(".*", 0..8)
        ) {
            let modules = [module(&["ANY"], BackendKind::Classic, TargetPlatform::Js)];
            let input = failures(messages);
            let was_failing = !input.is_empty();
            let out = evaluate(input, &modules);
            if was_failing {
                prop_assert!(out.is_empty());
            } else {
                prop_assert_eq!(out, [AssertionFailure::new(STALE_MESSAGE)]);
            }
        }
    }
}
