//! Backend-specific failure suppression.
//!
//! A codegen test known to be broken on one backend carries an
//! `IGNORE_BACKEND` directive naming it. While that backend is under test
//! the module's failures are muted; when the test unexpectedly passes, the
//! suppressor reports a single failure telling the maintainer to remove the
//! stale directive. Tests without the directive pass through untouched —
//! suppression is opt-in per test.

use norn_test_directives::{DirectiveDescriptor, DirectivesContainer, RegisteredDirectives};

use crate::backend::{BackendSet, ParseTargetBackendError, TargetBackend};
use crate::checker::AfterAnalysisChecker;
use crate::failure::AssertionFailure;
use crate::module::TestModule;

/// Mutes the test's failures while any of the listed backends is under test.
pub static IGNORE_BACKEND: DirectiveDescriptor = DirectiveDescriptor::valued_with(
    "IGNORE_BACKEND",
    "Mutes failures while any of the listed backends is under test",
    is_target_backend,
);

/// Directives consumed by the codegen test suites.
pub static CODEGEN_DIRECTIVES: DirectivesContainer =
    DirectivesContainer::new("codegen", &[&IGNORE_BACKEND]);

static CODEGEN_CONTAINERS: &[&DirectivesContainer] = &[&CODEGEN_DIRECTIVES];

fn is_target_backend(value: &str) -> bool {
    value.parse::<TargetBackend>().is_ok()
}

/// Resolve a module's `IGNORE_BACKEND` values to typed backends.
///
/// Parser-produced storage never fails here; hand-built storage can.
pub fn ignored_backends(
    directives: &RegisteredDirectives,
) -> Result<Vec<TargetBackend>, ParseTargetBackendError> {
    directives
        .values_of(&IGNORE_BACKEND)
        .iter()
        .map(|value| value.parse())
        .collect()
}

/// The `IGNORE_BACKEND` post-analysis check.
#[derive(Debug, Default)]
pub struct IgnoredBackendSuppressor;

impl AfterAnalysisChecker for IgnoredBackendSuppressor {
    fn directives(&self) -> &'static [&'static DirectivesContainer] {
        CODEGEN_CONTAINERS
    }

    fn evaluate(
        &self,
        failures: Vec<AssertionFailure>,
        modules: &[TestModule],
    ) -> Vec<AssertionFailure> {
        let ignored: Vec<TargetBackend> = modules
            .iter()
            .flat_map(|module| module.ignored_backends().iter().copied())
            .collect();
        if ignored.is_empty() {
            return failures;
        }

        let targets: BackendSet = modules
            .iter()
            .map(TestModule::applicable_backends)
            .fold(BackendSet::empty(), BackendSet::union);
        let matched = ignored.iter().copied().collect::<BackendSet>() & targets;

        if ignored.contains(&TargetBackend::Any) {
            process_failures(failures, None)
        } else if !matched.is_empty() {
            process_failures(failures, Some(matched))
        } else {
            failures
        }
    }
}

/// Mute real failures; report an unexpected pass as a stale directive.
fn process_failures(
    failures: Vec<AssertionFailure>,
    matched: Option<BackendSet>,
) -> Vec<AssertionFailure> {
    if !failures.is_empty() {
        tracing::debug!("muted {} failure(s) under IGNORE_BACKEND", failures.len());
        return Vec::new();
    }

    const BASE: &str = "Looks like this test can be unmuted. Remove IGNORE_BACKEND directive";
    let message = match matched {
        Some(matched) => format!("{BASE} for {matched}"),
        None => BASE.to_string(),
    };
    tracing::debug!("test under IGNORE_BACKEND passed, reporting stale directive");
    vec![AssertionFailure::new(message)]
}

#[cfg(test)]
mod tests;
