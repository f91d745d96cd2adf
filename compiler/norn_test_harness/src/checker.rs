//! Post-analysis checker capability and pipeline.
//!
//! A checker transforms the failure list of a completed test run: muting
//! known failures, synthesizing stale-directive reports, and so on. The
//! harness registers its checkers in a [`CheckerPipeline`] once and runs
//! every finished test through it.

use norn_test_directives::{DirectiveRegistry, DirectivesContainer};

use crate::failure::AssertionFailure;
use crate::module::TestModule;

/// A check run after a test's analysis completes, over its failure list.
pub trait AfterAnalysisChecker {
    /// Directive containers this checker consumes. The harness assembles
    /// the parse registry for test sources from these.
    fn directives(&self) -> &'static [&'static DirectivesContainer] {
        &[]
    }

    /// Transform the failure list. Must not fail and must not mutate the
    /// modules; an unchanged `failures` means the checker declined to act.
    fn evaluate(
        &self,
        failures: Vec<AssertionFailure>,
        modules: &[TestModule],
    ) -> Vec<AssertionFailure>;
}

/// Ordered list of checkers applied sequentially.
///
/// Each checker receives the previous checker's output; the empty pipeline
/// is the identity.
#[derive(Default)]
pub struct CheckerPipeline {
    checkers: Vec<Box<dyn AfterAnalysisChecker>>,
}

impl CheckerPipeline {
    pub fn new() -> Self {
        CheckerPipeline::default()
    }

    /// Append a checker to the application order.
    pub fn register(&mut self, checker: impl AfterAnalysisChecker + 'static) {
        self.checkers.push(Box::new(checker));
    }

    /// Registry over the directive containers of every registered checker,
    /// in registration order.
    pub fn directive_registry(&self) -> DirectiveRegistry {
        DirectiveRegistry::from_containers(
            self.checkers
                .iter()
                .flat_map(|checker| checker.directives().iter().copied()),
        )
    }

    /// Run `failures` through every checker in registration order.
    pub fn evaluate(
        &self,
        failures: Vec<AssertionFailure>,
        modules: &[TestModule],
    ) -> Vec<AssertionFailure> {
        self.checkers
            .iter()
            .fold(failures, |failures, checker| {
                checker.evaluate(failures, modules)
            })
    }

    /// Number of registered checkers.
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}
