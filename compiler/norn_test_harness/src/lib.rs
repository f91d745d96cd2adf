//! Test model and post-analysis checks for the Norn test framework.
//!
//! A compiled test produces a list of [`AssertionFailure`]s. Before the
//! harness reports a verdict, it runs the failures through a
//! [`CheckerPipeline`] of [`AfterAnalysisChecker`]s, each of which may mute
//! failures or synthesize new ones. The pipeline's output is the final
//! verdict: empty means pass, non-empty means fail with the listed messages.
//!
//! The one checker shipped here is the [`IgnoredBackendSuppressor`]: a test
//! carrying `// IGNORE_BACKEND: <backend>` is expected to fail while that
//! backend is under test, so its failures are muted. When such a test
//! unexpectedly passes, the suppressor reports a failure instead, telling
//! the maintainer to remove the now-stale directive.

pub mod backend;
pub mod checker;
pub mod failure;
pub mod module;
pub mod platform;
pub mod suppressor;

pub use backend::{
    applicable_backends, BackendKind, BackendSet, ParseTargetBackendError, TargetBackend,
};
pub use checker::{AfterAnalysisChecker, CheckerPipeline};
pub use failure::AssertionFailure;
pub use module::{TestModule, TestModuleError};
pub use platform::TargetPlatform;
pub use suppressor::{
    ignored_backends, IgnoredBackendSuppressor, CODEGEN_DIRECTIVES, IGNORE_BACKEND,
};
