//! Test module model.

use std::fmt;

use norn_test_directives::{
    parse_directives, DirectiveParseError, DirectiveRegistry, RegisteredDirectives,
};

use crate::backend::{
    applicable_backends, BackendKind, BackendSet, ParseTargetBackendError, TargetBackend,
};
use crate::platform::TargetPlatform;
use crate::suppressor;

/// One compilation unit of a test, read-only once built.
///
/// The `IGNORE_BACKEND` values are resolved to typed [`TargetBackend`]s at
/// construction, so the post-analysis checks run infallibly: a bad backend
/// name is rejected here, not mid-check.
#[derive(Clone, Debug)]
pub struct TestModule {
    name: String,
    directives: RegisteredDirectives,
    ignored_backends: Vec<TargetBackend>,
    backend_kind: BackendKind,
    target_platform: TargetPlatform,
}

impl TestModule {
    /// Build a module from already-parsed directives.
    ///
    /// Re-validates the `IGNORE_BACKEND` values: hand-built directive
    /// storage can hold strings the parser would have rejected.
    pub fn new(
        name: impl Into<String>,
        directives: RegisteredDirectives,
        backend_kind: BackendKind,
        target_platform: TargetPlatform,
    ) -> Result<Self, TestModuleError> {
        let ignored_backends = suppressor::ignored_backends(&directives)?;
        Ok(TestModule {
            name: name.into(),
            directives,
            ignored_backends,
            backend_kind,
            target_platform,
        })
    }

    /// Build a module by parsing the directive header of its source.
    pub fn from_source(
        name: impl Into<String>,
        source: &str,
        backend_kind: BackendKind,
        target_platform: TargetPlatform,
        registry: &DirectiveRegistry,
    ) -> Result<Self, TestModuleError> {
        let directives = parse_directives(source, registry)?;
        Self::new(name, directives, backend_kind, target_platform)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directives(&self) -> &RegisteredDirectives {
        &self.directives
    }

    /// Backends this module's failures are muted on, in declaration order.
    pub fn ignored_backends(&self) -> &[TargetBackend] {
        &self.ignored_backends
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend_kind
    }

    pub fn target_platform(&self) -> TargetPlatform {
        self.target_platform
    }

    /// The backends this module actually runs on.
    pub fn applicable_backends(&self) -> BackendSet {
        applicable_backends(self.backend_kind, self.target_platform)
    }
}

/// Error from building a [`TestModule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestModuleError {
    /// The directive header failed to parse.
    Directive(DirectiveParseError),
    /// An `IGNORE_BACKEND` value is not a backend name.
    Backend(ParseTargetBackendError),
}

impl fmt::Display for TestModuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directive(err) => err.fmt(f),
            Self::Backend(err) => err.fmt(f),
        }
    }
}

impl From<DirectiveParseError> for TestModuleError {
    fn from(err: DirectiveParseError) -> Self {
        TestModuleError::Directive(err)
    }
}

impl From<ParseTargetBackendError> for TestModuleError {
    fn from(err: ParseTargetBackendError) -> Self {
        TestModuleError::Backend(err)
    }
}
