//! Target backends and the backend-kind/platform mapping.
//!
//! A [`TargetBackend`] names one concrete code-generation pipeline under
//! test. Tests refer to backends by their canonical upper-case names in
//! directives (`// IGNORE_BACKEND: JVM_IR`), so the enum round-trips
//! through [`FromStr`]/[`Display`].
//!
//! Which backends apply to a module is a fixed, total function of its
//! [`BackendKind`] and [`TargetPlatform`], implemented as the single flat
//! lookup in [`applicable_backends`].

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::platform::TargetPlatform;

/// A concrete backend a test can run against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetBackend {
    /// Classic JVM backend.
    Jvm,
    /// Pre-rewrite JVM backend, kept for regression coverage.
    JvmOld,
    /// Classic JS backend.
    Js,
    /// IR-based JVM backend.
    JvmIr,
    /// IR-based JS backend.
    JsIr,
    /// Wildcard matching every backend. Valid only in ignore directives;
    /// no module ever computes `Any` as an applicable backend.
    Any,
}

impl TargetBackend {
    /// Every backend, in declaration order. Display and iteration order
    /// follow this list.
    pub const ALL: [TargetBackend; 6] = [
        TargetBackend::Jvm,
        TargetBackend::JvmOld,
        TargetBackend::Js,
        TargetBackend::JvmIr,
        TargetBackend::JsIr,
        TargetBackend::Any,
    ];

    /// Canonical name as written in directives.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetBackend::Jvm => "JVM",
            TargetBackend::JvmOld => "JVM_OLD",
            TargetBackend::Js => "JS",
            TargetBackend::JvmIr => "JVM_IR",
            TargetBackend::JsIr => "JS_IR",
            TargetBackend::Any => "ANY",
        }
    }

    /// The singleton [`BackendSet`] holding this backend.
    pub const fn as_set(self) -> BackendSet {
        match self {
            TargetBackend::Jvm => BackendSet::JVM,
            TargetBackend::JvmOld => BackendSet::JVM_OLD,
            TargetBackend::Js => BackendSet::JS,
            TargetBackend::JvmIr => BackendSet::JVM_IR,
            TargetBackend::JsIr => BackendSet::JS_IR,
            TargetBackend::Any => BackendSet::ANY,
        }
    }
}

impl fmt::Display for TargetBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetBackend {
    type Err = ParseTargetBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetBackend::ALL
            .into_iter()
            .find(|backend| backend.as_str() == s)
            .ok_or_else(|| ParseTargetBackendError {
                value: s.to_string(),
            })
    }
}

/// Error from parsing a backend name that is not one of the canonical names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTargetBackendError {
    value: String,
}

impl ParseTargetBackendError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseTargetBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown target backend '{}'", self.value)
    }
}

bitflags! {
    /// Set of target backends, one bit per [`TargetBackend`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct BackendSet: u8 {
        const JVM = 1 << 0;
        const JVM_OLD = 1 << 1;
        const JS = 1 << 2;
        const JVM_IR = 1 << 3;
        const JS_IR = 1 << 4;
        const ANY = 1 << 5;
    }
}

impl fmt::Display for BackendSet {
    /// Comma-joined canonical names, in [`TargetBackend::ALL`] order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for backend in TargetBackend::ALL {
            if self.contains(backend.as_set()) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(backend.as_str())?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromIterator<TargetBackend> for BackendSet {
    fn from_iter<I: IntoIterator<Item = TargetBackend>>(iter: I) -> Self {
        iter.into_iter()
            .fold(BackendSet::empty(), |set, backend| set | backend.as_set())
    }
}

/// Which code-generation pipeline a test module is compiled through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Classic backend.
    Classic,
    /// IR-based backend.
    Ir,
    /// Frontend-only tests with no code generation.
    NoBackend,
}

/// The backends a module with the given kind and platform actually runs on.
///
/// Total over all `(kind, platform)` pairs; yields at most two backends and
/// never [`TargetBackend::Any`].
pub fn applicable_backends(kind: BackendKind, platform: TargetPlatform) -> BackendSet {
    match (kind, platform) {
        (BackendKind::Classic, TargetPlatform::Jvm) => BackendSet::JVM.union(BackendSet::JVM_OLD),
        (BackendKind::Classic, TargetPlatform::Js) => BackendSet::JS,
        (BackendKind::Ir, TargetPlatform::Jvm) => BackendSet::JVM_IR,
        (BackendKind::Ir, TargetPlatform::Js) => BackendSet::JS_IR,
        (BackendKind::NoBackend, _) | (_, TargetPlatform::Common) => BackendSet::empty(),
    }
}
