//! Per-module directive storage.

use rustc_hash::FxHashMap;

use crate::descriptor::DirectiveDescriptor;

/// Directives registered on a single test module.
///
/// A flag is an entry with no values; a valued directive accumulates its
/// values in source order. Repeated directive lines merge, so two
/// `IGNORE_BACKEND` lines behave like one line listing all their values.
#[derive(Clone, Debug, Default)]
pub struct RegisteredDirectives {
    entries: FxHashMap<&'static str, Vec<String>>,
}

impl RegisteredDirectives {
    /// Storage with nothing registered.
    pub fn empty() -> Self {
        RegisteredDirectives::default()
    }

    /// Record a flag directive. Idempotent.
    pub fn set_flag(&mut self, directive: &'static DirectiveDescriptor) {
        self.entries.entry(directive.name()).or_default();
    }

    /// Append values for a valued directive, preserving source order.
    pub fn append_values(
        &mut self,
        directive: &'static DirectiveDescriptor,
        values: impl IntoIterator<Item = String>,
    ) {
        self.entries
            .entry(directive.name())
            .or_default()
            .extend(values);
    }

    /// Whether the directive was registered at all, flag or valued.
    pub fn contains(&self, directive: &DirectiveDescriptor) -> bool {
        self.entries.contains_key(directive.name())
    }

    /// Values registered for a valued directive. Empty when absent.
    pub fn values_of(&self, directive: &DirectiveDescriptor) -> &[String] {
        self.entries
            .get(directive.name())
            .map_or(&[], Vec::as_slice)
    }

    /// Number of distinct directives registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
