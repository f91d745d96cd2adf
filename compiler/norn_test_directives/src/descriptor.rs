//! Directive declarations.
//!
//! A [`DirectiveDescriptor`] is the static declaration of one directive: its
//! name as written in test sources, a short description, and whether it takes
//! values. Consumers declare descriptors as statics and group them into
//! containers; the parser resolves directive lines against those statics, so
//! an unknown or misspelled directive is caught at parse time instead of
//! being silently ignored.

/// How a directive uses values.
#[derive(Copy, Clone, Debug)]
pub enum DirectiveKind {
    /// Presence-only directive (`// NAME`).
    Flag,
    /// Directive carrying one or more values (`// NAME: v1, v2`).
    Valued {
        /// Parse-time value check. `None` accepts any value.
        validator: Option<fn(&str) -> bool>,
    },
}

/// Static declaration of a single directive.
#[derive(Debug)]
pub struct DirectiveDescriptor {
    name: &'static str,
    description: &'static str,
    kind: DirectiveKind,
}

impl DirectiveDescriptor {
    /// Declare a presence-only directive.
    pub const fn flag(name: &'static str, description: &'static str) -> Self {
        DirectiveDescriptor {
            name,
            description,
            kind: DirectiveKind::Flag,
        }
    }

    /// Declare a valued directive accepting any value.
    pub const fn valued(name: &'static str, description: &'static str) -> Self {
        DirectiveDescriptor {
            name,
            description,
            kind: DirectiveKind::Valued { validator: None },
        }
    }

    /// Declare a valued directive whose values must pass `validator`.
    pub const fn valued_with(
        name: &'static str,
        description: &'static str,
        validator: fn(&str) -> bool,
    ) -> Self {
        DirectiveDescriptor {
            name,
            description,
            kind: DirectiveKind::Valued {
                validator: Some(validator),
            },
        }
    }

    /// Directive name as written in test sources.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description shown in directive listings.
    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// Returns `true` if this directive takes values.
    pub fn takes_values(&self) -> bool {
        matches!(self.kind, DirectiveKind::Valued { .. })
    }

    /// Run the value validator, if any. Flags accept no values.
    pub fn accepts_value(&self, value: &str) -> bool {
        match self.kind {
            DirectiveKind::Flag => false,
            DirectiveKind::Valued { validator: None } => true,
            DirectiveKind::Valued {
                validator: Some(validate),
            } => validate(value),
        }
    }
}

#[cfg(test)]
mod tests;
