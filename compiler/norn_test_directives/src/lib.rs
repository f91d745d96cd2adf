//! Test directive model for the Norn test framework.
//!
//! Directives are structured annotations in test-source comment lines that
//! alter how the harness treats a test: muting known failures on a backend,
//! linking extra libraries, toggling checks. This crate owns the declaration
//! model and the parsing; it knows nothing about the compiler itself.
//!
//! A subsystem declares the directives it consumes as statics, groups them
//! into a [`DirectivesContainer`], and the harness assembles the containers
//! of every registered check into a [`DirectiveRegistry`] used to parse each
//! module's header:
//!
//! ```text
//! // IGNORE_BACKEND: JVM_IR
//! // WITH_STDLIB
//!
//! fn entry() = probe()
//! ```
//!
//! Parsed directives land in a per-module [`RegisteredDirectives`] store,
//! which the harness attaches to its module model.

pub mod container;
pub mod descriptor;
pub mod parser;
pub mod registered;

pub use container::{DirectiveRegistry, DirectivesContainer};
pub use descriptor::{DirectiveDescriptor, DirectiveKind};
pub use parser::{parse_directives, DirectiveParseError};
pub use registered::RegisteredDirectives;
