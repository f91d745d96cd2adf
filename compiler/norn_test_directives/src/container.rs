//! Directive containers and the parse registry.
//!
//! Each subsystem groups the directives it consumes into one
//! [`DirectivesContainer`] (the codegen suite declares `IGNORE_BACKEND`
//! there, the box-runner suite declares its own, and so on). Before parsing
//! test sources the harness collects the containers of every registered
//! check into a [`DirectiveRegistry`].

use crate::descriptor::DirectiveDescriptor;

/// A named group of directive declarations.
#[derive(Debug)]
pub struct DirectivesContainer {
    name: &'static str,
    directives: &'static [&'static DirectiveDescriptor],
}

impl DirectivesContainer {
    /// Declare a container over a static list of descriptors.
    pub const fn new(
        name: &'static str,
        directives: &'static [&'static DirectiveDescriptor],
    ) -> Self {
        DirectivesContainer { name, directives }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Descriptors declared by this container, in declaration order.
    pub fn directives(&self) -> &'static [&'static DirectiveDescriptor] {
        self.directives
    }

    /// Look up a descriptor by directive name.
    pub fn find(&self, name: &str) -> Option<&'static DirectiveDescriptor> {
        self.directives.iter().copied().find(|d| d.name() == name)
    }
}

/// Ordered collection of containers consulted when parsing directive lines.
///
/// Containers are searched in registration order and the first match wins.
/// Registering the same container twice is harmless.
#[derive(Debug, Default)]
pub struct DirectiveRegistry {
    containers: Vec<&'static DirectivesContainer>,
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        DirectiveRegistry::default()
    }

    /// Build a registry from an ordered list of containers.
    pub fn from_containers(
        containers: impl IntoIterator<Item = &'static DirectivesContainer>,
    ) -> Self {
        DirectiveRegistry {
            containers: containers.into_iter().collect(),
        }
    }

    /// Append a container to the search order.
    pub fn register(&mut self, container: &'static DirectivesContainer) {
        self.containers.push(container);
    }

    /// Containers in registration order.
    pub fn containers(&self) -> &[&'static DirectivesContainer] {
        &self.containers
    }

    /// Look up a descriptor across all containers.
    pub fn find(&self, name: &str) -> Option<&'static DirectiveDescriptor> {
        self.containers.iter().find_map(|c| c.find(name))
    }
}
