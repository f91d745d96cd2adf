//! Directive line parsing.
//!
//! Directives live in the module header: the leading run of `//` comment
//! lines and blank lines at the top of a test source. The first other line
//! ends the header, so directives buried in code are never picked up.
//!
//! Within the header, a comment line is a directive line when its first
//! token matches the directive name shape (`[A-Z][A-Z0-9_]*`) and is
//! followed by `:` or by the end of the line. Every other comment line is
//! prose and is skipped. Upper-case colon comments in headers are therefore
//! reserved for directives; an unregistered name in that position is a
//! parse error, which catches misspelled directives early.
//!
//! Forms:
//! - `// NAME` registers a flag
//! - `// NAME: v1, v2` and `// NAME: v1 v2` register values (commas and
//!   whitespace both separate)

use std::fmt;

use crate::container::DirectiveRegistry;
use crate::registered::RegisteredDirectives;

/// Error from parsing the directive header of a test source.
///
/// All variants carry the 1-based source line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveParseError {
    /// Line has the directive shape but the name is not registered.
    UnknownDirective { name: String, line: usize },
    /// Valued directive with no values.
    MissingValue { directive: &'static str, line: usize },
    /// Flag directive given values.
    UnexpectedValue { directive: &'static str, line: usize },
    /// A value was rejected by the directive's validator.
    InvalidValue {
        directive: &'static str,
        value: String,
        line: usize,
    },
}

impl fmt::Display for DirectiveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirective { name, line } => {
                write!(f, "unknown directive '{name}' on line {line}")
            }
            Self::MissingValue { directive, line } => {
                write!(f, "directive '{directive}' on line {line} expects at least one value")
            }
            Self::UnexpectedValue { directive, line } => {
                write!(f, "flag directive '{directive}' on line {line} does not take values")
            }
            Self::InvalidValue {
                directive,
                value,
                line,
            } => {
                write!(f, "invalid value '{value}' for directive '{directive}' on line {line}")
            }
        }
    }
}

/// Parse the directive header of `source` against `registry`.
///
/// Returns the accumulated per-module storage; repeated directives merge.
pub fn parse_directives(
    source: &str,
    registry: &DirectiveRegistry,
) -> Result<RegisteredDirectives, DirectiveParseError> {
    let mut directives = RegisteredDirectives::empty();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            continue;
        }
        let Some(comment) = trimmed.strip_prefix("//") else {
            // First code line ends the header.
            break;
        };

        let Some((name, values)) = split_directive(comment.trim()) else {
            continue;
        };

        let Some(descriptor) = registry.find(name) else {
            return Err(DirectiveParseError::UnknownDirective {
                name: name.to_string(),
                line,
            });
        };

        match values {
            None => {
                if descriptor.takes_values() {
                    return Err(DirectiveParseError::MissingValue {
                        directive: descriptor.name(),
                        line,
                    });
                }
                directives.set_flag(descriptor);
            }
            Some(list) => {
                if !descriptor.takes_values() {
                    return Err(DirectiveParseError::UnexpectedValue {
                        directive: descriptor.name(),
                        line,
                    });
                }
                let values: Vec<&str> = list
                    .split(|c: char| c == ',' || c.is_ascii_whitespace())
                    .filter(|value| !value.is_empty())
                    .collect();
                if values.is_empty() {
                    return Err(DirectiveParseError::MissingValue {
                        directive: descriptor.name(),
                        line,
                    });
                }
                for value in &values {
                    if !descriptor.accepts_value(value) {
                        return Err(DirectiveParseError::InvalidValue {
                            directive: descriptor.name(),
                            value: (*value).to_string(),
                            line,
                        });
                    }
                }
                directives.append_values(descriptor, values.into_iter().map(str::to_string));
            }
        }
    }

    Ok(directives)
}

/// Split a comment body into a directive name and its value list.
///
/// Returns `None` for prose: the name must match `[A-Z][A-Z0-9_]*` and be
/// followed by `:` or end-of-line.
fn split_directive(comment: &str) -> Option<(&str, Option<&str>)> {
    match comment.split_once(':') {
        Some((name, values)) => {
            let name = name.trim_end();
            is_directive_name(name).then_some((name, Some(values)))
        }
        None => is_directive_name(comment).then_some((comment, None)),
    }
}

fn is_directive_name(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
