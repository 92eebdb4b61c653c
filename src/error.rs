//! Error types for the chroma_convert library

use std::fmt;

use thiserror::Error;

/// Result type alias for chroma_convert operations
pub type Result<T> = std::result::Result<T, RangeError>;

/// A single component that failed range validation
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentViolation {
    /// Component name as listed by its color space ("red", "hue", ...)
    pub component: &'static str,
    /// The rejected value
    pub value: f32,
    /// Lower bound of the valid interval (inclusive)
    pub min: f32,
    /// Upper bound of the valid interval (inclusive)
    pub max: f32,
}

impl fmt::Display for ComponentViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} (valid range [{}, {}])",
            self.component, self.value, self.min, self.max
        )
    }
}

/// Range validation failure listing every offending component.
///
/// Conversions assume validated input, so this is the only error the
/// conversion core raises. The violation list names every bad component
/// at once so a caller re-prompting the user can report all of them
/// together.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("component(s) out of range: {}", list_violations(.violations))]
pub struct RangeError {
    violations: Vec<ComponentViolation>,
}

impl RangeError {
    /// Create a range error from a non-empty list of violations
    pub fn new(violations: Vec<ComponentViolation>) -> Self {
        Self { violations }
    }

    /// The individual component violations, in component order
    pub fn violations(&self) -> &[ComponentViolation] {
        &self.violations
    }

    /// Names of the offending components, for compact reporting
    pub fn component_names(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.component).collect()
    }
}

fn list_violations(violations: &[ComponentViolation]) -> String {
    violations
        .iter()
        .map(ComponentViolation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure to parse a color space name from text.
///
/// Raised by the `FromStr` impl backing the CLI; the conversion core
/// itself only ever raises [`RangeError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color space '{0}' (expected rgb, hsv or cmy)")]
pub struct ParseColorSpaceError(pub String);
