//! Type references and confidence annotations shared with the engine.

use std::fmt;

/// Upper bound of every confidence value reported by the engine.
///
/// Confidences are integers in `0..=MAX_CONFIDENCE`. This is the single place the bound is
/// defined; decoders use it as the default for records that carry no confidence of their own.
pub const MAX_CONFIDENCE: u8 = u8::MAX;

/// A value annotated with the engine's certainty about it.
///
/// # Examples
///
/// ```rust
/// use valscope::engine::{Confidence, MAX_CONFIDENCE};
///
/// let certain = Confidence::certain(4_u32);
/// assert_eq!(certain.confidence, MAX_CONFIDENCE);
///
/// let guess = Confidence::new(4_u32, 64);
/// assert_ne!(certain, guess);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Confidence<T> {
    /// The annotated value
    pub value: T,
    /// How certain the producing analysis is, `0..=MAX_CONFIDENCE`
    pub confidence: u8,
}

impl<T> Confidence<T> {
    /// Annotates `value` with an explicit confidence.
    #[must_use]
    pub const fn new(value: T, confidence: u8) -> Self {
        Self { value, confidence }
    }

    /// Annotates `value` with [`MAX_CONFIDENCE`].
    #[must_use]
    pub const fn certain(value: T) -> Self {
        Self::new(value, MAX_CONFIDENCE)
    }

    /// Returns the same value with a different confidence.
    #[must_use]
    pub fn with_confidence(self, confidence: u8) -> Self {
        Self::new(self.value, confidence)
    }
}

impl<T: fmt::Display> fmt::Display for Confidence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.confidence)
    }
}

/// A reference to a type owned by the engine's type system.
///
/// Only the rendered declaration is mirrored. A declaration is split around the spot where a
/// variable name goes, so `char buf[0x10]` is `before_name = "char"` and `after_name = "[0x10]"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef {
    before_name: String,
    after_name: String,
}

impl TypeRef {
    /// Creates a type whose whole declaration precedes the name.
    #[must_use]
    pub fn new(before_name: impl Into<String>) -> Self {
        Self {
            before_name: before_name.into(),
            after_name: String::new(),
        }
    }

    /// Creates a type with a declaration suffix, e.g. an array extent.
    #[must_use]
    pub fn with_suffix(before_name: impl Into<String>, after_name: impl Into<String>) -> Self {
        Self {
            before_name: before_name.into(),
            after_name: after_name.into(),
        }
    }

    /// The part of the declaration rendered before a variable name.
    #[must_use]
    pub fn before_name(&self) -> &str {
        &self.before_name
    }

    /// The part of the declaration rendered after a variable name.
    #[must_use]
    pub fn after_name(&self) -> &str {
        &self.after_name
    }

    /// Renders a declaration of `name` with this type.
    #[must_use]
    pub fn declare(&self, name: &str) -> String {
        format!("{} {}{}", self.before_name, name, self.after_name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.before_name, self.after_name)
    }
}
