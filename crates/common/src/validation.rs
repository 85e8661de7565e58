//! Declarative field validation.
//!
//! A type describes its rules once, in [`Validate::validate`], using the
//! [`Validator`] builder. Violations are collected in declaration order so the
//! client sees them in the same order every time.

use std::fmt;

/// A single per-field predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value must differ from its type's default (non-empty string,
    /// non-zero number).
    Required,
}

impl Rule {
    /// Short machine-readable tag for the rule (e.g. `"required"`).
    pub fn tag(self) -> &'static str {
        match self {
            Rule::Required => "required",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A failed [`Rule`] on a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// JSON name of the offending field.
    pub field: &'static str,
    /// The rule that failed.
    pub rule: Rule,
}

impl FieldViolation {
    /// Human-readable description, e.g. `"field name is a required field"`.
    pub fn message(&self) -> String {
        match self.rule {
            Rule::Required => format!("field {} is a required field", self.field),
        }
    }
}

/// Ordered, non-empty set of [`FieldViolation`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Violations in the order the rules were declared.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(FieldViolation::message).collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Types that carry a field-level rule set.
pub trait Validate {
    /// Check every rule, returning all violations at once.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] if at least one rule fails.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Accumulates violations while a [`Validate`] impl walks its fields.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply [`Rule::Required`] to `value`.
    pub fn required<T>(mut self, field: &'static str, value: &T) -> Self
    where
        T: Default + PartialEq,
    {
        if *value == T::default() {
            self.violations.push(FieldViolation {
                field,
                rule: Rule::Required,
            });
        }
        self
    }

    /// Finish validation.
    ///
    /// # Errors
    ///
    /// Returns the collected [`ValidationErrors`] if any rule failed.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                violations: self.violations,
            })
        }
    }
}
