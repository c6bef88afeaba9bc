//! Deferred, accumulating validation results.

use std::fmt;

/// Error code recorded when a mandatory field was never set.
pub const REQUIRED: &str = "required";

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Payload key of the offending field
    pub field: String,
    /// Short machine-readable code (e.g. "required")
    pub code: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.code)
    }
}

/// Errors collected over one validation pass, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`.
    pub fn add(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            code: code.into(),
        });
    }

    /// Check whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check whether `field` has an error with `code`.
    pub fn contains(&self, field: &str, code: &str) -> bool {
        self.errors.iter().any(|e| e.field == field && e.code == code)
    }

    /// Get the first error recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Iterate over recorded errors.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_in_order() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add("coordinates", REQUIRED);
        errors.add("text", REQUIRED);

        assert_eq!(errors.len(), 2);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["coordinates", "text"]);
        assert!(errors.contains("text", "required"));
        assert!(!errors.contains("text", "invalid"));
    }

    #[test]
    fn test_get_and_clear() {
        let mut errors = ValidationErrors::new();
        errors.add("text", REQUIRED);
        assert_eq!(errors.get("text").map(|e| e.code.as_str()), Some("required"));
        assert!(errors.get("font_size").is_none());

        errors.clear();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display() {
        let mut errors = ValidationErrors::new();
        errors.add("coordinates", REQUIRED);
        errors.add("text", REQUIRED);
        assert_eq!(errors.to_string(), "coordinates: required; text: required");
        assert_eq!(ValidationErrors::new().to_string(), "");
    }
}
