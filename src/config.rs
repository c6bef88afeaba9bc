//! Configuration for payload serialization.

/// Options controlling how an element is flattened into a request payload.
#[derive(Debug, Clone)]
pub struct PayloadConfig {
    /// Emit optional fields that were never set as JSON `null` instead of
    /// omitting their keys.
    pub emit_unset_fields: bool,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            emit_unset_fields: false,
        }
    }

    /// Emit unset optional fields as `null`.
    pub fn with_unset_fields(mut self, enable: bool) -> Self {
        self.emit_unset_fields = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_omits_unset_fields() {
        assert!(!PayloadConfig::default().emit_unset_fields);
    }

    #[test]
    fn test_with_unset_fields() {
        let config = PayloadConfig::new().with_unset_fields(true);
        assert!(config.emit_unset_fields);
    }
}
