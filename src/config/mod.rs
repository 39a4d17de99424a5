//! Configuration system
//!
//! Compiled-in output defaults. There is no file or environment layer.

/// Default label printed before the formatted arguments
pub const DEFAULT_LABEL: &str = "Print: ";

/// Default separator placed between arguments
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Text preceding the formatted arguments
    pub label: String,
    /// Separator between joined arguments
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.label, "Print: ");
        assert_eq!(config.output.separator, ", ");
    }
}
