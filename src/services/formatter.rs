//! Argument formatter
//!
//! Maps an argument list to its single-line display string.

use crate::config::{OutputConfig, DEFAULT_SEPARATOR};
use crate::domain::ArgumentList;

/// Joins arguments into one display string
#[derive(Debug, Clone)]
pub struct Formatter {
    separator: String,
}

impl Formatter {
    /// Create a formatter with the given separator
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Create a formatter from output configuration
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.separator.clone())
    }

    /// Format the argument list
    ///
    /// | length | result |
    /// |---|---|
    /// | 0 | empty string |
    /// | 1 | the element unchanged |
    /// | 2 | first element followed by the separator; the second is dropped |
    /// | 3+ | all elements joined by the separator |
    pub fn format(&self, args: &ArgumentList) -> String {
        match args.as_slice() {
            [] => {
                log::trace!("formatting empty argument list");
                String::new()
            }
            [only] => {
                log::trace!("formatting single argument");
                only.clone()
            }
            [first, _] => {
                log::trace!("formatting argument pair, second argument dropped");
                format!("{}{}", first, self.separator)
            }
            all => {
                log::trace!("joining {} arguments", all.len());
                all.join(&self.separator)
            }
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(args: &[&str]) -> String {
        let list: ArgumentList = args.iter().copied().collect();
        Formatter::default().format(&list)
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(format(&[]), "");
    }

    #[test]
    fn test_single_argument_unchanged() {
        assert_eq!(format(&["a"]), "a");
        assert_eq!(format(&["a, b"]), "a, b");
    }

    #[test]
    fn test_two_arguments_drops_second() {
        assert_eq!(format(&["a", "b"]), "a, ");
        assert!(!format(&["first", "second"]).contains("second"));
    }

    #[test]
    fn test_two_empty_arguments() {
        assert_eq!(format(&["", ""]), ", ");
    }

    #[test]
    fn test_three_or_more_joined() {
        assert_eq!(format(&["a", "b", "c"]), "a, b, c");
        assert_eq!(format(&["x", "y", "z", "w"]), "x, y, z, w");
    }

    #[test]
    fn test_join_has_no_trailing_separator() {
        for n in 3..8 {
            let args: ArgumentList = (0..n).map(|i| format!("v{}", i)).collect();
            let out = Formatter::default().format(&args);
            assert!(!out.ends_with(", "), "trailing separator for {} args", n);
        }
    }

    #[test]
    fn test_commas_in_values_not_escaped() {
        assert_eq!(format(&["a,b", "c", "d"]), "a,b, c, d");
    }

    #[test]
    fn test_custom_separator() {
        let formatter = Formatter::new(" | ");
        let args: ArgumentList = ["a", "b", "c"].into_iter().collect();
        assert_eq!(formatter.format(&args), "a | b | c");
    }

    #[test]
    fn test_from_config() {
        let config = OutputConfig {
            separator: "; ".to_string(),
            ..OutputConfig::default()
        };
        let args: ArgumentList = ["a", "b"].into_iter().collect();
        assert_eq!(Formatter::from_config(&config).format(&args), "a; ");
    }

    #[test]
    fn test_deterministic() {
        let args: ArgumentList = ["p", "q", "r"].into_iter().collect();
        assert_eq!(format(&["p", "q", "r"]), Formatter::default().format(&args));
    }
}
