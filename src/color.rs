//! Color value validation shared by all elements.
//!
//! The editing API accepts colors as `#RRGGBB` hex strings or the literal
//! `transparent`.

use lazy_static::lazy_static;
use regex::Regex;

/// Literal accepted in place of a hex color.
pub const TRANSPARENT: &str = "transparent";

lazy_static! {
    /// Regex for `#RRGGBB` colors, either case
    static ref RE_HEX_COLOR: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

/// Check whether `color` is an acceptable color value.
///
/// # Examples
///
/// ```
/// use editpdf::color::is_valid_color;
///
/// assert!(is_valid_color("#ABCDEF"));
/// assert!(is_valid_color("transparent"));
/// assert!(!is_valid_color("ABCDEF"));
/// ```
pub fn is_valid_color(color: &str) -> bool {
    color == TRANSPARENT || RE_HEX_COLOR.is_match(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_hex_colors() {
        assert!(is_valid_color("#000000"));
        assert!(is_valid_color("#ffffff"));
        assert!(is_valid_color("#AbCdEf"));
        assert!(is_valid_color("#123abc"));
    }

    #[test]
    fn test_accepts_transparent() {
        assert!(is_valid_color("transparent"));
        assert!(!is_valid_color("Transparent"));
        assert!(!is_valid_color(" transparent"));
    }

    #[test]
    fn test_rejects_missing_marker() {
        assert!(!is_valid_color("000000"));
        assert!(!is_valid_color("ABCDEF"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_color("#FFF"));
        assert!(!is_valid_color("#FFFFF"));
        assert!(!is_valid_color("#FFFFFFF"));
        assert!(!is_valid_color("#FFFFFFFF"));
        assert!(!is_valid_color(""));
        assert!(!is_valid_color("#"));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(!is_valid_color("#GGGGGG"));
        assert!(!is_valid_color("#12345z"));
        assert!(!is_valid_color("#12 456"));
        assert!(!is_valid_color("#000000\n"));
    }
}
