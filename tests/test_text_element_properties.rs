//! Property tests for the eager setter checks and the color validator.

use editpdf::color::is_valid_color;
use editpdf::elements::{FontFamily, TextAlign, TextElement};
use proptest::prelude::*;

proptest! {
    #[test]
    fn text_align_rejects_unknown_values(s in "\\PC*") {
        prop_assume!(!["left", "center", "right"].contains(&s.as_str()));
        let mut element = TextElement::new();
        prop_assert!(element.set_text_align(&s).is_err());
        prop_assert!(element.text_align().is_none());
    }

    #[test]
    fn text_align_accepts_members(index in 0usize..3) {
        let align = TextAlign::ALL[index];
        let mut element = TextElement::new();
        element.set_text_align(align.as_str()).unwrap();
        prop_assert_eq!(element.text_align(), Some(align));
    }

    #[test]
    fn font_family_rejects_unknown_values(s in "\\PC*") {
        prop_assume!(FontFamily::ALL.iter().all(|f| f.as_str() != s));
        let mut element = TextElement::new();
        prop_assert!(element.set_font_family(&s).is_err());
        prop_assert!(element.font_family().is_none());
    }

    #[test]
    fn font_size_rejects_non_positive(x in -1.0e9f64..=0.0) {
        let mut element = TextElement::new();
        prop_assert!(element.set_font_size(x).is_err());
        prop_assert!(element.font_size().is_none());
    }

    #[test]
    fn font_size_accepts_positive(x in 1.0e-6f64..1.0e6) {
        let mut element = TextElement::new();
        element.set_font_size(x).unwrap();
        prop_assert_eq!(element.font_size(), Some(x));
    }

    #[test]
    fn spacing_rejects_negative(x in -1.0e9f64..-1.0e-9) {
        let mut element = TextElement::new();
        prop_assert!(element.set_letter_spacing(x).is_err());
        prop_assert!(element.set_line_height(x).is_err());
        prop_assert!(element.letter_spacing().is_none());
        prop_assert!(element.line_height().is_none());
    }

    #[test]
    fn spacing_accepts_non_negative(x in 0.0f64..1.0e6) {
        let mut element = TextElement::new();
        element.set_letter_spacing(x).unwrap();
        element.set_line_height(x).unwrap();
        prop_assert_eq!(element.letter_spacing(), Some(x));
        prop_assert_eq!(element.line_height(), Some(x));
    }

    #[test]
    fn color_accepts_hex(hex in "[0-9a-fA-F]{6}") {
        let color = format!("#{}", hex);
        prop_assert!(is_valid_color(&color));
        prop_assert!(!is_valid_color(&hex));
    }

    #[test]
    fn color_rejects_wrong_length(hex in "[0-9a-fA-F]{0,12}") {
        prop_assume!(hex.len() != 6);
        let color = format!("#{}", hex);
        prop_assert!(!is_valid_color(&color));
    }

    #[test]
    fn color_rejects_non_hex(prefix in "[0-9a-f]{0,5}", bad in "[g-zG-Z_ #]") {
        let mut body = prefix.clone();
        body.push_str(&bad);
        while body.len() < 6 {
            body.push('0');
        }
        let color = format!("#{}", body);
        prop_assert!(!is_valid_color(&color));
    }

    #[test]
    fn font_color_setter_follows_validator(s in "#?[0-9a-fA-Fxyz]{0,8}") {
        let mut element = TextElement::new();
        prop_assert_eq!(element.set_font_color(&s).is_ok(), is_valid_color(&s));
    }
}
