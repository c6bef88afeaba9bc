//! Fields shared by every element placed on a page.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::validation::{ValidationErrors, REQUIRED};
use super::{insert_optional, Payload};
use crate::config::PayloadConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, Size};

lazy_static! {
    /// Regex for page lists such as "1", "2-4" or "1,3,5-7"
    static ref RE_PAGES: Regex = Regex::new(r"^[1-9]\d*(-[1-9]\d*)?(,[1-9]\d*(-[1-9]\d*)?)*$").unwrap();
}

/// Placement and stacking properties common to all elements.
///
/// Concrete elements embed an `ElementBase` and expose it through
/// [`Element::base`](super::Element::base). It also owns the error sink that a
/// validation pass writes into.
#[derive(Debug, Clone)]
pub struct ElementBase {
    element_type: &'static str,
    pages: String,
    coordinates: Option<Point>,
    dimensions: Option<Size>,
    rotation: i32,
    opacity: i32,
    z_index: i32,
    errors: ValidationErrors,
}

impl ElementBase {
    /// Create the shared part of an element of the given type.
    pub fn new(element_type: &'static str) -> Self {
        Self {
            element_type,
            pages: "1".to_string(),
            coordinates: None,
            dimensions: None,
            rotation: 0,
            opacity: 100,
            z_index: 1,
            errors: ValidationErrors::new(),
        }
    }

    /// Type tag sent as the `type` key.
    pub fn element_type(&self) -> &'static str {
        self.element_type
    }

    /// Pages the element is placed on.
    pub fn pages(&self) -> &str {
        &self.pages
    }

    /// Set the pages, e.g. `"1"`, `"2-4"` or `"1,3,5-7"`.
    pub fn set_pages(&mut self, pages: &str) -> Result<&mut Self> {
        if !is_valid_page_list(pages) {
            log::debug!("Rejected page list {:?}", pages);
            return Err(Error::invalid_argument(
                "Pages must be a comma separated list of page numbers or ascending ranges (e.g '1,3-5')",
            ));
        }
        self.pages = pages.to_string();
        Ok(self)
    }

    /// Position of the element on the page.
    pub fn coordinates(&self) -> Option<Point> {
        self.coordinates
    }

    /// Set the position of the element.
    pub fn set_coordinates(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        let point = Point::new(x, y);
        if !point.is_on_page() {
            log::debug!("Rejected coordinates ({}, {})", x, y);
            return Err(Error::invalid_argument(
                "Coordinates must be numbers greater or equal to 0",
            ));
        }
        self.coordinates = Some(point);
        Ok(self)
    }

    /// Width and height of the element box.
    pub fn dimensions(&self) -> Option<Size> {
        self.dimensions
    }

    /// Set the width and height of the element box.
    pub fn set_dimensions(&mut self, w: f64, h: f64) -> Result<&mut Self> {
        let size = Size::new(w, h);
        if !size.is_positive() {
            log::debug!("Rejected dimensions {}x{}", w, h);
            return Err(Error::invalid_argument(
                "Dimensions must be numbers greater than 0",
            ));
        }
        self.dimensions = Some(size);
        Ok(self)
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Set the rotation in degrees (0 to 360).
    pub fn set_rotation(&mut self, degrees: i32) -> Result<&mut Self> {
        if !(0..=360).contains(&degrees) {
            log::debug!("Rejected rotation {}", degrees);
            return Err(Error::invalid_argument(
                "Rotation must be an integer between 0 and 360",
            ));
        }
        self.rotation = degrees;
        Ok(self)
    }

    /// Opacity in percent.
    pub fn opacity(&self) -> i32 {
        self.opacity
    }

    /// Set the opacity in percent (0 to 100).
    pub fn set_opacity(&mut self, opacity: i32) -> Result<&mut Self> {
        if !(0..=100).contains(&opacity) {
            log::debug!("Rejected opacity {}", opacity);
            return Err(Error::invalid_argument(
                "Opacity must be an integer between 0 and 100",
            ));
        }
        self.opacity = opacity;
        Ok(self)
    }

    /// Stacking order; higher values are drawn on top.
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Set the stacking order (1 or greater).
    pub fn set_z_index(&mut self, z_index: i32) -> Result<&mut Self> {
        if z_index < 1 {
            log::debug!("Rejected z-index {}", z_index);
            return Err(Error::invalid_argument(
                "Z-index must be an integer greater or equal to 1",
            ));
        }
        self.z_index = z_index;
        Ok(self)
    }

    /// Start a validation pass: clear the sink and check the shared fields.
    ///
    /// Returns true if no errors were recorded.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.coordinates.is_none() {
            self.add_error("coordinates", REQUIRED);
        }

        self.errors.is_empty()
    }

    /// Record a field-level error in the sink.
    ///
    /// The sink is cleared by [`ElementBase::validate`], so call this after it.
    pub fn add_error(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.errors.add(field, code);
    }

    /// Errors recorded by the last validation pass.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Serialize the shared fields.
    pub fn to_map(&self, config: &PayloadConfig) -> Payload {
        let mut map = Payload::new();
        map.insert("type".to_string(), Value::from(self.element_type));
        map.insert("pages".to_string(), Value::from(self.pages.as_str()));
        insert_optional(
            &mut map,
            "coordinates",
            self.coordinates.map(Point::to_value),
            config,
        );
        insert_optional(
            &mut map,
            "dimensions",
            self.dimensions.map(Size::to_value),
            config,
        );
        map.insert("rotation".to_string(), Value::from(self.rotation));
        map.insert("opacity".to_string(), Value::from(self.opacity));
        map.insert("zindex".to_string(), Value::from(self.z_index));
        map
    }
}

/// Check a page list: numbers from 1 and ranges that do not run backwards.
fn is_valid_page_list(pages: &str) -> bool {
    if !RE_PAGES.is_match(pages) {
        return false;
    }

    pages.split(',').all(|part| match part.split_once('-') {
        Some((start, end)) => match (start.parse::<u64>(), end.parse::<u64>()) {
            (Ok(start), Ok(end)) => start <= end,
            _ => false,
        },
        None => part.parse::<u64>().is_ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let base = ElementBase::new("text");
        assert_eq!(base.element_type(), "text");
        assert_eq!(base.pages(), "1");
        assert!(base.coordinates().is_none());
        assert!(base.dimensions().is_none());
        assert_eq!(base.rotation(), 0);
        assert_eq!(base.opacity(), 100);
        assert_eq!(base.z_index(), 1);
        assert!(base.errors().is_empty());
    }

    #[test]
    fn test_page_lists() {
        assert!(is_valid_page_list("1"));
        assert!(is_valid_page_list("12"));
        assert!(is_valid_page_list("2-4"));
        assert!(is_valid_page_list("3-3"));
        assert!(is_valid_page_list("1,3,5-7"));

        assert!(!is_valid_page_list(""));
        assert!(!is_valid_page_list("0"));
        assert!(!is_valid_page_list("4-2"));
        assert!(!is_valid_page_list("1,,2"));
        assert!(!is_valid_page_list("1-"));
        assert!(!is_valid_page_list("a"));
        assert!(!is_valid_page_list("1, 2"));
        assert!(!is_valid_page_list("99999999999999999999999"));
    }

    #[test]
    fn test_rejected_values_keep_previous_state() {
        let mut base = ElementBase::new("text");
        base.set_pages("2-3").unwrap();
        base.set_coordinates(10.0, 20.0).unwrap();
        base.set_rotation(90).unwrap();

        assert!(base.set_pages("0").is_err());
        assert!(base.set_coordinates(-1.0, 0.0).is_err());
        assert!(base.set_dimensions(0.0, 10.0).is_err());
        assert!(base.set_rotation(361).is_err());
        assert!(base.set_rotation(-1).is_err());
        assert!(base.set_opacity(101).is_err());
        assert!(base.set_z_index(0).is_err());

        assert_eq!(base.pages(), "2-3");
        assert_eq!(base.coordinates(), Some(Point::new(10.0, 20.0)));
        assert!(base.dimensions().is_none());
        assert_eq!(base.rotation(), 90);
        assert_eq!(base.opacity(), 100);
        assert_eq!(base.z_index(), 1);
    }

    #[test]
    fn test_validate_requires_coordinates() {
        let mut base = ElementBase::new("text");
        assert!(!base.validate());
        assert!(base.errors().contains("coordinates", "required"));

        base.set_coordinates(0.0, 0.0).unwrap();
        assert!(base.validate());
        assert!(base.errors().is_empty());
    }

    #[test]
    fn test_to_map_omits_unset() {
        let mut base = ElementBase::new("text");
        base.set_coordinates(72.0, 100.0).unwrap();

        let map = base.to_map(&PayloadConfig::default());
        assert_eq!(map["type"], "text");
        assert_eq!(map["pages"], "1");
        assert_eq!(map["coordinates"], serde_json::json!({ "x": 72.0, "y": 100.0 }));
        assert!(!map.contains_key("dimensions"));
        assert_eq!(map["rotation"], 0);
        assert_eq!(map["opacity"], 100);
        assert_eq!(map["zindex"], 1);
    }

    #[test]
    fn test_to_map_with_nulls() {
        let base = ElementBase::new("text");
        let map = base.to_map(&PayloadConfig::new().with_unset_fields(true));
        assert_eq!(map["coordinates"], Value::Null);
        assert_eq!(map["dimensions"], Value::Null);
    }
}
