//! Geometric primitives for element placement.
//!
//! Coordinates and dimensions are expressed in PDF points, measured from the
//! top-left corner of the page as the editing API expects.

use serde_json::{Map, Value};

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use editpdf::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both components are finite and not negative.
    pub fn is_on_page(&self) -> bool {
        [self.x, self.y].iter().all(|v| v.is_finite() && *v >= 0.0)
    }

    pub(crate) fn to_value(self) -> Value {
        let mut map = Map::new();
        map.insert("x".to_string(), Value::from(self.x));
        map.insert("y".to_string(), Value::from(self.y));
        Value::Object(map)
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
}

impl Size {
    /// Create a new size.
    ///
    /// # Examples
    ///
    /// ```
    /// use editpdf::geometry::Size;
    ///
    /// let size = Size::new(100.0, 50.0);
    /// assert_eq!(size.w, 100.0);
    /// assert_eq!(size.h, 50.0);
    /// ```
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Check that both sides are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        [self.w, self.h].iter().all(|v| v.is_finite() && *v > 0.0)
    }

    pub(crate) fn to_value(self) -> Value {
        let mut map = Map::new();
        map.insert("w".to_string(), Value::from(self.w));
        map.insert("h".to_string(), Value::from(self.h));
        Value::Object(map)
    }
}
