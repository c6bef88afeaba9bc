//! Text overlay element.
//!
//! This module provides [`TextElement`] together with the value sets its
//! fields are restricted to.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::base::ElementBase;
use super::validation::REQUIRED;
use super::{insert_optional, Element, Payload};
use crate::color::is_valid_color;
use crate::config::PayloadConfig;
use crate::error::{Error, Result};

/// Horizontal alignment of the text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Left-aligned
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
}

impl TextAlign {
    /// All accepted values, in wire order.
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    /// Wire name of the alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|align| align.as_str() == s)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Text align must be one of the following values: {}",
                    join_names(Self::ALL.iter().map(TextAlign::as_str))
                ))
            })
    }
}

/// Font families supported by the editing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Arial
    Arial,
    /// Arial Unicode MS
    ArialUnicodeMs,
    /// Verdana
    Verdana,
    /// Courier
    Courier,
    /// Times New Roman
    TimesNewRoman,
    /// Comic Sans MS
    ComicSansMs,
    /// WenQuanYi Zen Hei (CJK coverage)
    WenQuanYiZenHei,
    /// Lohit Marathi (Devanagari coverage)
    LohitMarathi,
}

impl FontFamily {
    /// All accepted families, in wire order.
    pub const ALL: [FontFamily; 8] = [
        FontFamily::Arial,
        FontFamily::ArialUnicodeMs,
        FontFamily::Verdana,
        FontFamily::Courier,
        FontFamily::TimesNewRoman,
        FontFamily::ComicSansMs,
        FontFamily::WenQuanYiZenHei,
        FontFamily::LohitMarathi,
    ];

    /// Family name as the service spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::ArialUnicodeMs => "Arial Unicode MS",
            Self::Verdana => "Verdana",
            Self::Courier => "Courier",
            Self::TimesNewRoman => "Times New Roman",
            Self::ComicSansMs => "Comic Sans MS",
            Self::WenQuanYiZenHei => "WenQuanYi Zen Hei",
            Self::LohitMarathi => "Lohit Marathi",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Font family must be one of the following values: {}",
                    join_names(Self::ALL.iter().map(FontFamily::as_str))
                ))
            })
    }
}

/// Style label derived from the bold and italic flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Neither bold nor italic
    Regular,
    /// Bold only
    Bold,
    /// Italic only
    Italic,
    /// Bold and italic
    BoldItalic,
}

impl FontStyle {
    /// Combine the two style flags.
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (true, true) => Self::BoldItalic,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (false, false) => Self::Regular,
        }
    }

    /// Wire name of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::BoldItalic => "Bold Italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of text to overlay on a page.
///
/// Every field starts unset. Setters check their argument before storing
/// it, so a rejected value never replaces the previous one. Whether `text`
/// was provided at all is only checked by [`Element::validate`].
///
/// # Examples
///
/// ```
/// use editpdf::elements::{Element, TextElement};
///
/// # fn main() -> editpdf::Result<()> {
/// let mut element = TextElement::new();
/// element
///     .set_text("Approved")
///     .set_italic()
///     .set_text_align("center")?
///     .set_font_family("Times New Roman")?;
/// element.base_mut().set_coordinates(300.0, 40.0)?;
///
/// assert!(element.validate());
/// assert_eq!(element.to_map()["font_style"], "Italic");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TextElement {
    base: ElementBase,
    text: Option<String>,
    text_align: Option<TextAlign>,
    font_family: Option<FontFamily>,
    font_size: Option<f64>,
    font_color: Option<String>,
    letter_spacing: Option<f64>,
    line_height: Option<f64>,
    is_bold: bool,
    is_italic: bool,
    // tri-state: unset is omitted from the payload
    is_underline: Option<bool>,
}

impl Default for TextElement {
    fn default() -> Self {
        Self::new()
    }
}

impl TextElement {
    /// Type tag sent as the `type` key.
    pub const TYPE: &'static str = "text";

    /// Create an element with every field unset.
    pub fn new() -> Self {
        Self {
            base: ElementBase::new(Self::TYPE),
            text: None,
            text_align: None,
            font_family: None,
            font_size: None,
            font_color: None,
            letter_spacing: None,
            line_height: None,
            is_bold: false,
            is_italic: false,
            is_underline: None,
        }
    }

    /// The text, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the text. Any string is accepted, including the empty one.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Alignment, if set.
    pub fn text_align(&self) -> Option<TextAlign> {
        self.text_align
    }

    /// Set the alignment from its wire name (`left`, `center` or `right`).
    pub fn set_text_align(&mut self, text_align: &str) -> Result<&mut Self> {
        let align = text_align.parse::<TextAlign>().map_err(|e| {
            log::debug!("Rejected text align {:?}", text_align);
            e
        })?;
        self.text_align = Some(align);
        Ok(self)
    }

    /// Font family, if set.
    pub fn font_family(&self) -> Option<FontFamily> {
        self.font_family
    }

    /// Set the font family from its exact name, e.g. `"Times New Roman"`.
    pub fn set_font_family(&mut self, font_family: &str) -> Result<&mut Self> {
        let family = font_family.parse::<FontFamily>().map_err(|e| {
            log::debug!("Rejected font family {:?}", font_family);
            e
        })?;
        self.font_family = Some(family);
        Ok(self)
    }

    /// Font color, if set.
    pub fn font_color(&self) -> Option<&str> {
        self.font_color.as_deref()
    }

    /// Set the color as `#RRGGBB` or `transparent`.
    pub fn set_font_color(&mut self, font_color: &str) -> Result<&mut Self> {
        if !is_valid_color(font_color) {
            log::debug!("Rejected font color {:?}", font_color);
            return Err(Error::invalid_argument(
                "Font color must be a 6-character hex value (e.g '#ABCDEF') or 'transparent'",
            ));
        }
        self.font_color = Some(font_color.to_string());
        Ok(self)
    }

    /// Font size in points, if set.
    pub fn font_size(&self) -> Option<f64> {
        self.font_size
    }

    /// Set the font size in points; must be greater than 0.
    pub fn set_font_size(&mut self, font_size: f64) -> Result<&mut Self> {
        if !(font_size.is_finite() && font_size > 0.0) {
            log::debug!("Rejected font size {}", font_size);
            return Err(Error::invalid_argument(
                "Font size must be a float greater than 0",
            ));
        }
        self.font_size = Some(font_size);
        Ok(self)
    }

    /// Render the text bold.
    pub fn set_bold(&mut self) -> &mut Self {
        self.is_bold = true;
        self
    }

    /// Clear the bold flag.
    pub fn unset_bold(&mut self) -> &mut Self {
        self.is_bold = false;
        self
    }

    /// Whether the text is bold.
    pub fn is_bold(&self) -> bool {
        self.is_bold
    }

    /// Render the text italic.
    pub fn set_italic(&mut self) -> &mut Self {
        self.is_italic = true;
        self
    }

    /// Clear the italic flag.
    pub fn unset_italic(&mut self) -> &mut Self {
        self.is_italic = false;
        self
    }

    /// Whether the text is italic.
    pub fn is_italic(&self) -> bool {
        self.is_italic
    }

    /// Underline the text.
    pub fn set_underline(&mut self) -> &mut Self {
        self.is_underline = Some(true);
        self
    }

    /// Explicitly disable underlining.
    pub fn unset_underline(&mut self) -> &mut Self {
        self.is_underline = Some(false);
        self
    }

    /// `None` until one of the underline setters was called.
    pub fn is_underline(&self) -> Option<bool> {
        self.is_underline
    }

    /// Style label derived from the bold and italic flags.
    pub fn font_style(&self) -> FontStyle {
        FontStyle::from_flags(self.is_bold, self.is_italic)
    }

    /// Letter spacing, if set.
    pub fn letter_spacing(&self) -> Option<f64> {
        self.letter_spacing
    }

    /// Set the extra spacing between letters; must not be negative.
    pub fn set_letter_spacing(&mut self, letter_spacing: f64) -> Result<&mut Self> {
        if !is_non_negative(letter_spacing) {
            log::debug!("Rejected letter spacing {}", letter_spacing);
            return Err(Error::invalid_argument(
                "Letter spacing must be a number greater or equal to 0",
            ));
        }
        self.letter_spacing = Some(letter_spacing);
        Ok(self)
    }

    /// Line height, if set.
    pub fn line_height(&self) -> Option<f64> {
        self.line_height
    }

    /// Set the line height; must not be negative.
    pub fn set_line_height(&mut self, line_height: f64) -> Result<&mut Self> {
        if !is_non_negative(line_height) {
            log::debug!("Rejected line height {}", line_height);
            return Err(Error::invalid_argument(
                "Line height must be a number greater or equal to 0",
            ));
        }
        self.line_height = Some(line_height);
        Ok(self)
    }
}

impl Element for TextElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn validate(&mut self) -> bool {
        self.base.validate();

        if self.text.is_none() {
            self.base.add_error("text", REQUIRED);
        }

        let errors = self.base.errors();
        if !errors.is_empty() {
            log::warn!("Text element failed validation: {}", errors);
        }
        errors.is_empty()
    }

    fn to_map_with(&self, config: &PayloadConfig) -> Payload {
        let mut map = self.base.to_map(config);

        let fields = [
            ("text", self.text.as_deref().map(Value::from)),
            ("text_align", self.text_align.map(|a| Value::from(a.as_str()))),
            ("font_family", self.font_family.map(|f| Value::from(f.as_str()))),
            ("font_size", self.font_size.map(Value::from)),
            ("font_style", Some(Value::from(self.font_style().as_str()))),
            ("font_color", self.font_color.as_deref().map(Value::from)),
            ("letter_spacing", self.letter_spacing.map(Value::from)),
            ("line_height", self.line_height.map(Value::from)),
            ("underline_text", self.is_underline.map(Value::from)),
        ];
        for (key, value) in fields {
            insert_optional(&mut map, key, value, config);
        }

        log::trace!("Serialized text element with {} keys", map.len());
        map
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(",")
}
