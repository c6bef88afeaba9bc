//! Elements that can be placed on a PDF page through the editing API.
//!
//! ## Design
//!
//! Every element embeds an [`ElementBase`] holding the shared placement
//! fields and the validation error sink, and implements the [`Element`]
//! capability trait. A concrete element chains its own checks after the base
//! ones in [`Element::validate`] and merges its keys after the base keys in
//! [`Element::to_map_with`].
//!
//! Field setters validate eagerly and return
//! [`Error::InvalidArgument`](crate::error::Error::InvalidArgument). Missing
//! mandatory fields are only reported by a validation pass, which collects
//! them in [`ValidationErrors`] instead of failing.
//!
//! ## Example
//!
//! ```
//! use editpdf::elements::{Element, TextElement};
//!
//! # fn main() -> editpdf::Result<()> {
//! let mut text = TextElement::new();
//! text.set_text("Hello, World!")
//!     .set_bold()
//!     .set_font_size(14.0)?
//!     .set_font_color("#1A1A1A")?;
//! text.base_mut().set_coordinates(72.0, 720.0)?;
//!
//! assert!(text.validate());
//! let payload = text.to_map();
//! assert_eq!(payload["font_style"], "Bold");
//! # Ok(())
//! # }
//! ```

mod base;
mod text;
mod validation;

pub use base::ElementBase;
pub use text::{FontFamily, FontStyle, TextAlign, TextElement};
pub use validation::{FieldError, ValidationErrors, REQUIRED};

use serde_json::Value;

use crate::config::PayloadConfig;
use crate::error::Result;

/// Flat key/value mapping handed to the request layer.
pub type Payload = serde_json::Map<String, Value>;

/// Shared contract of all page elements.
pub trait Element {
    /// Shared placement fields.
    fn base(&self) -> &ElementBase;

    /// Mutable access to the shared placement fields.
    fn base_mut(&mut self) -> &mut ElementBase;

    /// Run a validation pass over the element.
    ///
    /// Errors accumulate in [`Element::errors`]; the return value is true
    /// iff nothing was recorded.
    fn validate(&mut self) -> bool {
        self.base_mut().validate()
    }

    /// Flatten the element into a request payload.
    fn to_map_with(&self, config: &PayloadConfig) -> Payload;

    /// Flatten the element with the default configuration.
    fn to_map(&self) -> Payload {
        self.to_map_with(&PayloadConfig::default())
    }

    /// Encode the payload as JSON text.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_map())?)
    }

    /// Record a field-level error.
    ///
    /// Meant to be called from a [`Element::validate`] override after the base
    /// checks ran: every validation pass starts by clearing the sink, so an
    /// error recorded before `validate()` does not survive it.
    fn add_error(&mut self, field: &str, code: &str) {
        self.base_mut().add_error(field, code);
    }

    /// Errors recorded by the last validation pass.
    fn errors(&self) -> &ValidationErrors {
        self.base().errors()
    }
}

/// Insert an optional field, honoring `emit_unset_fields`.
pub(crate) fn insert_optional(
    map: &mut Payload,
    key: &str,
    value: Option<Value>,
    config: &PayloadConfig,
) {
    match value {
        Some(value) => {
            map.insert(key.to_string(), value);
        },
        None if config.emit_unset_fields => {
            map.insert(key.to_string(), Value::Null);
        },
        None => {},
    }
}
