//! # editpdf
//!
//! Client-side element model for the PDF editing web API.
//!
//! Elements describe content to overlay on the pages of an uploaded PDF. They
//! are assembled with fluent setters, checked with a validation pass and then
//! flattened into the payload that the request layer sends to the service.
//! This crate does no networking and never touches PDF bytes.
//!
//! ## Validation model
//!
//! - **Eager**: every setter checks its argument and returns
//!   [`Error::InvalidArgument`] on a bad value, leaving the element unchanged.
//! - **Deferred**: mandatory fields (`text`, `coordinates`) are only checked
//!   by [`Element::validate`](elements::Element::validate), which collects
//!   [`ValidationErrors`](elements::ValidationErrors) instead of failing.
//!
//! ## Quick Start
//!
//! ```
//! use editpdf::elements::{Element, TextElement};
//!
//! # fn main() -> editpdf::Result<()> {
//! let mut element = TextElement::new();
//! element
//!     .set_text("Hi")
//!     .set_bold()
//!     .set_underline()
//!     .set_text_align("center")?
//!     .set_font_family("Arial")?
//!     .set_font_size(12.0)?
//!     .set_font_color("#000000")?;
//! element.base_mut().set_coordinates(100.0, 200.0)?.set_pages("1-2")?;
//!
//! if !element.validate() {
//!     eprintln!("incomplete element: {}", element.errors());
//! }
//!
//! let payload = element.to_map();
//! assert_eq!(payload["font_style"], "Bold");
//! assert_eq!(payload["underline_text"], true);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Shared value checks
pub mod color;
pub mod geometry;

/// Page elements and their payload serialization
pub mod elements;

// Configuration
pub mod config;

// Re-exports
pub use config::PayloadConfig;
pub use elements::{Element, ElementBase, TextElement, ValidationErrors};
pub use error::{Error, Result};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
