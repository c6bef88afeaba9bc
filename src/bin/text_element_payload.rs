//! Print the request payload for a text element.
//!
//! Reads a JSON description of a text element, applies every field through
//! the validating setters, runs a validation pass and prints the payload.
//!
//! Usage:
//!   cargo run --bin text_element_payload -- --input element.json
//!   cargo run --bin text_element_payload -- --input element.json --with-nulls
//!
//! Example description:
//!
//! ```text
//! {
//!   "text": "Hi",
//!   "text_align": "center",
//!   "font_family": "Arial",
//!   "font_size": 12.0,
//!   "bold": true,
//!   "font_color": "#000000",
//!   "coordinates": [100.0, 200.0]
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process;

use editpdf::elements::{Element, TextElement};
use editpdf::{PayloadConfig, Result};
use serde::Deserialize;

struct PayloadArgs {
    input: Option<PathBuf>,
    with_nulls: bool,
}

impl PayloadArgs {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut with_nulls = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--input" | "-i" => {
                    i += 1;
                    if i < args.len() {
                        input = Some(PathBuf::from(&args[i]));
                    }
                },
                "--with-nulls" => {
                    with_nulls = true;
                },
                other => {
                    log::warn!("Ignoring unknown argument {:?}", other);
                },
            }
            i += 1;
        }

        Self { input, with_nulls }
    }
}

/// Field-by-field description of a text element.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TextElementDescription {
    text: Option<String>,
    text_align: Option<String>,
    font_family: Option<String>,
    font_size: Option<f64>,
    font_color: Option<String>,
    letter_spacing: Option<f64>,
    line_height: Option<f64>,
    bold: bool,
    italic: bool,
    underline: Option<bool>,
    pages: Option<String>,
    coordinates: Option<[f64; 2]>,
    dimensions: Option<[f64; 2]>,
    rotation: Option<i32>,
    opacity: Option<i32>,
    zindex: Option<i32>,
}

impl TextElementDescription {
    fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn build(&self) -> Result<TextElement> {
        let mut element = TextElement::new();

        if let Some(text) = &self.text {
            element.set_text(text.as_str());
        }
        if let Some(align) = &self.text_align {
            element.set_text_align(align)?;
        }
        if let Some(family) = &self.font_family {
            element.set_font_family(family)?;
        }
        if let Some(size) = self.font_size {
            element.set_font_size(size)?;
        }
        if let Some(color) = &self.font_color {
            element.set_font_color(color)?;
        }
        if let Some(spacing) = self.letter_spacing {
            element.set_letter_spacing(spacing)?;
        }
        if let Some(height) = self.line_height {
            element.set_line_height(height)?;
        }
        if self.bold {
            element.set_bold();
        }
        if self.italic {
            element.set_italic();
        }
        match self.underline {
            Some(true) => {
                element.set_underline();
            },
            Some(false) => {
                element.unset_underline();
            },
            None => {},
        }

        let base = element.base_mut();
        if let Some(pages) = &self.pages {
            base.set_pages(pages)?;
        }
        if let Some([x, y]) = self.coordinates {
            base.set_coordinates(x, y)?;
        }
        if let Some([w, h]) = self.dimensions {
            base.set_dimensions(w, h)?;
        }
        if let Some(rotation) = self.rotation {
            base.set_rotation(rotation)?;
        }
        if let Some(opacity) = self.opacity {
            base.set_opacity(opacity)?;
        }
        if let Some(z_index) = self.zindex {
            base.set_z_index(z_index)?;
        }

        Ok(element)
    }
}

fn main() {
    env_logger::init();

    let args = PayloadArgs::from_args();
    let Some(input) = args.input else {
        eprintln!("Usage: text_element_payload --input <element.json> [--with-nulls]");
        process::exit(2);
    };

    let description = match TextElementDescription::from_path(&input) {
        Ok(description) => description,
        Err(e) => {
            eprintln!("Failed to read {}: {}", input.display(), e);
            process::exit(1);
        },
    };

    let mut element = match description.build() {
        Ok(element) => element,
        Err(e) => {
            eprintln!("Invalid element: {}", e);
            process::exit(1);
        },
    };

    if !element.validate() {
        eprintln!("Element is incomplete:");
        for error in element.errors() {
            eprintln!("  {}", error);
        }
        process::exit(1);
    }

    let config = PayloadConfig::new().with_unset_fields(args.with_nulls);
    match serde_json::to_string_pretty(&element.to_map_with(&config)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to encode payload: {}", e);
            process::exit(1);
        },
    }
}
