//! Text label primitive.

use serde_json::{Map, Value};

use crate::{
    geometry::{Bounds, Point, Size},
    symbol::{Symbol, SymbolAttributes},
};

// Rough advance width per glyph, as a fraction of the font size. The
// backend lays text out with real font metrics; this estimate only
// feeds bounding-box aggregation on the client.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// A text label centered on its location.
#[derive(Debug, Clone)]
pub struct Label {
    attributes: SymbolAttributes,
    text: String,
    font_size: f32,
}

impl Label {
    /// Creates a label with the given identifier and text, centered on
    /// the origin with a 12-point font.
    pub fn new(identifier: i32, text: impl Into<String>) -> Self {
        Self {
            attributes: SymbolAttributes::new(identifier),
            text: text.into(),
            font_size: 12.0,
        }
    }

    /// Returns the label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Set the center location (builder style).
    pub fn with_location(mut self, location: Point) -> Self {
        self.attributes.set_location(location);
        self
    }

    /// Set the font size (builder style).
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Mutable access to the shared attributes.
    pub fn attributes_mut(&mut self) -> &mut SymbolAttributes {
        &mut self.attributes
    }
}

impl Symbol for Label {
    fn identifier(&self) -> i32 {
        self.attributes.identifier()
    }

    fn shape_type(&self) -> &'static str {
        "text"
    }

    /// Estimated extent of the rendered text, centered on the location.
    fn dimensions(&self) -> Bounds {
        let width = self.text.chars().count() as f32 * self.font_size * GLYPH_WIDTH_RATIO;
        self.attributes
            .location()
            .to_bounds(Size::new(width, self.font_size))
    }

    fn representation(&self) -> Map<String, Value> {
        let mut fields = self.attributes.representation(self.shape_type());
        fields.insert("text".to_string(), Value::from(self.text.as_str()));
        fields.insert("font-size".to_string(), Value::from(self.font_size));
        fields
    }
}
