//! Axis-aligned rectangle primitive.

use serde_json::{Map, Value};

use crate::{
    color::Color,
    geometry::{Bounds, Point, Size},
    symbol::{Symbol, SymbolAttributes},
};

/// A rectangle centered on its location.
#[derive(Debug, Clone)]
pub struct Rectangle {
    attributes: SymbolAttributes,
    size: Size,
}

impl Rectangle {
    /// Creates a rectangle with the given identifier, width, and height,
    /// centered on the origin.
    pub fn new(identifier: i32, width: f32, height: f32) -> Self {
        Self {
            attributes: SymbolAttributes::new(identifier),
            size: Size::new(width, height),
        }
    }

    /// Returns the rectangle size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Set the center location (builder style).
    pub fn with_location(mut self, location: Point) -> Self {
        self.attributes.set_location(location);
        self
    }

    /// Set the display label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.attributes.set_label(label);
        self
    }

    /// Set the interior fill color (builder style).
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.attributes.set_fill_color(Some(color));
        self
    }

    /// Set the outline color (builder style).
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.attributes.set_stroke_color(color);
        self
    }

    /// Mutable access to the shared attributes.
    pub fn attributes_mut(&mut self) -> &mut SymbolAttributes {
        &mut self.attributes
    }
}

impl Symbol for Rectangle {
    fn identifier(&self) -> i32 {
        self.attributes.identifier()
    }

    fn shape_type(&self) -> &'static str {
        "rect"
    }

    fn dimensions(&self) -> Bounds {
        self.attributes.location().to_bounds(self.size)
    }

    fn representation(&self) -> Map<String, Value> {
        let mut fields = self.attributes.representation(self.shape_type());
        fields.insert("width".to_string(), Value::from(self.size.width()));
        fields.insert("height".to_string(), Value::from(self.size.height()));
        fields
    }
}
