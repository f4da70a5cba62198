//! Circle primitive.

use serde_json::{Map, Value};

use crate::{
    color::Color,
    geometry::{Bounds, Point, Size},
    symbol::{Symbol, SymbolAttributes},
};

/// A circle centered on its location.
#[derive(Debug, Clone)]
pub struct Circle {
    attributes: SymbolAttributes,
    radius: f32,
}

impl Circle {
    /// Creates a circle with the given identifier and radius, centered
    /// on the origin.
    pub fn new(identifier: i32, radius: f32) -> Self {
        Self {
            attributes: SymbolAttributes::new(identifier),
            radius,
        }
    }

    /// Returns the circle radius.
    pub fn radius(&self) -> f32 {
        self.radius
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

    /// Mutable access to the shared attributes.
    pub fn attributes_mut(&mut self) -> &mut SymbolAttributes {
        &mut self.attributes
    }
}

impl Symbol for Circle {
    fn identifier(&self) -> i32 {
        self.attributes.identifier()
    }

    fn shape_type(&self) -> &'static str {
        "circle"
    }

    fn dimensions(&self) -> Bounds {
        let diameter = self.radius * 2.0;
        self.attributes
            .location()
            .to_bounds(Size::new(diameter, diameter))
    }

    fn representation(&self) -> Map<String, Value> {
        let mut fields = self.attributes.representation(self.shape_type());
        fields.insert("r".to_string(), Value::from(self.radius));
        fields
    }
}
