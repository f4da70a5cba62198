//! Drawable symbol primitives and the group container.
//!
//! Every symbol knows its identifier, its shape-type tag, its bounding
//! extent, and how to produce the ordered JSON field map the
//! visualization backend consumes. The field map is the unit of
//! composition: containers append linkage fields (such as `parentID`)
//! to a child's map before the map is serialized, so the emitted JSON
//! is assembled structurally rather than by splicing strings.

use serde_json::{Map, Value, json};

use crate::{
    color::Color,
    geometry::{Bounds, Point},
};

mod circle;
mod group;
mod label;
mod polygon;
mod rectangle;

pub use circle::Circle;
pub use group::SymbolGroup;
pub use label::Label;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

/// A drawable visual element.
///
/// Implemented by the shape primitives in this module and by
/// [`SymbolGroup`], which nests other symbols.
pub trait Symbol: std::fmt::Debug {
    /// Identifier for this symbol, unique within its owning container.
    fn identifier(&self) -> i32;

    /// Fixed tag naming the shape kind (`"rect"`, `"circle"`, ...).
    /// Must not vary between calls on the same concrete type.
    fn shape_type(&self) -> &'static str;

    /// The bounding extent of this symbol, in
    /// `(min_x, max_x, min_y, max_y)` component order.
    fn dimensions(&self) -> Bounds;

    /// Ordered field map for this symbol's JSON object.
    ///
    /// Shared attribute fields come first (shape type, identifier,
    /// style), followed by shape-specific fields. Containers may append
    /// further fields to the returned map before serializing it.
    fn representation(&self) -> Map<String, Value>;

    /// Number of visual elements this symbol contributes to a
    /// submission, counting nested children.
    fn element_count(&self) -> usize {
        1
    }

    /// Compact JSON encoding of [`Symbol::representation`].
    fn symbol_json(&self) -> String {
        Value::Object(self.representation()).to_string()
    }
}

/// Shared identifier, placement, and style state for symbols.
///
/// Each primitive embeds one of these and delegates its shared JSON
/// fields to [`SymbolAttributes::representation`], so all symbols emit
/// the same attribute fields in the same order.
#[derive(Debug, Clone)]
pub struct SymbolAttributes {
    identifier: i32,
    label: Option<String>,
    location: Point,
    fill_color: Option<Color>,
    stroke_color: Color,
    stroke_width: f32,
    opacity: f32,
}

impl SymbolAttributes {
    /// Creates attributes for the given identifier with default styling:
    /// no label, origin location, no fill, black unit stroke, opaque.
    pub fn new(identifier: i32) -> Self {
        Self {
            identifier,
            label: None,
            location: Point::default(),
            fill_color: None,
            stroke_color: Color::default(),
            stroke_width: 1.0,
            opacity: 1.0,
        }
    }

    /// Returns the symbol identifier.
    pub fn identifier(&self) -> i32 {
        self.identifier
    }

    /// Returns the display label, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the symbol location.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Set the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Set the display label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Set the symbol location.
    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    /// Set the symbol location (builder style).
    pub fn with_location(mut self, location: Point) -> Self {
        self.set_location(location);
        self
    }

    /// Set the interior fill color. `None` leaves the shape unfilled.
    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    /// Set the interior fill color (builder style).
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.set_fill_color(Some(color));
        self
    }

    /// Set the outline color.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// Set the outline color (builder style).
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.set_stroke_color(color);
        self
    }

    /// Set the outline width.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    /// Set the outline width (builder style).
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.set_stroke_width(width);
        self
    }

    /// Set the symbol opacity, in `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Set the symbol opacity (builder style).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.set_opacity(opacity);
        self
    }

    /// The shared attribute-serialization routine.
    ///
    /// Emits the fields common to every symbol, in a fixed order: shape
    /// type, identifier, label (when set), location, fill (when set),
    /// stroke, stroke width, opacity. Shape-specific fields are
    /// appended by the caller after these.
    pub(crate) fn representation(&self, shape_type: &'static str) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::from(shape_type));
        fields.insert("id".to_string(), Value::from(self.identifier));
        if let Some(label) = &self.label {
            fields.insert("label".to_string(), Value::from(label.as_str()));
        }
        fields.insert(
            "location".to_string(),
            json!([self.location.x(), self.location.y()]),
        );
        if let Some(fill) = &self.fill_color {
            fields.insert("fill".to_string(), Value::from(fill.to_string()));
        }
        fields.insert("stroke".to_string(), Value::from(self.stroke_color.to_string()));
        fields.insert("stroke-width".to_string(), Value::from(self.stroke_width));
        fields.insert("opacity".to_string(), Value::from(self.opacity));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_fields_start_with_type_and_id() {
        let attributes = SymbolAttributes::new(42).with_label("answer");

        let fields = attributes.representation("rect");
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();

        assert_eq!(keys[0], "type");
        assert_eq!(keys[1], "id");
        assert_eq!(fields["type"], "rect");
        assert_eq!(fields["id"], 42);
        assert_eq!(fields["label"], "answer");
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let fields = SymbolAttributes::new(1).representation("circle");

        assert!(!fields.contains_key("label"));
        assert!(!fields.contains_key("fill"));
        assert!(fields.contains_key("stroke"));
        assert!(fields.contains_key("opacity"));
    }
}
