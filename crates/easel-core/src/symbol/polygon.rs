//! Closed polygon primitive.

use serde_json::{Map, Value, json};

use crate::{
    color::Color,
    geometry::{Bounds, Point},
    symbol::{Symbol, SymbolAttributes},
};

/// A closed polygon described by its vertices.
///
/// Vertices are absolute coordinates; the polygon's location attribute
/// does not offset them.
#[derive(Debug, Clone)]
pub struct Polygon {
    attributes: SymbolAttributes,
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon with the given identifier and no vertices.
    pub fn new(identifier: i32) -> Self {
        Self {
            attributes: SymbolAttributes::new(identifier),
            points: Vec::new(),
        }
    }

    /// Appends a vertex to the polygon outline.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Appends a vertex (builder style).
    pub fn with_point(mut self, point: Point) -> Self {
        self.add_point(point);
        self
    }

    /// Returns the polygon vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
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

impl Symbol for Polygon {
    fn identifier(&self) -> i32 {
        self.attributes.identifier()
    }

    fn shape_type(&self) -> &'static str {
        "polygon"
    }

    /// Folds the vertices into a bounding extent. A polygon with no
    /// vertices reports [`Bounds::EMPTY`].
    fn dimensions(&self) -> Bounds {
        self.points
            .iter()
            .fold(Bounds::EMPTY, |bounds, point| bounds.include_point(*point))
    }

    fn representation(&self) -> Map<String, Value> {
        let mut fields = self.attributes.representation(self.shape_type());
        let flattened: Vec<Value> = self
            .points
            .iter()
            .flat_map(|p| [json!(p.x()), json!(p.y())])
            .collect();
        fields.insert("points".to_string(), Value::Array(flattened));
        fields
    }
}
