//! Container that aggregates symbols into one serialized group.

use std::collections::BTreeMap;

use log::debug;
use serde_json::{Map, Value};

use crate::{
    geometry::Bounds,
    symbol::{Symbol, SymbolAttributes},
};

/// A collection of symbols serialized as a single JSON object.
///
/// Children are keyed by identifier, and adding a symbol under an
/// already-used identifier replaces the previous entry. Iteration — and
/// therefore the order of the `"symbols"` array in the JSON output —
/// is identifier-sorted, so serialization is reproducible byte for
/// byte.
///
/// The group exclusively owns its children: symbols are moved in and
/// dropped with the group.
#[derive(Debug)]
pub struct SymbolGroup {
    attributes: SymbolAttributes,
    symbols: BTreeMap<i32, Box<dyn Symbol>>,
}

impl SymbolGroup {
    /// Creates an empty group with the given identifier.
    pub fn new(identifier: i32) -> Self {
        Self {
            attributes: SymbolAttributes::new(identifier),
            symbols: BTreeMap::new(),
        }
    }

    /// Set the display label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.attributes.set_label(label);
        self
    }

    /// Adds a symbol to the group, taking ownership of it.
    ///
    /// A symbol whose identifier is already present replaces the
    /// existing entry; the group's size is unchanged in that case.
    pub fn add_symbol(&mut self, symbol: Box<dyn Symbol>) {
        debug!(
            "adding symbol {} to group {}",
            symbol.identifier(),
            self.attributes.identifier()
        );
        self.symbols.insert(symbol.identifier(), symbol);
    }

    /// Returns the number of symbols directly in this group.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the group holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Symbol for SymbolGroup {
    fn identifier(&self) -> i32 {
        self.attributes.identifier()
    }

    fn shape_type(&self) -> &'static str {
        "group"
    }

    /// The union bounding extent over all owned symbols.
    ///
    /// Folds each child's bounds into [`Bounds::EMPTY`] component-wise,
    /// so an empty group reports the empty sentinel
    /// `(+inf, -inf, +inf, -inf)` rather than a valid box.
    fn dimensions(&self) -> Bounds {
        self.symbols
            .values()
            .fold(Bounds::EMPTY, |bounds, symbol| {
                bounds.merge(&symbol.dimensions())
            })
    }

    /// Builds the group's field map: the shared attribute fields with
    /// shape type `"group"`, then a `"symbols"` array holding each
    /// child's own field map with a `"parentID"` field appended that
    /// names this group's identifier.
    fn representation(&self) -> Map<String, Value> {
        let mut fields = self.attributes.representation(self.shape_type());

        let children: Vec<Value> = self
            .symbols
            .values()
            .map(|symbol| {
                let mut child = symbol.representation();
                child.insert(
                    "parentID".to_string(),
                    Value::from(self.attributes.identifier()),
                );
                Value::Object(child)
            })
            .collect();
        fields.insert("symbols".to_string(), Value::Array(children));

        fields
    }

    fn element_count(&self) -> usize {
        1 + self
            .symbols
            .values()
            .map(|symbol| symbol.element_count())
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        geometry::{Point, Size},
        symbol::{Circle, Rectangle},
    };

    fn rect_covering(identifier: i32, bounds: [f32; 4]) -> Rectangle {
        let [min_x, max_x, min_y, max_y] = bounds;
        let center = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
        let size = Size::new(max_x - min_x, max_y - min_y);
        Rectangle::new(identifier, size.width(), size.height()).with_location(center)
    }

    #[test]
    fn empty_group_reports_the_empty_sentinel() {
        let group = SymbolGroup::new(1);

        let bounds = group.dimensions();

        assert!(bounds.is_empty());
        assert_eq!(
            bounds.to_array(),
            [
                f32::INFINITY,
                f32::NEG_INFINITY,
                f32::INFINITY,
                f32::NEG_INFINITY
            ]
        );
    }

    #[test]
    fn empty_group_serializes_an_empty_symbols_array() {
        let group = SymbolGroup::new(1);

        let encoded = group.symbol_json();

        assert!(encoded.contains("\"symbols\":[]"));
        // Still valid JSON, no dangling separators.
        let parsed: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(parsed["symbols"], json!([]));
    }

    #[test]
    fn duplicate_identifier_replaces_without_growing() {
        let mut group = SymbolGroup::new(1);
        group.add_symbol(Box::new(Rectangle::new(5, 2.0, 2.0)));
        group.add_symbol(Box::new(Circle::new(5, 9.0)));

        assert_eq!(group.len(), 1);

        let parsed: Value = serde_json::from_str(&group.symbol_json()).unwrap();
        let children = parsed["symbols"].as_array().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["type"], "circle");
        assert_eq!(children[0]["r"], 9.0);
    }

    #[test]
    fn children_serialize_in_identifier_order() {
        let mut group = SymbolGroup::new(1);
        group.add_symbol(Box::new(Rectangle::new(30, 1.0, 1.0)));
        group.add_symbol(Box::new(Rectangle::new(10, 1.0, 1.0)));
        group.add_symbol(Box::new(Rectangle::new(20, 1.0, 1.0)));

        let parsed: Value = serde_json::from_str(&group.symbol_json()).unwrap();
        let ids: Vec<i64> = parsed["symbols"]
            .as_array()
            .unwrap()
            .iter()
            .map(|child| child["id"].as_i64().unwrap())
            .collect();

        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn serialization_is_reproducible() {
        let mut group = SymbolGroup::new(2);
        group.add_symbol(Box::new(Rectangle::new(1, 4.0, 4.0)));
        group.add_symbol(Box::new(Circle::new(2, 1.0)));

        assert_eq!(group.symbol_json(), group.symbol_json());
    }

    #[test]
    fn two_symbol_group_round_trip() {
        let mut group = SymbolGroup::new(7);
        group.add_symbol(Box::new(rect_covering(1, [0.0, 10.0, 0.0, 5.0])));
        group.add_symbol(Box::new(rect_covering(2, [-3.0, 4.0, 2.0, 8.0])));

        let bounds = group.dimensions();
        assert_approx_eq!(f32, bounds.min_x(), -3.0);
        assert_approx_eq!(f32, bounds.max_x(), 10.0);
        assert_approx_eq!(f32, bounds.min_y(), 0.0);
        assert_approx_eq!(f32, bounds.max_y(), 8.0);

        let encoded = group.symbol_json();
        let parsed: Value = serde_json::from_str(&encoded).unwrap();
        let children = parsed["symbols"].as_array().unwrap();
        assert_eq!(children.len(), 2);
        for child in children {
            assert_eq!(child["parentID"], 7);
        }

        // Exactly one separator between the two entries, none trailing.
        assert_eq!(encoded.matches("\"parentID\":7").count(), 2);
        assert!(!encoded.contains(",]"));
        assert!(!encoded.contains(",}"));
    }

    #[test]
    fn nested_groups_count_every_element() {
        let mut inner = SymbolGroup::new(10);
        inner.add_symbol(Box::new(Circle::new(11, 1.0)));
        inner.add_symbol(Box::new(Circle::new(12, 1.0)));

        let mut outer = SymbolGroup::new(1);
        outer.add_symbol(Box::new(inner));
        outer.add_symbol(Box::new(Rectangle::new(2, 1.0, 1.0)));

        // outer + rect + inner + two circles
        assert_eq!(outer.element_count(), 5);
    }

    #[test]
    fn nested_group_children_link_to_their_own_parent() {
        let mut inner = SymbolGroup::new(10);
        inner.add_symbol(Box::new(Circle::new(11, 1.0)));

        let mut outer = SymbolGroup::new(1);
        outer.add_symbol(Box::new(inner));

        let parsed: Value = serde_json::from_str(&outer.symbol_json()).unwrap();
        let inner_json = &parsed["symbols"][0];
        assert_eq!(inner_json["parentID"], 1);
        assert_eq!(inner_json["symbols"][0]["parentID"], 10);
    }
}
