//! Basic geometric types used by symbols and their bounding extents.

/// Represents a location in the symbol coordinate space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            max_x: self.x + half_width,
            min_y: self.y - half_height,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of a symbol with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// A rectangular bounding extent.
///
/// Components are kept in the `(min_x, max_x, min_y, max_y)` order the
/// visualization backend expects; [`Bounds::to_array`] preserves that
/// order exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl Bounds {
    /// The empty extent: the fold identity for [`Bounds::merge`].
    ///
    /// Every component starts at the opposite infinity, so merging any
    /// real bounds into it yields that bounds unchanged. A container
    /// with no symbols reports this value; callers must treat it as
    /// "no extent", not as a valid box.
    pub const EMPTY: Bounds = Bounds {
        min_x: f32::INFINITY,
        max_x: f32::NEG_INFINITY,
        min_y: f32::INFINITY,
        max_y: f32::NEG_INFINITY,
    };

    /// Creates bounds from its four components, in backend order.
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns true if this bounds describes no extent.
    ///
    /// [`Bounds::EMPTY`] is the only value produced by this crate for
    /// which this holds.
    pub fn is_empty(self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Merges two bounds to create a larger bounds that contains both
    ///
    /// The resulting bounds will have the minimum values of both bounds
    /// for min_x and min_y, and the maximum values of both bounds for
    /// max_x and max_y.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds just enough to contain the given point.
    pub fn include_point(&self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x()),
            max_x: self.max_x.max(point.x()),
            min_y: self.min_y.min(point.y()),
            max_y: self.max_y.max(point.y()),
        }
    }

    /// Returns the components as `[min_x, max_x, min_y, max_y]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.min_x, self.max_x, self.min_y, self.max_y]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}
