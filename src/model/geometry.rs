//! Pixel geometry: recognizer polygons and axis-aligned rectangles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A polygon vertex in image pixel coordinates.
///
/// Recognizers omit zero-valued coordinates from their JSON, so both fields
/// default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Horizontal coordinate
    #[serde(default)]
    pub x: i32,

    /// Vertical coordinate
    #[serde(default)]
    pub y: i32,
}

impl Vertex {
    /// Create a vertex.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Create a rectangle from two corners given in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Rectangle anchored at the origin covering a `width` x `height` image.
    pub fn from_size(width: u32, height: u32) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self::new(0, 0, clamp(width), clamp(height))
    }

    /// Approximate a recognizer polygon by the rectangle spanned by its
    /// vertex 0 (top-left) and vertex 2 (bottom-right).
    ///
    /// Rotated text boxes are not axis-aligned; they come out approximated.
    /// Returns `None` when the polygon has fewer than three vertices.
    pub fn from_polygon(vertices: &[Vertex]) -> Option<Self> {
        let top_left = vertices.first()?;
        let bottom_right = vertices.get(2)?;
        Some(Self::new(
            top_left.x,
            top_left.y,
            bottom_right.x,
            bottom_right.y,
        ))
    }

    /// The smallest rectangle covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Bounding rectangle of a set of rectangles.
    ///
    /// An empty set has no bounding rectangle; callers decide what that
    /// means for them instead of receiving a zero rectangle.
    pub fn bounding<I>(rects: I) -> Option<Self>
    where
        I: IntoIterator<Item = Rect>,
    {
        rects.into_iter().reduce(|acc, r| acc.union(&r))
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

/// Renders as `x0 y0 x1 y1`, the order hOCR `bbox` properties use.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x0, self.y0, self.x1, self.y1)
    }
}
