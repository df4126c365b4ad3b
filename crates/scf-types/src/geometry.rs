//! Page-layout geometry for cells and chunks tied to spatial source content.
//!
//! Coordinates use a top-left origin: `y` grows downward, so upper rows have
//! smaller `y` values than lower rows. Coordinates are unsigned — negative
//! positions are unrepresentable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: u32,
    /// Vertical offset from the top edge.
    pub y: u32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned bounding box described by its four corner points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Upper left corner.
    pub upper_left: Point,
    /// Lower left corner.
    pub lower_left: Point,
    /// Upper right corner.
    pub upper_right: Point,
    /// Lower right corner.
    pub lower_right: Point,
}

impl BoundingBox {
    /// Build a box from rectangle edges.
    pub fn from_rect(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            upper_left: Point::new(left, top),
            lower_left: Point::new(left, bottom),
            upper_right: Point::new(right, top),
            lower_right: Point::new(right, bottom),
        }
    }

    /// Box width. Signed so a malformed box reports a negative width
    /// instead of wrapping.
    pub fn width(&self) -> i64 {
        i64::from(self.upper_right.x) - i64::from(self.upper_left.x)
    }

    /// Box height, positive when the lower edge is below the upper edge.
    pub fn height(&self) -> i64 {
        i64::from(self.lower_left.y) - i64::from(self.upper_left.y)
    }

    /// Whether the point lies inside the box, edges inclusive.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.upper_left.x
            && x <= self.upper_right.x
            && y >= self.upper_left.y
            && y <= self.lower_left.y
    }

    /// Whether two boxes overlap. Touching edges do not count as overlap.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.upper_left.x < other.upper_right.x
            && self.upper_right.x > other.upper_left.x
            && self.upper_left.y < other.lower_left.y
            && self.lower_left.y > other.upper_left.y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UL{}, LL{}, UR{}, LR{}",
            self.upper_left, self.lower_left, self.upper_right, self.lower_right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rect_assigns_corners() {
        let bb = BoundingBox::from_rect(10, 20, 110, 60);
        assert_eq!(bb.upper_left, Point::new(10, 20));
        assert_eq!(bb.lower_left, Point::new(10, 60));
        assert_eq!(bb.upper_right, Point::new(110, 20));
        assert_eq!(bb.lower_right, Point::new(110, 60));
    }

    #[test]
    fn width_and_height() {
        let bb = BoundingBox::from_rect(10, 20, 110, 60);
        assert_eq!(bb.width(), 100);
        assert_eq!(bb.height(), 40);
    }

    #[test]
    fn contains_interior_and_edges() {
        let bb = BoundingBox::from_rect(10, 20, 110, 60);
        assert!(bb.contains(50, 40));
        assert!(bb.contains(10, 20));
        assert!(bb.contains(110, 60));
        assert!(!bb.contains(9, 40));
        assert!(!bb.contains(50, 61));
    }

    #[test]
    fn intersects_overlapping() {
        let a = BoundingBox::from_rect(0, 0, 100, 100);
        let b = BoundingBox::from_rect(50, 50, 150, 150);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn intersects_disjoint() {
        let a = BoundingBox::from_rect(0, 0, 100, 100);
        let b = BoundingBox::from_rect(200, 200, 300, 300);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = BoundingBox::from_rect(0, 0, 100, 100);
        let b = BoundingBox::from_rect(100, 0, 200, 100);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn display_lists_corners() {
        let bb = BoundingBox::from_rect(1, 2, 3, 4);
        assert_eq!(format!("{bb}"), "UL(1,2), LL(1,4), UR(3,2), LR(3,4)");
    }
}
