//! Defines geometric primitives
//! Currently only defines bbox

/// An axis-aligned bounding box in device units.
/// The Y axis points down: `y_min` is the top edge and `y_max` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    /// minimal x-value
    pub x_min : i32,
    /// maximal x-value
    pub x_max : i32,
    /// minimal y-value
    pub y_min : i32,
    /// maximal y-value
    pub y_max : i32,
}

impl BBox {
    /// Creates new bbox from coordinates of extremal points
    /// Does not check the invariant that `x_min <= x_max` and `y_min <= y_max`
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        debug_assert!(x_min <= x_max);
        debug_assert!(y_min <= y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    /// Creates a bbox, given a position for top-left corner, width and height.
    /// Negative extents (e.g. a negative kern) are folded so the box stays well-formed.
    pub fn from_dims(x : i32, y : i32, width : i32, height : i32) -> Self {
        Self {
            x_min : i32::min(x, x + width), x_max : i32::max(x, x + width),
            y_min : i32::min(y, y + height), y_max : i32::max(y, y + height),
        }
    }

    /// Creates the smallest bbox containing both end points of a segment
    pub fn from_segment(x1 : i32, y1 : i32, x2 : i32, y2 : i32) -> Self {
        Self::single_point(x1, y1).enclose(x2, y2)
    }

    /// Creates a bbox corresponding to a zero-width zero-height point
    pub fn single_point(x : i32, y : i32) -> Self {
        Self {
            x_min : x, x_max : x,
            y_min : y, y_max : y,
        }
    }

    /// Creates the smallest bbox containing `self` and the point with coordinates `x` and `y`
    pub fn enclose(&self, x : i32, y: i32) -> Self {
        self.union(Self::single_point(x, y))
    }

    /// Creates the smallest bbox containing `self` and `other`
    pub fn union(&self, other: Self) -> Self {
        Self {
            x_min : i32::min(self.x_min, other.x_min),
            x_max : i32::max(self.x_max, other.x_max),
            y_min : i32::min(self.y_min, other.y_min),
            y_max : i32::max(self.y_max, other.y_max),
        }
    }

    /// Grows the box by `margin` on every side
    pub fn pad(&self, margin : i32) -> Self {
        Self {
            x_min : self.x_min - margin,
            x_max : self.x_max + margin,
            y_min : self.y_min - margin,
            y_max : self.y_max + margin,
        }
    }

    /// Width of the bounding box
    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// The unsigned distance between the top of the box and the bottom of the box
    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}


#[cfg(test)]
mod tests {
    use super::BBox;

    #[test]
    fn union_and_pad() {
        let a = BBox::from_dims(0, 0, 10, 5);
        let b = BBox::from_segment(12, 7, 4, -3);
        let u = a.union(b);
        assert_eq!(u, BBox::new(0, -3, 12, 7));
        assert_eq!(u.width(), 12);
        assert_eq!(u.height(), 10);
        assert_eq!(u.pad(2), BBox::new(-2, -5, 14, 9));
    }

    #[test]
    fn negative_dims_are_folded() {
        let kern = BBox::from_dims(10, 0, -4, 8);
        assert_eq!(kern, BBox::new(6, 0, 10, 8));
    }
}
