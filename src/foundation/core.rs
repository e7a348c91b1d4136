pub use kurbo::{Point, Rect, Size};

/// Position of a node relative to the origin of the container that owns it.
pub type Position = Point;

/// One of the two layout axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis; sizes along it are widths.
    Horizontal,
    /// The y axis; sizes along it are heights.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Overwrite the extent of `size` along this axis.
    pub fn set_extent(self, size: &mut Size, value: f64) {
        match self {
            Self::Horizontal => size.width = value,
            Self::Vertical => size.height = value,
        }
    }

    /// Coordinate of `point` along this axis.
    pub fn coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Overwrite the coordinate of `point` along this axis.
    pub fn set_coord(self, point: &mut Point, value: f64) {
        match self {
            Self::Horizontal => point.x = value,
            Self::Vertical => point.y = value,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
