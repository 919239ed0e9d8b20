use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelCoord {
    pub x: i32,
    pub y: i32,
}

impl PixelCoord {
    /// Rounds a geometric point to the nearest raster coordinate.
    #[must_use]
    pub fn from_point(point: Point) -> Self {
        Self {
            x: point.x.round() as i32,
            y: point.y.round() as i32,
        }
    }
}
