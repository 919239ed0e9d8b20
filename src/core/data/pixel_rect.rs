use std::error::Error;
use std::fmt;

use crate::core::data::pixel_coord::PixelCoord;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// An inclusive raster rectangle: both corners are drawable coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: PixelCoord,
    bottom_right: PixelCoord,
}

impl PixelRect {
    pub fn new(top_left: PixelCoord, bottom_right: PixelCoord) -> Result<Self, PixelRectError> {
        let width = (bottom_right.x as i64) - (top_left.x as i64) + 1;
        let height = (bottom_right.y as i64) - (top_left.y as i64) + 1;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> PixelCoord {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> PixelCoord {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains(&self, coord: PixelCoord) -> bool {
        self.top_left.x <= coord.x
            && self.top_left.y <= coord.y
            && self.bottom_right.x >= coord.x
            && self.bottom_right.y >= coord.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let top_left = PixelCoord { x: 0, y: 0 };
        let bottom_right = PixelCoord { x: 99, y: 99 };

        let rect = PixelRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_dimensions_are_inclusive() {
        let rect = PixelRect::new(
            PixelCoord { x: -10, y: -20 },
            PixelCoord { x: 110, y: 80 },
        )
        .unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
    }

    #[test]
    fn test_dimensions_must_be_positive() {
        let negative_width = PixelRect::new(
            PixelCoord { x: 0, y: 0 },
            PixelCoord { x: -100, y: 10 },
        );
        let negative_height = PixelRect::new(
            PixelCoord { x: 0, y: 0 },
            PixelCoord { x: 100, y: -10 },
        );

        assert_eq!(
            negative_width.unwrap_err(),
            PixelRectError::InvalidSize {
                width: -99,
                height: 11
            }
        );
        assert_eq!(
            negative_height.unwrap_err(),
            PixelRectError::InvalidSize {
                width: 101,
                height: -9
            }
        );
    }

    #[test]
    fn test_single_pixel_rect_rejected() {
        let result = PixelRect::new(PixelCoord { x: 5, y: 5 }, PixelCoord { x: 5, y: 5 });

        assert_eq!(
            result.unwrap_err(),
            PixelRectError::InvalidSize {
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn test_contains() {
        let rect =
            PixelRect::new(PixelCoord { x: 0, y: 0 }, PixelCoord { x: 10, y: 10 }).unwrap();

        assert!(rect.contains(PixelCoord { x: 0, y: 0 }));
        assert!(rect.contains(PixelCoord { x: 10, y: 10 }));
        assert!(rect.contains(PixelCoord { x: 5, y: 7 }));
        assert!(!rect.contains(PixelCoord { x: 11, y: 5 }));
        assert!(!rect.contains(PixelCoord { x: 5, y: -1 }));
    }
}
