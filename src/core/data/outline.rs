use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum OutlineError {
    TooFewPoints { count: usize },
    NotClosed { first: Point, last: Point },
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { count } => {
                write!(f, "closed outline needs at least 4 points, got {}", count)
            }
            Self::NotClosed { first, last } => {
                write!(
                    f,
                    "outline is not closed: first ({}, {}) != last ({}, {})",
                    first.x, first.y, last.x, last.y
                )
            }
        }
    }
}

impl Error for OutlineError {}

/// An explicitly closed polygon outline: an ordered walk of the boundary whose
/// last point repeats the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    pub fn from_points(points: Vec<Point>) -> Result<Self, OutlineError> {
        if points.len() < 4 {
            return Err(OutlineError::TooFewPoints {
                count: points.len(),
            });
        }

        let first = points[0];
        let last = points[points.len() - 1];
        if first != last {
            return Err(OutlineError::NotClosed { first, last });
        }

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the boundary edges as consecutive point pairs. The closing
    /// edge is included because the final point repeats the first.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Axis-aligned bounding box as (min corner, max corner).
    #[must_use]
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut min = self.points[0];
        let mut max = self.points[0];

        for point in &self.points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        (min, max)
    }
}
