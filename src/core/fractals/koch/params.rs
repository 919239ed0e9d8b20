use crate::core::data::outline::Outline;
use crate::core::data::point::Point;
use crate::core::fractals::koch::algorithm::generate_snowflake;
use crate::core::fractals::koch::errors::KochError;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KochParams {
    center: Point,
    radius: f64,
    depth: u32,
}

impl KochParams {
    pub fn new(center: Point, radius: f64, depth: u32) -> Result<Self, KochError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(KochError::InvalidRadius { radius });
        }

        Ok(Self {
            center,
            radius,
            depth,
        })
    }

    pub fn display_name(&self) -> &str {
        "Koch snowflake"
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), KochError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(KochError::InvalidRadius { radius });
        }

        self.radius = radius;
        Ok(())
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn generate(&self) -> Result<Outline, KochError> {
        generate_snowflake(self.center, self.radius, self.depth)
    }
}
