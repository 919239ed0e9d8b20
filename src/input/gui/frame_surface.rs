use std::error::Error;
use std::fmt;

use crate::core::actions::rasterize::ports::paint_surface::PaintSurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_coord::PixelCoord;
use crate::core::data::pixel_rect::PixelRect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSurfaceError {
    SizeMismatch {
        expected_bytes: usize,
        actual_bytes: usize,
    },
    PixelOutsideBounds {
        coord: PixelCoord,
    },
}

impl fmt::Display for FrameSurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected_bytes,
                actual_bytes,
            } => {
                write!(
                    f,
                    "frame size mismatch: expected {} bytes, got {}",
                    expected_bytes, actual_bytes
                )
            }
            Self::PixelOutsideBounds { coord } => {
                write!(f, "pixel at x:{}, y:{} outside of frame", coord.x, coord.y)
            }
        }
    }
}

impl Error for FrameSurfaceError {}

/// Adapts the pixels crate's RGBA frame to the rasterize actions' paint port,
/// so the GUI draws with the same fill and stroke code as the PPM snapshot.
pub struct FrameSurface<'frame> {
    frame: &'frame mut [u8],
    pixel_rect: PixelRect,
    width: u32,
}

impl<'frame> FrameSurface<'frame> {
    pub fn new(
        frame: &'frame mut [u8],
        pixel_rect: PixelRect,
    ) -> Result<Self, FrameSurfaceError> {
        let width = pixel_rect.width();
        let expected_bytes = (width * pixel_rect.height() * 4) as usize;

        if frame.len() != expected_bytes {
            return Err(FrameSurfaceError::SizeMismatch {
                expected_bytes,
                actual_bytes: frame.len(),
            });
        }

        Ok(Self {
            frame,
            pixel_rect,
            width,
        })
    }

    /// Floods the frame with one opaque colour.
    pub fn clear(&mut self, colour: Colour) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
            pixel[3] = 255;
        }
    }

    fn byte_index(&self, coord: PixelCoord) -> usize {
        let relative_x = (coord.x - self.pixel_rect.top_left().x) as u32;
        let relative_y = (coord.y - self.pixel_rect.top_left().y) as u32;
        ((relative_y * self.width + relative_x) * 4) as usize
    }

    fn write_rgba(&mut self, index: usize, colour: Colour) {
        self.frame[index] = colour.r;
        self.frame[index + 1] = colour.g;
        self.frame[index + 2] = colour.b;
        self.frame[index + 3] = 255;
    }
}

impl PaintSurface for FrameSurface<'_> {
    type Failure = FrameSurfaceError;

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    fn paint_pixel(&mut self, coord: PixelCoord, colour: Colour) -> Result<(), Self::Failure> {
        if !self.pixel_rect.contains(coord) {
            return Err(FrameSurfaceError::PixelOutsideBounds { coord });
        }

        let index = self.byte_index(coord);
        self.write_rgba(index, colour);

        Ok(())
    }

    fn paint_span(
        &mut self,
        y: i32,
        x_start: i32,
        x_end: i32,
        colour: Colour,
    ) -> Result<(), Self::Failure> {
        if y < self.pixel_rect.top_left().y || y > self.pixel_rect.bottom_right().y {
            return Err(FrameSurfaceError::PixelOutsideBounds {
                coord: PixelCoord { x: x_start, y },
            });
        }

        let from = x_start.max(self.pixel_rect.top_left().x);
        let to = x_end.min(self.pixel_rect.bottom_right().x);

        for x in from..=to {
            let index = self.byte_index(PixelCoord { x, y });
            self.write_rgba(index, colour);
        }

        Ok(())
    }
}
