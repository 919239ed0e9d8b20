use std::error::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_coord::PixelCoord;
use crate::core::data::pixel_rect::PixelRect;

/// Outbound port for anything the rasterize actions can paint on: the RGB
/// snapshot buffer, or the GUI's RGBA frame.
pub trait PaintSurface {
    type Failure: Error;

    fn pixel_rect(&self) -> PixelRect;

    fn paint_pixel(&mut self, coord: PixelCoord, colour: Colour) -> Result<(), Self::Failure>;

    /// Paints a horizontal run on row `y` from `x_start` to `x_end` inclusive,
    /// clipped to the surface horizontally.
    fn paint_span(
        &mut self,
        y: i32,
        x_start: i32,
        x_end: i32,
        colour: Colour,
    ) -> Result<(), Self::Failure>;
}

impl PaintSurface for PixelBuffer {
    type Failure = PixelBufferError;

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect()
    }

    fn paint_pixel(&mut self, coord: PixelCoord, colour: Colour) -> Result<(), Self::Failure> {
        self.set_pixel(coord, colour)
    }

    fn paint_span(
        &mut self,
        y: i32,
        x_start: i32,
        x_end: i32,
        colour: Colour,
    ) -> Result<(), Self::Failure> {
        self.set_row_span(y, x_start, x_end, colour)
    }
}
