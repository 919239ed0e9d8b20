use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Outbound port for writing a finished snowflake snapshot to disk.
///
/// The render controller hands over the rasterized framebuffer; the
/// implementor picks the file format.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
