use std::time::Instant;

use crate::core::actions::rasterize::fill_outline_rayon::fill_outline_rayon;
use crate::core::actions::rasterize::stroke_outline::stroke_outline;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_coord::PixelCoord;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::koch::params::KochParams;
use crate::storage::write_ppm::write_ppm;

/// Renders a one-shot snowflake snapshot to a PPM file.
pub fn snowflake_controller() -> Result<(), Box<dyn std::error::Error>> {
    let width: i32 = 420;
    let height: i32 = 420;
    let depth: u32 = 4;
    let margin: f64 = 32.0;
    let filepath = "output/snowflake.ppm";

    let pixel_rect = PixelRect::new(
        PixelCoord { x: 0, y: 0 },
        PixelCoord {
            x: width - 1,
            y: height - 1,
        },
    )?;

    // The canvas geometry from the interactive viewer: centered, with the
    // circumscribed circle inset by the margin.
    let center = Point {
        x: f64::from(width) / 2.0,
        y: f64::from(height) / 2.0,
    };
    let radius = f64::from(width.min(height)) / 2.0 - margin;
    let params = KochParams::new(center, radius, depth)?;

    println!("Rendering {}...", params.display_name());
    println!("Image size: {}x{}", width, height);
    println!("Recursion depth: {}", depth);

    let start = Instant::now();
    let outline = params.generate()?;
    let duration = start.elapsed();

    println!("Points:     {}", outline.len());
    println!("Duration:   {:?}", duration);

    let mut buffer = PixelBuffer::new(pixel_rect);
    buffer.clear(Colour::SURFACE);
    fill_outline_rayon(&outline, Colour::SNOW, &mut buffer)?;
    stroke_outline(&outline, Colour::STROKE, &mut buffer)?;

    std::fs::create_dir_all("output")?;
    write_ppm(&buffer, filepath)?;
    println!("Saved to {}", filepath);

    Ok(())
}
