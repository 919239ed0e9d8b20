pub mod fill_outline;
pub mod fill_outline_rayon;
pub mod ports;
pub mod scanline;
pub mod stroke_outline;
