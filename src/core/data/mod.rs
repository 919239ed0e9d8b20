pub mod colour;
pub mod outline;
pub mod pixel_buffer;
pub mod pixel_coord;
pub mod pixel_rect;
pub mod point;
