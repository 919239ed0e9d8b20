#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Light blue canvas background (#e3f2fd).
    pub const SURFACE: Colour = Colour {
        r: 0xe3,
        g: 0xf2,
        b: 0xfd,
    };

    /// White snowflake interior.
    pub const SNOW: Colour = Colour {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };

    /// Near-black outline stroke (#222).
    pub const STROKE: Colour = Colour {
        r: 0x22,
        g: 0x22,
        b: 0x22,
    };
}
