use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KochError {
    InvalidRadius { radius: f64 },
}

impl fmt::Display for KochError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => {
                write!(f, "snowflake radius must be finite and positive: {}", radius)
            }
        }
    }
}

impl Error for KochError {}
