mod failure;
mod round;

pub use failure::*;
pub use round::*;
