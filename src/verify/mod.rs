mod outcome;
mod referee;

pub use outcome::*;
pub use referee::*;
