mod group;
mod suit;
mod suits;

pub use group::*;
pub use suit::*;
pub use suits::*;
