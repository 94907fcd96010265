mod cooldown;
mod oracle;
mod policy;
mod prediction;
mod status;
mod store;

pub use cooldown::*;
pub use oracle::*;
pub use policy::*;
pub use prediction::*;
pub use status::*;
pub use store::*;
