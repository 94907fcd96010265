mod decision;
mod drafts;
mod ledger;
mod routes;
mod seen;
#[allow(clippy::module_inception)]
mod tracker;
mod update;

pub use decision::*;
pub use drafts::*;
pub use ledger::*;
pub use routes::*;
pub use seen::*;
pub use tracker::*;
pub use update::*;
