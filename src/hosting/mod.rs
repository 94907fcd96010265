mod admin;
mod courier;
mod desk;
mod journal;
mod server;
mod telegram;
mod webhook;

pub use admin::*;
pub use courier::*;
pub use desk::*;
pub use journal::*;
pub use server::*;
pub use telegram::*;
pub use webhook::*;
