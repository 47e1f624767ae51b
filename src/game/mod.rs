mod channel;
mod config;
mod controller;
mod countdown;
mod event;
mod room;
mod surface;
#[cfg(feature = "cli")]
mod terminal;

pub use channel::*;
pub use config::*;
pub use controller::*;
pub use countdown::*;
pub use event::*;
pub use room::*;
pub use surface::*;
#[cfg(feature = "cli")]
pub use terminal::*;
