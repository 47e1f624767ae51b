mod checkpoint;
mod error;
mod input;
mod network;
mod runtime;
mod scores;
mod squeezenet;

pub use checkpoint::*;
pub use error::*;
pub use input::*;
pub use network::*;
pub use runtime::*;
pub use scores::*;
pub use squeezenet::*;
