mod camera;
mod error;
mod frame;

pub use camera::*;
pub use error::*;
pub use frame::*;
