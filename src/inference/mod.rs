mod classifier;
mod handle;

pub use classifier::*;
pub use handle::*;
