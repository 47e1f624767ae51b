mod gesture;
mod outcome;
mod relation;
mod round;

pub use gesture::*;
pub use outcome::*;
pub use relation::*;
pub use round::*;
