pub mod ball;
pub mod distribution;

pub use ball::*;
pub use distribution::*;
