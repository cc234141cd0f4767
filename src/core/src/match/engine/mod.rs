pub mod ball;
pub mod engine;
pub mod innings;

pub use ball::*;
pub use engine::*;
pub use innings::*;
