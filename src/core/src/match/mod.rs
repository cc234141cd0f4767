pub mod award;
pub mod engine;
pub mod result;
pub mod squad;

pub use award::*;
pub use engine::*;
pub use result::*;
pub use squad::*;
