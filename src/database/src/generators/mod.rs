pub mod generator;
pub mod player;

pub use generator::*;
pub use player::*;
