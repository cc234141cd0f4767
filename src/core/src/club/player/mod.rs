pub mod builder;
pub mod player;
pub mod profile;
pub mod statistics;

pub use builder::*;
pub use player::*;
pub use profile::*;
pub use statistics::*;
