pub mod names;
pub mod team;
pub mod venue;

pub use names::*;
pub use team::*;
pub use venue::*;
