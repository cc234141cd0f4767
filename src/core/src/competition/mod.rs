pub mod format;
pub mod pitch;
pub mod venue;

pub use format::*;
pub use pitch::*;
pub use venue::*;
