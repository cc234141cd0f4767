pub mod simulator;
pub mod snapshot;

pub use simulator::*;
pub use snapshot::*;
