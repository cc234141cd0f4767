pub mod popularity;
pub mod records;
pub mod resolver;
pub mod result;
pub mod schedule;
pub mod table;

pub use popularity::*;
pub use records::*;
pub use resolver::*;
pub use result::*;
pub use schedule::*;
pub use table::*;
