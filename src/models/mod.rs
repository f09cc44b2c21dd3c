pub mod time;
pub mod visit;

pub use time::*;
pub use visit::*;
