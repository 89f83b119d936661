pub mod cell;
pub mod table;

pub use cell::*;
pub use table::*;
