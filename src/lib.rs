mod defs;
pub use crate::defs::*;

mod greet;
pub use crate::greet::*;

mod output;
pub use crate::output::*;
