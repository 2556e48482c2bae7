mod round;
mod table;

pub use round::{round, rounds};
pub use table::table;
