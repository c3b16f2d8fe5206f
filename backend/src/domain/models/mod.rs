pub mod baby;
pub mod date;
pub mod weight;

pub use baby::Baby;
pub use date::{Date, DateParseError};
pub use weight::Weight;
