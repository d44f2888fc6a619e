mod cell;
mod field;
mod preset;

pub use cell::Cell;
pub use field::Field;
pub use preset::Preset;
