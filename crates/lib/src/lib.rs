pub mod calibration;
pub mod cli;
pub mod cubes;
mod input;

pub use self::input::Input;
