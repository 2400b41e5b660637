pub mod calculator;
pub mod prompt;
pub mod session;

pub use crate::domain::model::{Side, SideGeometry, SpokeLengths, WheelGeometry};
pub use crate::domain::ports::DefaultsProvider;
pub use crate::utils::error::Result;
