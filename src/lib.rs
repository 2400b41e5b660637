pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{defaults::WheelDefaults, toml_config::TomlConfig};
pub use core::{
    calculator::compute,
    session::{InteractiveSession, SessionSummary},
};
pub use domain::model::{Side, SideGeometry, SpokeLengths, WheelGeometry};
pub use utils::error::{Result, SpokeError};
