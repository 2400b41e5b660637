use crate::config::defaults::WheelDefaults;

/// Source of the values offered when a prompt is left blank.
pub trait DefaultsProvider: Send + Sync {
    fn defaults(&self) -> &WheelDefaults;
}

impl DefaultsProvider for WheelDefaults {
    fn defaults(&self) -> &WheelDefaults {
        self
    }
}
