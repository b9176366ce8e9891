use serde::{
    Deserialize,
    Serialize,
};

/// Persisted preferences. Read once at startup, written on every theme
/// toggle.
#[derive(Default, Clone, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default)]
    pub dark_mode: bool,
}
