//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Extra attempts when loading the group list fails.
    #[serde(default)]
    pub retries: u32,

    /// Render group cards expanded by default.
    #[serde(default)]
    pub expand: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.retries, 0);
        assert!(!config.expand);
    }
}
