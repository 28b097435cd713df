//! General CLI preferences.

use serde::{Deserialize, Serialize};

fn default_output() -> String {
    String::from("json")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default output format for `sift` commands (`json` or `raw`).
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(GeneralConfig::default().output, "json");
    }
}
