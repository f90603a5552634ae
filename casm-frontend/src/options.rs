//! Translation options
//!
//! Options can be built in code or loaded from a JSON file; missing keys
//! take their defaults.

use serde::{Deserialize, Serialize};

/// Options that shape the emitted module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateOptions {
    /// Name of the wrapper function
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Directive emitted as the first statement of the wrapper
    #[serde(default = "default_directive")]
    pub directive: String,
}

fn default_module_name() -> String {
    "Module".to_string()
}

fn default_directive() -> String {
    "use asm".to_string()
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            directive: default_directive(),
        }
    }
}

impl TranslateOptions {
    /// Parse options from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
