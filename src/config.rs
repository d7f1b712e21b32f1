use serde::Deserialize;
use std::collections::HashMap;

/// Options accepted from the host as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parse JSX when the crate parses text itself.
    pub jsx: bool,
    /// Drop a leading `"use strict"` directive; ES modules are strict already.
    pub strip_use_strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jsx: false,
            strip_use_strict: true,
        }
    }
}

impl Config {
    /// Reads options from a JSON map. Unknown keys are ignored.
    pub fn from_options(options: HashMap<String, serde_json::Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(options.into_iter().collect()))
    }
}
