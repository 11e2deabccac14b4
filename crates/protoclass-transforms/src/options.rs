//! Conversion options, loadable from JSON.
//!
//! ```json
//! { "mergeStaticMethods": true, "reportUnknownClasses": "false" }
//! ```

use serde::{Deserialize, Deserializer};

/// Accepts both bool and string values (`"true"`, `"no"`, `"1"`, ...).
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConversionOptions {
    /// Merge `Ns.Class.method = function() {}` as static members.
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_or_string")]
    pub merge_static_methods: bool,
    /// Report prototype assignments that name an unregistered class.
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_or_string")]
    pub report_unknown_classes: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            merge_static_methods: true,
            report_unknown_classes: true,
        }
    }
}

impl ConversionOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
