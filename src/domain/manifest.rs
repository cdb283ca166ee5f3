//! Manifest of the scaffolded project (`package.json`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Manifest file name at the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Script entry added for running the function host locally.
pub const START_FUNCTION_SCRIPT: &str = "start-function";

/// Command the added script entry points at.
pub const START_FUNCTION_COMMAND: &str = "cd functions && func start";

/// Typed view of the generated project's manifest.
///
/// Only the `scripts` map is touched; every other field round-trips
/// untouched through the flattened passthrough map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub scripts: Map<String, Value>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl PackageManifest {
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Insert or overwrite the `start-function` script entry.
    pub fn set_start_function_script(&mut self) {
        self.scripts.insert(
            START_FUNCTION_SCRIPT.to_string(),
            Value::String(START_FUNCTION_COMMAND.to_string()),
        );
    }

    /// Render with 2-space indentation and a trailing newline.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
