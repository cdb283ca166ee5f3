use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::Scaffolder;

const TOOL: &str = "npx express-generator";

/// Scaffolder adapter invoking `express-generator` through `npx`.
#[derive(Debug, Clone, Default)]
pub struct ExpressGenerator;

impl ExpressGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Scaffolder for ExpressGenerator {
    fn generate(&self, app_name: &str, parent: &Path) -> Result<PathBuf, AppError> {
        let output = Command::new("npx")
            .args(["express-generator", "--no-view", app_name])
            .current_dir(parent)
            .output()
            .map_err(|e| AppError::Scaffold {
                tool: TOOL.to_string(),
                details: format!("Failed to execute scaffolding tool: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Scaffold {
                tool: TOOL.to_string(),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(parent.join(app_name))
    }
}
