use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::Scaffolder;

/// Scaffolder fake that writes the same skeleton the external generator
/// produces: a project directory with a manifest.
pub(crate) struct FakeScaffolder;

impl FakeScaffolder {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Scaffolder for FakeScaffolder {
    fn generate(&self, app_name: &str, parent: &Path) -> Result<PathBuf, AppError> {
        let project_dir = parent.join(app_name);
        fs::create_dir_all(&project_dir)?;
        let manifest = format!(
            r#"{{
  "name": "{}",
  "version": "0.0.0",
  "private": true,
  "scripts": {{
    "start": "node ./bin/www"
  }},
  "dependencies": {{
    "express": "~4.16.1"
  }}
}}
"#,
            app_name
        );
        fs::write(project_dir.join("package.json"), manifest)?;
        Ok(project_dir)
    }
}
