use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// External generator that produces the application skeleton.
pub trait Scaffolder {
    /// Generate a project named `app_name` under `parent`, returning the
    /// project directory.
    fn generate(&self, app_name: &str, parent: &Path) -> Result<PathBuf, AppError>;
}
