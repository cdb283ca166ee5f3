//! Provisioning defaults, optionally overridden from `funcforge.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

/// Optional configuration file read from the working directory.
pub const CONFIG_FILE: &str = "funcforge.toml";

/// Fixed creation parameters applied to every provisioned resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisionConfig {
    /// Region for the resource group, storage account, and consumption plan.
    #[serde(default = "default_location")]
    pub location: String,
    /// Storage account SKU.
    #[serde(default = "default_sku")]
    pub sku: String,
    /// Storage account kind.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Function runtime stack.
    #[serde(default = "default_runtime")]
    pub runtime: String,
    /// Function app operating system.
    #[serde(default = "default_os_type")]
    pub os_type: String,
    /// Functions host version.
    #[serde(default = "default_functions_version")]
    pub functions_version: u32,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            sku: default_sku(),
            kind: default_kind(),
            runtime: default_runtime(),
            os_type: default_os_type(),
            functions_version: default_functions_version(),
        }
    }
}

impl ProvisionConfig {
    /// Load from `dir/funcforge.toml`, falling back to defaults when the file
    /// is absent.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }
}

fn default_location() -> String {
    "westus2".to_string()
}

fn default_sku() -> String {
    "Standard_LRS".to_string()
}

fn default_kind() -> String {
    "StorageV2".to_string()
}

fn default_runtime() -> String {
    "node".to_string()
}

fn default_os_type() -> String {
    "linux".to_string()
}

fn default_functions_version() -> u32 {
    4
}
