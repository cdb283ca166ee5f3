//! User-supplied inputs for the scaffolding and provisioning stages.

use crate::domain::AppError;

/// First-stage answer: the name for the function app and project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    app_name: String,
}

impl ProjectRequest {
    /// Validate and construct a request.
    ///
    /// The name doubles as the project directory, the default resource group,
    /// and the default storage account, so it is restricted to the subset
    /// every one of those accepts.
    pub fn new(app_name: &str) -> Result<Self, AppError> {
        let trimmed = app_name.trim();
        if trimmed.is_empty()
            || !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(AppError::InvalidAppName(app_name.to_string()));
        }
        Ok(Self { app_name: trimmed.to_string() })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

/// Second-stage answers: optional resource names.
///
/// Blank answers normalize to `None` at construction; resolution falls back
/// to the app name independently per resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisioningRequest {
    resource_group: Option<String>,
    storage_account: Option<String>,
}

impl ProvisioningRequest {
    pub fn new(resource_group: &str, storage_account: &str) -> Self {
        Self {
            resource_group: normalize(resource_group),
            storage_account: normalize(storage_account),
        }
    }

    /// Resource group name, falling back to `app_name` when left blank.
    pub fn resource_group_for(&self, app_name: &str) -> String {
        self.resource_group.clone().unwrap_or_else(|| app_name.to_string())
    }

    /// Storage account name, falling back to `app_name` when left blank.
    pub fn storage_account_for(&self, app_name: &str) -> String {
        self.storage_account.clone().unwrap_or_else(|| app_name.to_string())
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// Fully resolved creation parameters for the function-hosting app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionAppSpec {
    pub name: String,
    pub resource_group: String,
    pub storage_account: String,
}
