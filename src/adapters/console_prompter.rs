use dialoguer::Input;

use crate::domain::{AppError, ProjectRequest, ProvisioningRequest};
use crate::ports::Prompter;

/// Terminal-backed prompter.
///
/// Answers supplied on the command line short-circuit their prompt; an empty
/// string counts as a deliberately blank answer.
#[derive(Debug, Clone, Default)]
pub struct ConsolePrompter {
    app_name: Option<String>,
    resource_group: Option<String>,
    storage_account: Option<String>,
}

impl ConsolePrompter {
    pub fn new(
        app_name: Option<String>,
        resource_group: Option<String>,
        storage_account: Option<String>,
    ) -> Self {
        Self { app_name, resource_group, storage_account }
    }
}

impl Prompter for ConsolePrompter {
    fn project_request(&self) -> Result<ProjectRequest, AppError> {
        let name = match &self.app_name {
            Some(value) => value.clone(),
            None => prompt("Name for your function app", false)?,
        };
        ProjectRequest::new(&name)
    }

    fn provisioning_request(&self) -> Result<ProvisioningRequest, AppError> {
        let resource_group = match &self.resource_group {
            Some(value) => value.clone(),
            None => prompt("Azure resource group (leave blank to use the app name)", true)?,
        };
        let storage_account = match &self.storage_account {
            Some(value) => value.clone(),
            None => prompt("Azure storage account (leave blank to use the app name)", true)?,
        };
        Ok(ProvisioningRequest::new(&resource_group, &storage_account))
    }
}

fn prompt(message: &str, allow_empty: bool) -> Result<String, AppError> {
    Input::new()
        .with_prompt(message)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read input: {}", e)))
}
