use std::process::Command;

use crate::domain::{AppError, FunctionAppSpec, ProvisionConfig};
use crate::ports::ControlPlane;

/// Control-plane adapter shelling out to the `az` CLI.
#[derive(Debug, Clone, Default)]
pub struct AzureCliControlPlane;

impl AzureCliControlPlane {
    pub fn new() -> Self {
        Self
    }

    fn run_az(&self, args: &[&str]) -> Result<String, AppError> {
        let mut cmd = Command::new("az");
        cmd.args(args);

        let output = cmd.output().map_err(|e| AppError::ControlPlane {
            command: format!("az {}", args.join(" ")),
            details: format!("Failed to execute az CLI: {}", e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ControlPlane {
                command: format!("az {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Decode the bare JSON boolean the `az` predicates print.
fn parse_bool(output: &str, what: &str) -> Result<bool, AppError> {
    serde_json::from_str(output.trim()).map_err(|_| AppError::ParseError {
        what: what.to_string(),
        details: format!("expected a JSON boolean, got '{}'", output.trim()),
    })
}

impl ControlPlane for AzureCliControlPlane {
    fn group_exists(&self, name: &str) -> Result<bool, AppError> {
        let output = self.run_az(&["group", "exists", "--name", name])?;
        parse_bool(&output, "az group exists output")
    }

    fn create_group(&self, name: &str, config: &ProvisionConfig) -> Result<(), AppError> {
        self.run_az(&["group", "create", "--name", name, "--location", &config.location])?;
        Ok(())
    }

    fn storage_name_available(&self, name: &str) -> Result<bool, AppError> {
        let output = self.run_az(&[
            "storage",
            "account",
            "check-name",
            "--name",
            name,
            "--query",
            "nameAvailable",
        ])?;
        parse_bool(&output, "az storage account check-name output")
    }

    fn create_storage_account(
        &self,
        name: &str,
        resource_group: &str,
        config: &ProvisionConfig,
    ) -> Result<(), AppError> {
        self.run_az(&[
            "storage",
            "account",
            "create",
            "--name",
            name,
            "--resource-group",
            resource_group,
            "--location",
            &config.location,
            "--sku",
            &config.sku,
            "--kind",
            &config.kind,
        ])?;
        Ok(())
    }

    fn create_function_app(
        &self,
        spec: &FunctionAppSpec,
        config: &ProvisionConfig,
    ) -> Result<(), AppError> {
        let functions_version = config.functions_version.to_string();
        self.run_az(&[
            "functionapp",
            "create",
            "--name",
            &spec.name,
            "--resource-group",
            &spec.resource_group,
            "--storage-account",
            &spec.storage_account,
            "--functions-version",
            &functions_version,
            "--consumption-plan-location",
            &config.location,
            "--runtime",
            &config.runtime,
            "--os-type",
            &config.os_type,
        ])?;
        Ok(())
    }
}
