use std::cell::RefCell;

use crate::domain::{AppError, FunctionAppSpec, ProvisionConfig};
use crate::ports::ControlPlane;

/// One recorded control-plane invocation, for sequencing assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GroupExists(String),
    CreateGroup(String),
    StorageNameAvailable(String),
    CreateStorageAccount { name: String, resource_group: String },
    CreateFunctionApp { name: String, resource_group: String, storage_account: String },
}

/// Recording fake for the control plane with scripted responses and
/// per-operation failure injection.
pub(crate) struct RecordingControlPlane {
    calls: RefCell<Vec<Call>>,
    locations_seen: RefCell<Vec<String>>,
    group_exists: bool,
    storage_name_available: bool,
    fail_at: Option<&'static str>,
}

impl RecordingControlPlane {
    /// A cloud where nothing exists yet: the group is absent and the storage
    /// name is available.
    pub(crate) fn empty_cloud() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            locations_seen: RefCell::new(Vec::new()),
            group_exists: false,
            storage_name_available: true,
            fail_at: None,
        }
    }

    pub(crate) fn with_group_exists(mut self, exists: bool) -> Self {
        self.group_exists = exists;
        self
    }

    pub(crate) fn with_storage_name_available(mut self, available: bool) -> Self {
        self.storage_name_available = available;
        self
    }

    /// Make the named operation return a control-plane rejection.
    pub(crate) fn failing_at(mut self, operation: &'static str) -> Self {
        self.fail_at = Some(operation);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Locations seen by the create operations, in call order.
    pub(crate) fn locations_seen(&self) -> Vec<String> {
        self.locations_seen.borrow().clone()
    }

    fn check_failure(&self, operation: &str) -> Result<(), AppError> {
        if self.fail_at == Some(operation) {
            return Err(AppError::ControlPlane {
                command: operation.to_string(),
                details: format!("{} rejected", operation),
            });
        }
        Ok(())
    }
}

impl ControlPlane for RecordingControlPlane {
    fn group_exists(&self, name: &str) -> Result<bool, AppError> {
        self.calls.borrow_mut().push(Call::GroupExists(name.to_string()));
        self.check_failure("group_exists")?;
        Ok(self.group_exists)
    }

    fn create_group(&self, name: &str, config: &ProvisionConfig) -> Result<(), AppError> {
        self.calls.borrow_mut().push(Call::CreateGroup(name.to_string()));
        self.locations_seen.borrow_mut().push(config.location.clone());
        self.check_failure("create_group")
    }

    fn storage_name_available(&self, name: &str) -> Result<bool, AppError> {
        self.calls.borrow_mut().push(Call::StorageNameAvailable(name.to_string()));
        self.check_failure("storage_name_available")?;
        Ok(self.storage_name_available)
    }

    fn create_storage_account(
        &self,
        name: &str,
        resource_group: &str,
        config: &ProvisionConfig,
    ) -> Result<(), AppError> {
        self.calls.borrow_mut().push(Call::CreateStorageAccount {
            name: name.to_string(),
            resource_group: resource_group.to_string(),
        });
        self.locations_seen.borrow_mut().push(config.location.clone());
        self.check_failure("create_storage_account")
    }

    fn create_function_app(
        &self,
        spec: &FunctionAppSpec,
        config: &ProvisionConfig,
    ) -> Result<(), AppError> {
        self.calls.borrow_mut().push(Call::CreateFunctionApp {
            name: spec.name.clone(),
            resource_group: spec.resource_group.clone(),
            storage_account: spec.storage_account.clone(),
        });
        self.locations_seen.borrow_mut().push(config.location.clone());
        self.check_failure("create_function_app")
    }
}
