use crate::domain::{AppError, FunctionAppSpec, ProvisionConfig};

/// Interface to the cloud control plane.
///
/// `group_exists` is scoped to the active subscription, while
/// `storage_name_available` checks the global storage namespace; the two
/// predicates are deliberately separate. Creation calls allocate billable
/// resources and are issued at most once per resource per run.
pub trait ControlPlane {
    /// Whether a resource group with this name exists in the subscription.
    fn group_exists(&self, name: &str) -> Result<bool, AppError>;

    /// Create a resource group in the configured region.
    fn create_group(&self, name: &str, config: &ProvisionConfig) -> Result<(), AppError>;

    /// Whether this storage account name is still available globally.
    fn storage_name_available(&self, name: &str) -> Result<bool, AppError>;

    /// Create a storage account inside `resource_group`.
    fn create_storage_account(
        &self,
        name: &str,
        resource_group: &str,
        config: &ProvisionConfig,
    ) -> Result<(), AppError>;

    /// Create the function-hosting app.
    ///
    /// No existence check precedes this call; a name collision is rejected by
    /// the control plane itself and surfaces as an error.
    fn create_function_app(
        &self,
        spec: &FunctionAppSpec,
        config: &ProvisionConfig,
    ) -> Result<(), AppError>;
}
