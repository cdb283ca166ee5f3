//! Ordered, idempotent provisioning of the cloud resources.

use crate::domain::{
    AppError, FunctionAppSpec, ProjectRequest, ProvisionConfig, ProvisioningRequest,
};
use crate::ports::ControlPlane;

/// Outcome of one idempotent resource step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Created,
    AlreadyExists,
}

/// Resolved names and per-step outcomes of a completed provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionSummary {
    pub resource_group: String,
    pub resource_group_outcome: StepOutcome,
    pub storage_account: String,
    pub storage_account_outcome: StepOutcome,
    pub function_app: String,
}

/// Provision the resource group, storage account, and function app in
/// dependency order.
///
/// A failing step aborts the remaining steps; resources created by earlier
/// steps are left in place.
pub fn execute<C: ControlPlane>(
    control_plane: &C,
    project: &ProjectRequest,
    request: &ProvisioningRequest,
    config: &ProvisionConfig,
) -> Result<ProvisionSummary, AppError> {
    let group_name = request.resource_group_for(project.app_name());
    let group_outcome = ensure_resource_group(control_plane, &group_name, config)?;
    report("Resource group", &group_name, group_outcome);

    let storage_name = request.storage_account_for(project.app_name());
    let storage_outcome =
        ensure_storage_account(control_plane, &storage_name, &group_name, config)?;
    report("Storage account", &storage_name, storage_outcome);

    // The function app is created unconditionally; the control plane rejects
    // name collisions itself.
    let spec = FunctionAppSpec {
        name: project.app_name().to_string(),
        resource_group: group_name.clone(),
        storage_account: storage_name.clone(),
    };
    control_plane.create_function_app(&spec, config)?;
    println!("✅ Created function app '{}'", spec.name);

    Ok(ProvisionSummary {
        resource_group: group_name,
        resource_group_outcome: group_outcome,
        storage_account: storage_name,
        storage_account_outcome: storage_outcome,
        function_app: spec.name,
    })
}

fn ensure_resource_group<C: ControlPlane>(
    control_plane: &C,
    name: &str,
    config: &ProvisionConfig,
) -> Result<StepOutcome, AppError> {
    if control_plane.group_exists(name)? {
        return Ok(StepOutcome::AlreadyExists);
    }
    control_plane.create_group(name, config)?;
    Ok(StepOutcome::Created)
}

fn ensure_storage_account<C: ControlPlane>(
    control_plane: &C,
    name: &str,
    resource_group: &str,
    config: &ProvisionConfig,
) -> Result<StepOutcome, AppError> {
    // Availability is a global namespace check, not scoped to the group.
    if !control_plane.storage_name_available(name)? {
        return Ok(StepOutcome::AlreadyExists);
    }
    control_plane.create_storage_account(name, resource_group, config)?;
    Ok(StepOutcome::Created)
}

fn report(kind: &str, name: &str, outcome: StepOutcome) {
    match outcome {
        StepOutcome::Created => println!("✅ Created {} '{}'", kind.to_lowercase(), name),
        StepOutcome::AlreadyExists => {
            println!("{} '{}' already exists, skipping creation", kind, name)
        }
    }
}
