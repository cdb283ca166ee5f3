use crate::domain::{AppError, ProjectRequest, ProvisioningRequest};

/// Interactive collaborator that collects the answers for each stage.
///
/// The two stages are prompted separately because scaffolding runs between
/// them.
pub trait Prompter {
    /// First stage: the application name.
    fn project_request(&self) -> Result<ProjectRequest, AppError>;

    /// Second stage: optional resource names; blank answers mean "fall back
    /// to the app name".
    fn provisioning_request(&self) -> Result<ProvisioningRequest, AppError>;
}
