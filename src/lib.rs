//! funcforge: Scaffold a function app project and provision its Azure resources.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{AzureCliControlPlane, ConsolePrompter, ExpressGenerator};
use app::AppContext;
use app::commands::new;

pub use domain::AppError;
pub use domain::{ProjectRequest, ProvisioningRequest};

/// Scaffold a new project in the current directory and provision its cloud
/// resources.
///
/// Values not supplied as arguments are prompted for interactively.
pub fn new_project(
    app_name: Option<String>,
    resource_group: Option<String>,
    storage_account: Option<String>,
) -> Result<(), AppError> {
    let parent = std::env::current_dir()?;
    let prompter = ConsolePrompter::new(app_name, resource_group, storage_account);
    let ctx = AppContext::new(AzureCliControlPlane::new(), ExpressGenerator::new(), prompter);

    new::execute(&ctx, &parent)?;
    println!("✅ Function app project ready");
    Ok(())
}
