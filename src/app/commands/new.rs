//! End-to-end session: scaffold the project, provision its cloud resources,
//! and wire the local run script into the generated manifest.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{
    AppError, MANIFEST_FILE, PackageManifest, ProvisionConfig, START_FUNCTION_SCRIPT,
};
use crate::ports::{ControlPlane, Prompter, Scaffolder};

use super::provision;

/// Directory holding function code inside the generated project.
pub const FUNCTIONS_DIR: &str = "functions";

/// Execute the new-project session.
///
/// Stages run strictly in order and any failure halts the rest; the project
/// path is threaded explicitly, the working directory is never changed.
pub fn execute<C, S, P>(ctx: &AppContext<C, S, P>, parent: &Path) -> Result<(), AppError>
where
    C: ControlPlane,
    S: Scaffolder,
    P: Prompter,
{
    let project = ctx.prompter().project_request()?;

    let project_dir = parent.join(project.app_name());
    if project_dir.exists() {
        return Err(AppError::ProjectExists(project.app_name().to_string()));
    }

    println!("Creating application skeleton...");
    let project_dir = ctx.scaffolder().generate(project.app_name(), parent)?;
    println!("✅ Created application skeleton at {}/", project.app_name());

    fs::create_dir(project_dir.join(FUNCTIONS_DIR))?;

    let provisioning = ctx.prompter().provisioning_request()?;
    let config = ProvisionConfig::load(parent)?;
    provision::execute(ctx.control_plane(), &project, &provisioning, &config)?;

    patch_manifest(&project_dir)?;
    println!("✅ Added '{}' script to {}", START_FUNCTION_SCRIPT, MANIFEST_FILE);

    Ok(())
}

/// Insert the `start-function` script into the generated manifest, keeping
/// every other field intact.
fn patch_manifest(project_dir: &Path) -> Result<(), AppError> {
    let path = project_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path)?;

    let mut manifest = PackageManifest::parse(&content).map_err(|e| AppError::Manifest {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    manifest.set_start_function_script();

    let rendered = manifest.render().map_err(|e| AppError::Manifest {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    fs::write(&path, rendered)?;
    Ok(())
}
