use crate::ports::{ControlPlane, Prompter, Scaffolder};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ControlPlane, S: Scaffolder, P: Prompter> {
    control_plane: C,
    scaffolder: S,
    prompter: P,
}

impl<C: ControlPlane, S: Scaffolder, P: Prompter> AppContext<C, S, P> {
    /// Create a new application context.
    pub fn new(control_plane: C, scaffolder: S, prompter: P) -> Self {
        Self { control_plane, scaffolder, prompter }
    }

    /// Get a reference to the control-plane client.
    pub fn control_plane(&self) -> &C {
        &self.control_plane
    }

    /// Get a reference to the project scaffolder.
    pub fn scaffolder(&self) -> &S {
        &self.scaffolder
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}
