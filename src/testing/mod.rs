mod fake_scaffolder;
mod recording_control_plane;

pub(crate) use fake_scaffolder::FakeScaffolder;
pub(crate) use recording_control_plane::{Call, RecordingControlPlane};
pub(crate) use scripted_prompter::ScriptedPrompter;
