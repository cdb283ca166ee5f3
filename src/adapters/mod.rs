pub mod azure_cli;
pub mod console_prompter;
pub mod express_generator;

pub use azure_cli::AzureCliControlPlane;
pub use console_prompter::ConsolePrompter;
pub use express_generator::ExpressGenerator;
