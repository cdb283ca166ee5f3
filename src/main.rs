use clap::{Parser, Subcommand};
use funcforge::AppError;

#[derive(Parser)]
#[command(name = "funcforge")]
#[command(version)]
#[command(
    about = "Scaffold a function app project and provision its Azure resources",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new project and provision its cloud resources
    #[clap(visible_alias = "n")]
    New {
        /// Name for the function app (prompted for when omitted)
        app_name: Option<String>,
        /// Azure resource group (blank to derive from the app name)
        #[arg(short = 'g', long)]
        resource_group: Option<String>,
        /// Azure storage account (blank to derive from the app name)
        #[arg(short = 's', long)]
        storage_account: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::New { app_name, resource_group, storage_account } => {
            funcforge::new_project(app_name, resource_group, storage_account)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
