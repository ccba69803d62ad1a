//! kb - Kanban board CLI
//!
//! Projects, worksheets, columns and tasks kept in a local JSON store.
//!
//! # Examples
//!
//! ```bash
//! # Create a project and look at its default board
//! kb project create --name "Website"
//! kb board show <project-id> --text
//!
//! # Add a task and drag it to another column
//! kb task create --project-id <uuid> --column-id <uuid> --title "Fix login"
//! kb task drop <task-id> --project-id <uuid> --column-id <uuid>
//! ```

use kb_cli::{App, AppResult, Cli, Output, execute, logger};

use kb_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command).await;

    // Handle result
    match result.and_then(|output| output.render(cli.pretty)) {
        Ok(rendered) => {
            println!("{}", rendered.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: kb_cli::commands::Commands) -> AppResult<Output> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    debug!("Starting kb v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = App::from_config(&config)?;
    execute(&app, command).await
}
