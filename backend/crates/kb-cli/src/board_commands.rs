use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Show a worksheet's tasks grouped by column
    Show {
        /// Project ID (UUID)
        project_id: String,

        /// Worksheet ID (UUID), defaults to the first worksheet
        #[arg(long)]
        worksheet_id: Option<String>,

        /// Render as text columns instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Export a project's worksheets, columns and tasks as JSON
    Export {
        /// Project ID (UUID)
        project_id: String,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Import a previously exported project
    Import {
        /// Export file
        input: PathBuf,
    },
}
