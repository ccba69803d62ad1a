use crate::{
    attachment_commands::AttachmentCommands, board_commands::BoardCommands,
    column_commands::ColumnCommands, comment_commands::CommentCommands,
    project_commands::ProjectCommands, task_commands::TaskCommands,
    worksheet_commands::WorksheetCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Worksheet (board) operations
    Worksheet {
        #[command(subcommand)]
        action: WorksheetCommands,
    },

    /// Column operations
    Column {
        #[command(subcommand)]
        action: ColumnCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Comment and reply operations
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },

    /// Attachment operations
    Attachment {
        #[command(subcommand)]
        action: AttachmentCommands,
    },

    /// Whole-board views, export and import
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
}
