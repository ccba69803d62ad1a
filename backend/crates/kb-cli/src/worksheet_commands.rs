use clap::Subcommand;

#[derive(Subcommand)]
pub enum WorksheetCommands {
    /// List worksheets of a project (creates "Main Board" if none exist)
    List {
        /// Project ID (UUID)
        project_id: String,
    },

    /// Create a worksheet
    Create {
        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Worksheet title
        #[arg(long)]
        title: String,

        /// Worksheet description
        #[arg(long)]
        description: Option<String>,
    },

    /// Update a worksheet
    Update {
        /// Worksheet ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description (empty string clears it)
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a worksheet with its columns and tasks
    Delete {
        /// Worksheet ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,
    },
}
