use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,

    /// Get a project by ID
    Get {
        /// Project ID (UUID)
        id: String,
    },

    /// Create a project
    Create {
        /// Project name
        #[arg(long)]
        name: String,

        /// Project description
        #[arg(long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,
    },

    /// Update a project
    Update {
        /// Project ID (UUID)
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description (empty string clears it)
        #[arg(long)]
        description: Option<String>,

        /// New status (active, on-hold, completed)
        #[arg(long)]
        status: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,
    },

    /// Delete a project with all its boards
    Delete {
        /// Project ID (UUID)
        id: String,
    },
}
