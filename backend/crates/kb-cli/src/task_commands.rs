use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks of a project
    List {
        /// Project ID (UUID)
        project_id: String,

        /// Only tasks of this worksheet (UUID)
        #[arg(long)]
        worksheet_id: Option<String>,
    },

    /// Get a task by ID
    Get {
        /// Task ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,
    },

    /// Create a task in a column
    Create {
        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Column ID (UUID)
        #[arg(long)]
        column_id: String,

        /// Task title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,

        /// Assignee name
        #[arg(long)]
        assignee: Option<String>,
    },

    /// Update a task
    Update {
        /// Task ID (UUID)
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

        /// New priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,

        /// New assignee (empty string clears it)
        #[arg(long)]
        assignee: Option<String>,

        /// Move to this column (UUID)
        #[arg(long)]
        column_id: Option<String>,
    },

    /// Move a task to another column
    Move {
        /// Task ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Target column ID (UUID)
        #[arg(long)]
        column_id: String,
    },

    /// Drop a task onto a column; nothing happens if it is already there
    Drop {
        /// Task ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Target column ID (UUID)
        #[arg(long)]
        column_id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,
    },
}
