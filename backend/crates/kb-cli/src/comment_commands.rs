use clap::Subcommand;

#[derive(Subcommand)]
pub enum CommentCommands {
    /// List comments on a task
    List {
        /// Task ID (UUID)
        task_id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,
    },

    /// Comment on a task
    Create {
        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Task ID (UUID)
        #[arg(long)]
        task_id: String,

        /// Comment content
        #[arg(long)]
        content: String,
    },

    /// Reply to a comment
    Reply {
        /// Comment ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Task ID (UUID)
        #[arg(long)]
        task_id: String,

        /// Reply content
        #[arg(long)]
        content: String,
    },

    /// Delete a comment and its replies
    Delete {
        /// Comment ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Task ID (UUID)
        #[arg(long)]
        task_id: String,
    },
}
