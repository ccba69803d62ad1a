use clap::Subcommand;

#[derive(Subcommand)]
pub enum AttachmentCommands {
    /// Attach a file reference to a task
    Add {
        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Task ID (UUID)
        #[arg(long)]
        task_id: String,

        /// File name
        #[arg(long)]
        name: String,

        /// Where the file lives
        #[arg(long)]
        url: String,

        /// MIME type
        #[arg(long = "type", default_value = "application/octet-stream")]
        content_type: String,

        /// Size in bytes
        #[arg(long, default_value_t = 0)]
        size: u64,
    },

    /// Remove an attachment from a task
    Delete {
        /// Attachment ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Task ID (UUID)
        #[arg(long)]
        task_id: String,
    },
}
