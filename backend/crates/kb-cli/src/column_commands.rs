use clap::Subcommand;

#[derive(Subcommand)]
pub enum ColumnCommands {
    /// List columns of a worksheet in order
    List {
        /// Project ID (UUID)
        project_id: String,

        /// Worksheet ID (UUID), defaults to the first worksheet
        #[arg(long)]
        worksheet_id: Option<String>,
    },

    /// Append a column to a worksheet
    Create {
        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Worksheet ID (UUID), defaults to the first worksheet
        #[arg(long)]
        worksheet_id: Option<String>,

        /// Column title; its status is derived from it
        #[arg(long)]
        title: String,

        /// Display color
        #[arg(long, default_value = "#94a3b8")]
        color: String,
    },

    /// Retitle or recolor a column
    Update {
        /// Column ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New color
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a column; its tasks move to a sibling or a new Backlog column
    Delete {
        /// Column ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,
    },

    /// Move a column to a new position within its worksheet
    Reorder {
        /// Column ID (UUID)
        id: String,

        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Zero-based target position (clamped to the last position)
        #[arg(long)]
        position: usize,
    },
}
