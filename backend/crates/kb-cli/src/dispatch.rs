use crate::app::{App, AppResult, Output};
use crate::{
    attachment_commands::AttachmentCommands, board_commands::BoardCommands,
    column_commands::ColumnCommands, commands::Commands, comment_commands::CommentCommands,
    project_commands::ProjectCommands, task_commands::TaskCommands,
    worksheet_commands::WorksheetCommands,
};

/// Run one parsed command against `app`.
pub async fn execute(app: &App, command: Commands) -> AppResult<Output> {
    let value = match command {
        // Project commands
        Commands::Project { action } => match action {
            ProjectCommands::List => app.list_projects().await,
            ProjectCommands::Get { id } => app.get_project(&id).await,
            ProjectCommands::Create {
                name,
                description,
                due_date,
            } => {
                app.create_project(&name, description.as_deref(), due_date.as_deref())
                    .await
            }
            ProjectCommands::Update {
                id,
                name,
                description,
                status,
                due_date,
            } => {
                app.update_project(
                    &id,
                    name.as_deref(),
                    description.as_deref(),
                    status.as_deref(),
                    due_date.as_deref(),
                )
                .await
            }
            ProjectCommands::Delete { id } => app.delete_project(&id).await,
        },

        // Worksheet commands
        Commands::Worksheet { action } => match action {
            WorksheetCommands::List { project_id } => app.list_worksheets(&project_id).await,
            WorksheetCommands::Create {
                project_id,
                title,
                description,
            } => {
                app.create_worksheet(&project_id, &title, description.as_deref())
                    .await
            }
            WorksheetCommands::Update {
                id,
                project_id,
                title,
                description,
            } => {
                app.update_worksheet(&project_id, &id, title.as_deref(), description.as_deref())
                    .await
            }
            WorksheetCommands::Delete { id, project_id } => {
                app.delete_worksheet(&project_id, &id).await
            }
        },

        // Column commands
        Commands::Column { action } => match action {
            ColumnCommands::List {
                project_id,
                worksheet_id,
            } => app.list_columns(&project_id, worksheet_id.as_deref()).await,
            ColumnCommands::Create {
                project_id,
                worksheet_id,
                title,
                color,
            } => {
                app.create_column(&project_id, worksheet_id.as_deref(), &title, &color)
                    .await
            }
            ColumnCommands::Update {
                id,
                project_id,
                title,
                color,
            } => {
                app.update_column(&project_id, &id, title.as_deref(), color.as_deref())
                    .await
            }
            ColumnCommands::Delete { id, project_id } => app.delete_column(&project_id, &id).await,
            ColumnCommands::Reorder {
                id,
                project_id,
                position,
            } => app.reorder_column(&project_id, &id, position).await,
        },

        // Task commands
        Commands::Task { action } => match action {
            TaskCommands::List {
                project_id,
                worksheet_id,
            } => app.list_tasks(&project_id, worksheet_id.as_deref()).await,
            TaskCommands::Get { id, project_id } => app.get_task(&project_id, &id).await,
            TaskCommands::Create {
                project_id,
                column_id,
                title,
                description,
                priority,
                due_date,
                assignee,
            } => {
                app.create_task(
                    &project_id,
                    &column_id,
                    &title,
                    description.as_deref(),
                    priority.as_deref(),
                    due_date.as_deref(),
                    assignee.as_deref(),
                )
                .await
            }
            TaskCommands::Update {
                id,
                project_id,
                title,
                description,
                priority,
                due_date,
                assignee,
                column_id,
            } => {
                app.update_task(
                    &project_id,
                    &id,
                    title.as_deref(),
                    description.as_deref(),
                    priority.as_deref(),
                    due_date.as_deref(),
                    assignee.as_deref(),
                    column_id.as_deref(),
                )
                .await
            }
            TaskCommands::Move {
                id,
                project_id,
                column_id,
            } => app.move_task(&project_id, &id, &column_id).await,
            TaskCommands::Drop {
                id,
                project_id,
                column_id,
            } => app.drop_task(&project_id, &id, &column_id).await,
            TaskCommands::Delete { id, project_id } => app.delete_task(&project_id, &id).await,
        },

        // Comment commands
        Commands::Comment { action } => match action {
            CommentCommands::List {
                task_id,
                project_id,
            } => app.list_comments(&project_id, &task_id).await,
            CommentCommands::Create {
                project_id,
                task_id,
                content,
            } => app.add_comment(&project_id, &task_id, &content).await,
            CommentCommands::Reply {
                id,
                project_id,
                task_id,
                content,
            } => app.add_reply(&project_id, &task_id, &id, &content).await,
            CommentCommands::Delete {
                id,
                project_id,
                task_id,
            } => app.delete_comment(&project_id, &task_id, &id).await,
        },

        // Attachment commands
        Commands::Attachment { action } => match action {
            AttachmentCommands::Add {
                project_id,
                task_id,
                name,
                url,
                content_type,
                size,
            } => {
                app.add_attachment(&project_id, &task_id, &name, &url, &content_type, size)
                    .await
            }
            AttachmentCommands::Delete {
                id,
                project_id,
                task_id,
            } => app.delete_attachment(&project_id, &task_id, &id).await,
        },

        // Board commands
        Commands::Board { action } => match action {
            BoardCommands::Show {
                project_id,
                worksheet_id,
                text: true,
            } => {
                return app
                    .render_board(&project_id, worksheet_id.as_deref())
                    .await
                    .map(Output::Text);
            }
            BoardCommands::Show {
                project_id,
                worksheet_id,
                text: false,
            } => app.show_board(&project_id, worksheet_id.as_deref()).await,
            BoardCommands::Export { project_id, output } => {
                app.export_board(&project_id, output.as_deref()).await
            }
            BoardCommands::Import { input } => app.import_board(&input).await,
        },
    };

    value.map(Output::Json)
}
