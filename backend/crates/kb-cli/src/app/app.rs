use crate::app::args::{
    parse_date, parse_id, parse_optional_id, parse_priority, parse_project_status,
};
use crate::app::{AppError, AppResult};
use crate::board_render::render_board;

use kb_config::{Config, StoreBackend};
use kb_core::{
    Author, ColumnUpdate, NewAttachment, NewTask, ProjectUpdate, TaskUpdate, WorksheetUpdate,
};
use kb_services::{
    BoardExport, ExportService, KanbanBoard, LogNotifier, ProjectService,
    ServiceContext, ServiceError, Simulator, TaskService, Validator, WorksheetService,
};
use kb_store::{FileStore, MemoryStore, SharedStore};

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

/// Command handlers. Each returns the affected entity as JSON.
pub struct App {
    ctx: ServiceContext,
    validator: Validator,
    author: Author,
}

impl App {
    pub fn new(ctx: ServiceContext, validator: Validator, author: Author) -> Self {
        Self {
            ctx,
            validator,
            author,
        }
    }

    /// Open the configured store and wire the services to it.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let store: SharedStore = match config.store.backend {
            StoreBackend::File => {
                let path = config.store_path()?;
                info!("Opening file store at {}", path.display());
                Arc::new(FileStore::open(path)?)
            }
            StoreBackend::Memory => {
                info!("Using in-memory store; nothing will be saved");
                Arc::new(MemoryStore::new())
            }
        };

        let ctx = ServiceContext::new(
            store,
            Simulator::from_config(&config.simulation),
            Arc::new(LogNotifier),
        );

        Ok(Self::new(
            ctx,
            Validator::new(config.validation.clone()),
            Author::new(config.user.id.clone(), config.user.name.clone()),
        ))
    }

    fn projects(&self) -> ProjectService {
        ProjectService::new(self.ctx.clone())
    }

    fn worksheets(&self) -> WorksheetService {
        WorksheetService::new(self.ctx.clone())
    }

    fn tasks(&self) -> TaskService {
        TaskService::new(self.ctx.clone())
    }

    /// Loaded board for the project, showing `worksheet_id` when given.
    async fn board(&self, project_id: Uuid, worksheet_id: Option<Uuid>) -> AppResult<KanbanBoard> {
        let mut board = KanbanBoard::new(
            self.ctx.clone(),
            self.validator.clone(),
            self.author.clone(),
            project_id,
        );
        board.load().await?;
        if let Some(worksheet_id) = worksheet_id {
            board.select_worksheet(worksheet_id).await?;
        }
        Ok(board)
    }

    /// Loaded board showing the worksheet that holds `task_id`.
    async fn board_for_task(&self, project_id: Uuid, task_id: Uuid) -> AppResult<KanbanBoard> {
        let mut board = self.board(project_id, None).await?;
        let worksheet_id = board
            .task(task_id)
            .map(|t| t.worksheet_id)
            .ok_or_else(|| ServiceError::not_found("Task", task_id))?;
        if board.selected_worksheet().map(|w| w.id) != Some(worksheet_id) {
            board.select_worksheet(worksheet_id).await?;
        }
        Ok(board)
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub async fn list_projects(&self) -> AppResult<Value> {
        to_json(&self.projects().list().await?)
    }

    pub async fn get_project(&self, id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", id)?;
        to_json(&self.projects().get(project_id).await?)
    }

    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
        due_date: Option<&str>,
    ) -> AppResult<Value> {
        let name = self.validator.title(name)?;
        let description = self
            .validator
            .description(description)?
            .filter(|d| !d.is_empty());
        let due_date = parse_date("due date", due_date)?;

        to_json(&self.projects().create(name, description, due_date).await?)
    }

    pub async fn update_project(
        &self,
        id: &str,
        name: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
        due_date: Option<&str>,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", id)?;
        let update = ProjectUpdate {
            name: self.validator.optional_title(name)?,
            description: self.validator.description(description)?,
            status: parse_project_status(status)?,
            due_date: parse_date("due date", due_date)?,
        };

        to_json(&self.projects().update(project_id, update).await?)
    }

    pub async fn delete_project(&self, id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", id)?;
        self.projects().delete(project_id).await?;
        Ok(json!({ "deleted": project_id }))
    }

    // =========================================================================
    // Worksheets
    // =========================================================================

    pub async fn list_worksheets(&self, project_id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        to_json(&self.worksheets().list(project_id).await?)
    }

    pub async fn create_worksheet(
        &self,
        project_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let mut board = self.board(project_id, None).await?;
        to_json(&board.create_worksheet(title, description).await?)
    }

    pub async fn update_worksheet(
        &self,
        project_id: &str,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let worksheet_id = parse_id("worksheet id", id)?;
        let update = WorksheetUpdate {
            title: self.validator.optional_title(title)?,
            description: self.validator.description(description)?,
        };

        to_json(
            &self
                .worksheets()
                .update(project_id, worksheet_id, update)
                .await?,
        )
    }

    pub async fn delete_worksheet(&self, project_id: &str, id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let worksheet_id = parse_id("worksheet id", id)?;
        self.worksheets().delete(project_id, worksheet_id).await?;
        Ok(json!({ "deleted": worksheet_id }))
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Columns of one worksheet, or of the default worksheet when none is
    /// given.
    pub async fn list_columns(
        &self,
        project_id: &str,
        worksheet_id: Option<&str>,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let worksheet_id = parse_optional_id("worksheet id", worksheet_id)?;
        let board = self.board(project_id, worksheet_id).await?;
        to_json(&board.columns())
    }

    pub async fn create_column(
        &self,
        project_id: &str,
        worksheet_id: Option<&str>,
        title: &str,
        color: &str,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let worksheet_id = parse_optional_id("worksheet id", worksheet_id)?;
        let mut board = self.board(project_id, worksheet_id).await?;
        to_json(&board.create_column(title, color).await?)
    }

    pub async fn update_column(
        &self,
        project_id: &str,
        id: &str,
        title: Option<&str>,
        color: Option<&str>,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let column_id = parse_id("column id", id)?;
        let update = ColumnUpdate {
            title: title.map(str::to_string),
            color: color.map(str::to_string),
        };

        let mut board = self.board(project_id, None).await?;
        to_json(&board.update_column(column_id, update).await?)
    }

    pub async fn delete_column(&self, project_id: &str, id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let column_id = parse_id("column id", id)?;
        let mut board = self.board(project_id, None).await?;
        to_json(&board.delete_column(column_id).await?)
    }

    pub async fn reorder_column(
        &self,
        project_id: &str,
        id: &str,
        position: usize,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let column_id = parse_id("column id", id)?;
        let mut board = self.board(project_id, None).await?;
        to_json(&board.reorder_columns(column_id, position).await?)
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    pub async fn list_tasks(
        &self,
        project_id: &str,
        worksheet_id: Option<&str>,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        match parse_optional_id("worksheet id", worksheet_id)? {
            Some(worksheet_id) => to_json(
                &self
                    .tasks()
                    .list_for_worksheet(project_id, worksheet_id)
                    .await?,
            ),
            None => to_json(&self.tasks().list(project_id).await?),
        }
    }

    pub async fn get_task(&self, project_id: &str, id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", id)?;
        to_json(&self.tasks().get(project_id, task_id).await?)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_task(
        &self,
        project_id: &str,
        column_id: &str,
        title: &str,
        description: Option<&str>,
        priority: Option<&str>,
        due_date: Option<&str>,
        assignee: Option<&str>,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let mut draft = NewTask::new(parse_id("column id", column_id)?, title);
        draft.description = description.map(str::to_string);
        draft.priority = parse_priority(priority)?.unwrap_or_default();
        draft.due_date = parse_date("due date", due_date)?;
        draft.assignee = assignee.map(str::to_string);

        let mut board = self.board(project_id, None).await?;
        to_json(&board.create_task(draft).await?)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_task(
        &self,
        project_id: &str,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<&str>,
        due_date: Option<&str>,
        assignee: Option<&str>,
        column_id: Option<&str>,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", id)?;
        let update = TaskUpdate {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            priority: parse_priority(priority)?,
            due_date: parse_date("due date", due_date)?,
            assignee: assignee.map(str::to_string),
            column_id: parse_optional_id("column id", column_id)?,
        };

        let mut board = self.board(project_id, None).await?;
        to_json(&board.update_task(task_id, update).await?)
    }

    pub async fn move_task(&self, project_id: &str, id: &str, column_id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", id)?;
        let column_id = parse_id("column id", column_id)?;

        let mut board = self.board(project_id, None).await?;
        to_json(&board.move_task(task_id, column_id).await?)
    }

    /// Drag-and-drop: move only when the target column differs.
    pub async fn drop_task(&self, project_id: &str, id: &str, column_id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", id)?;
        let column_id = parse_id("column id", column_id)?;

        let mut board = self.board_for_task(project_id, task_id).await?;
        let moved = board.drop_task(task_id, column_id).await?;
        debug!("Drop of task {task_id} onto {column_id}: moved={moved}");

        Ok(json!({
            "moved": moved,
            "task": board.task(task_id),
        }))
    }

    pub async fn delete_task(&self, project_id: &str, id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", id)?;
        let mut board = self.board(project_id, None).await?;
        board.delete_task(task_id).await?;
        Ok(json!({ "deleted": task_id }))
    }

    // =========================================================================
    // Comments
    // =========================================================================

    pub async fn list_comments(&self, project_id: &str, task_id: &str) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", task_id)?;
        to_json(&self.tasks().get(project_id, task_id).await?.comments)
    }

    pub async fn add_comment(
        &self,
        project_id: &str,
        task_id: &str,
        content: &str,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", task_id)?;
        let mut board = self.board(project_id, None).await?;
        to_json(&board.add_comment(task_id, content).await?)
    }

    pub async fn add_reply(
        &self,
        project_id: &str,
        task_id: &str,
        comment_id: &str,
        content: &str,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", task_id)?;
        let comment_id = parse_id("comment id", comment_id)?;
        let mut board = self.board(project_id, None).await?;
        to_json(&board.add_reply(task_id, comment_id, content).await?)
    }

    pub async fn delete_comment(
        &self,
        project_id: &str,
        task_id: &str,
        id: &str,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", task_id)?;
        let comment_id = parse_id("comment id", id)?;
        self.tasks()
            .delete_comment(project_id, task_id, comment_id)
            .await?;
        Ok(json!({ "deleted": comment_id }))
    }

    // =========================================================================
    // Attachments
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn add_attachment(
        &self,
        project_id: &str,
        task_id: &str,
        name: &str,
        url: &str,
        content_type: &str,
        size: u64,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", task_id)?;
        let draft = NewAttachment {
            name: self.validator.title(name)?,
            url: url.trim().to_string(),
            content_type: content_type.trim().to_string(),
            size,
        };

        let mut board = self.board(project_id, None).await?;
        to_json(&board.add_attachment(task_id, draft).await?)
    }

    pub async fn delete_attachment(
        &self,
        project_id: &str,
        task_id: &str,
        id: &str,
    ) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let task_id = parse_id("task id", task_id)?;
        let attachment_id = parse_id("attachment id", id)?;
        self.tasks()
            .delete_attachment(project_id, task_id, attachment_id)
            .await?;
        Ok(json!({ "deleted": attachment_id }))
    }

    // =========================================================================
    // Board
    // =========================================================================

    /// Lanes of one worksheet, grouped by column status.
    pub async fn show_board(&self, project_id: &str, worksheet_id: Option<&str>) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let worksheet_id = parse_optional_id("worksheet id", worksheet_id)?;
        let board = self.board(project_id, worksheet_id).await?;

        Ok(json!({
            "worksheet": board.selected_worksheet(),
            "lanes": board.tasks_by_status(),
        }))
    }

    pub async fn render_board(
        &self,
        project_id: &str,
        worksheet_id: Option<&str>,
    ) -> AppResult<String> {
        let project_id = parse_id("project id", project_id)?;
        let worksheet_id = parse_optional_id("worksheet id", worksheet_id)?;
        let project = self.projects().get(project_id).await?;
        let board = self.board(project_id, worksheet_id).await?;
        Ok(render_board(&project, &board))
    }

    /// Write the project's snapshot to `output`, or return it when no path
    /// is given.
    pub async fn export_board(&self, project_id: &str, output: Option<&Path>) -> AppResult<Value> {
        let project_id = parse_id("project id", project_id)?;
        let export = ExportService::new(self.ctx.clone())
            .export_project(project_id)
            .await?;

        match output {
            Some(path) => {
                let json = serde_json::to_string_pretty(&export)?;
                std::fs::write(path, json).map_err(|e| AppError::io(path, e))?;
                info!("Exported project {project_id} to {}", path.display());
                Ok(json!({
                    "exported": project_id,
                    "path": path.display().to_string(),
                    "tasks": export.tasks.len(),
                }))
            }
            None => to_json(&export),
        }
    }

    pub async fn import_board(&self, input: &Path) -> AppResult<Value> {
        let raw = std::fs::read_to_string(input).map_err(|e| AppError::io(input, e))?;
        let export: BoardExport = serde_json::from_str(&raw)?;
        let result = ExportService::new(self.ctx.clone())
            .import_project(export)
            .await?;
        to_json(&result)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}
