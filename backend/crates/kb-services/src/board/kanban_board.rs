use crate::{
    ColumnDeletion, ColumnLane, ColumnService, Result as ServiceResult, ServiceContext,
    ServiceError, TaskService, Validator, WorksheetService,
};

use kb_core::{
    Attachment, Author, Column, ColumnUpdate, Comment, NewAttachment, NewTask, Reply, Task,
    TaskUpdate, Worksheet, sort_by_order,
};

use log::{debug, info, warn};
use uuid::Uuid;

/// In-memory view of one project's boards, kept in step with the store.
///
/// Worksheets, columns and tasks of the whole project are loaded up front;
/// projections such as [`KanbanBoard::tasks_by_status`] cover the selected
/// worksheet only. Every mutation validates its input, persists through the
/// matching service and only then applies the persisted result here, so
/// a failed call leaves the in-memory state untouched. Rejected input is
/// notified like any other failure.
pub struct KanbanBoard {
    project_id: Uuid,
    ctx: ServiceContext,
    worksheet_service: WorksheetService,
    column_service: ColumnService,
    task_service: TaskService,
    validator: Validator,
    author: Author,

    worksheets: Vec<Worksheet>,
    selected_worksheet: Option<Uuid>,
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

impl KanbanBoard {
    pub fn new(ctx: ServiceContext, validator: Validator, author: Author, project_id: Uuid) -> Self {
        Self {
            project_id,
            worksheet_service: WorksheetService::new(ctx.clone()),
            column_service: ColumnService::new(ctx.clone()),
            task_service: TaskService::new(ctx.clone()),
            ctx,
            validator,
            author,
            worksheets: Vec::new(),
            selected_worksheet: None,
            columns: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn project_id(&self) -> Uuid {
        self.project_id
    }

    /// Load worksheets (creating the default one), select the previously
    /// selected worksheet or the first, then load every column and task of
    /// the project.
    pub async fn load(&mut self) -> ServiceResult<()> {
        let worksheets = self.worksheet_service.list(self.project_id).await?;

        let selected = self
            .selected_worksheet
            .filter(|id| worksheets.iter().any(|w| w.id == *id))
            .or_else(|| worksheets.first().map(|w| w.id));

        if let Some(worksheet_id) = selected {
            // Seeds the default columns of a fresh worksheet
            self.column_service
                .list(self.project_id, worksheet_id)
                .await?;
        }

        let columns = self.column_service.list_for_project(self.project_id).await?;
        let tasks = self.task_service.list(self.project_id).await?;

        debug!(
            "Loaded project {}: {} worksheet(s), {} column(s), {} task(s)",
            self.project_id,
            worksheets.len(),
            columns.len(),
            tasks.len()
        );

        self.worksheets = worksheets;
        self.selected_worksheet = selected;
        self.columns = columns;
        self.tasks = tasks;
        Ok(())
    }

    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    pub fn selected_worksheet(&self) -> Option<&Worksheet> {
        let id = self.selected_worksheet?;
        self.worksheets.iter().find(|w| w.id == id)
    }

    /// Columns of the selected worksheet in display order.
    pub fn columns(&self) -> Vec<&Column> {
        let Some(worksheet_id) = self.selected_worksheet else {
            return Vec::new();
        };
        let mut columns: Vec<&Column> = self
            .columns
            .iter()
            .filter(|c| c.worksheet_id == worksheet_id)
            .collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    /// Tasks of the selected worksheet.
    pub fn tasks(&self) -> Vec<&Task> {
        let Some(worksheet_id) = self.selected_worksheet else {
            return Vec::new();
        };
        self.tasks
            .iter()
            .filter(|t| t.worksheet_id == worksheet_id)
            .collect()
    }

    pub fn task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Tasks of the selected worksheet grouped under each of its columns,
    /// in column order. Every column gets a lane, empty or not.
    pub fn tasks_by_status(&self) -> Vec<ColumnLane> {
        self.columns()
            .into_iter()
            .map(|column| ColumnLane {
                column: column.clone(),
                tasks: self
                    .tasks
                    .iter()
                    .filter(|t| t.column_id == column.id)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    fn selected_id(&self) -> ServiceResult<Uuid> {
        self.selected_worksheet
            .ok_or_else(ServiceError::no_worksheet_selected)
    }

    /// Rejected input raises the same error notification as a failed call.
    fn validated<T>(&self, operation: &str, result: ServiceResult<T>) -> ServiceResult<T> {
        if let Err(e) = &result {
            warn!("{operation} rejected: {e}");
            self.ctx.notifier.error(&format!("Failed to {operation}"));
        }
        result
    }

    fn local_task(&self, task_id: Uuid) -> ServiceResult<&Task> {
        self.task(task_id)
            .ok_or_else(|| ServiceError::not_found("Task", task_id))
    }

    fn local_task_mut(&mut self, task_id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    fn replace_task(&mut self, task: Task) {
        match self.local_task_mut(task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// Swap the cached columns of one worksheet for `columns`.
    fn replace_worksheet_columns(&mut self, worksheet_id: Uuid, mut columns: Vec<Column>) {
        self.columns.retain(|c| c.worksheet_id != worksheet_id);
        sort_by_order(&mut columns);
        self.columns.extend(columns);
    }

    // =========================================================================
    // Worksheets
    // =========================================================================

    /// Show another worksheet, seeding its default columns if it has none.
    pub async fn select_worksheet(&mut self, worksheet_id: Uuid) -> ServiceResult<()> {
        if !self.worksheets.iter().any(|w| w.id == worksheet_id) {
            return Err(ServiceError::not_found("Worksheet", worksheet_id));
        }

        let columns = self
            .column_service
            .list(self.project_id, worksheet_id)
            .await?;
        self.replace_worksheet_columns(worksheet_id, columns);
        self.selected_worksheet = Some(worksheet_id);
        Ok(())
    }

    /// Create a worksheet and switch to it.
    pub async fn create_worksheet(
        &mut self,
        title: &str,
        description: Option<&str>,
    ) -> ServiceResult<Worksheet> {
        let title = self.validated("create worksheet", self.validator.title(title))?;
        let description = self
            .validated("create worksheet", self.validator.description(description))?
            .filter(|d| !d.is_empty());

        let worksheet = self
            .worksheet_service
            .create(self.project_id, title, description)
            .await?;
        self.worksheets.push(worksheet.clone());
        self.select_worksheet(worksheet.id).await?;

        info!("Switched to new worksheet '{}'", worksheet.title);
        Ok(worksheet)
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    pub async fn create_task(&mut self, mut draft: NewTask) -> ServiceResult<Task> {
        draft.title = self.validated("create task", self.validator.title(&draft.title))?;
        draft.description = self
            .validated("create task", self.validator.description(draft.description.as_deref()))?
            .filter(|d| !d.is_empty());

        let task = self.task_service.create(self.project_id, draft).await?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub async fn update_task(&mut self, task_id: Uuid, mut update: TaskUpdate) -> ServiceResult<Task> {
        update.title = self.validated(
            "update task",
            self.validator.optional_title(update.title.as_deref()),
        )?;
        update.description = self.validated(
            "update task",
            self.validator.description(update.description.as_deref()),
        )?;

        let task = self
            .task_service
            .update(self.project_id, task_id, update)
            .await?;
        self.replace_task(task.clone());
        Ok(task)
    }

    pub async fn delete_task(&mut self, task_id: Uuid) -> ServiceResult<()> {
        self.task_service.delete(self.project_id, task_id).await?;
        self.tasks.retain(|t| t.id != task_id);
        Ok(())
    }

    /// Move a task to `column_id`. A task already in that column is
    /// returned as is without touching the store.
    pub async fn move_task(&mut self, task_id: Uuid, column_id: Uuid) -> ServiceResult<Task> {
        let task = self.local_task(task_id)?;
        if task.column_id == column_id {
            return Ok(task.clone());
        }

        let task = self
            .task_service
            .move_task(self.project_id, task_id, column_id)
            .await?;
        self.replace_task(task.clone());
        Ok(task)
    }

    /// Drag-and-drop entry point. Looks the task up among the selected
    /// worksheet's tasks and moves it only when `column_id` differs from its
    /// current column. Returns whether a move happened.
    pub async fn drop_task(&mut self, task_id: Uuid, column_id: Uuid) -> ServiceResult<bool> {
        let Some(task) = self.tasks().into_iter().find(|t| t.id == task_id) else {
            return Err(ServiceError::not_found("Task", task_id));
        };
        if task.column_id == column_id {
            debug!("Dropped task {task_id} onto its own column");
            return Ok(false);
        }

        self.move_task(task_id, column_id).await?;
        Ok(true)
    }

    pub async fn add_comment(&mut self, task_id: Uuid, content: &str) -> ServiceResult<Comment> {
        let content = self.validated("add comment", self.validator.comment(content))?;

        let comment = self
            .task_service
            .add_comment(self.project_id, task_id, content, &self.author)
            .await?;
        if let Some(task) = self.local_task_mut(task_id) {
            task.comments.push(comment.clone());
        }
        Ok(comment)
    }

    pub async fn add_reply(
        &mut self,
        task_id: Uuid,
        comment_id: Uuid,
        content: &str,
    ) -> ServiceResult<Reply> {
        let content = self.validated("add reply", self.validator.comment(content))?;

        let reply = self
            .task_service
            .add_reply(self.project_id, task_id, comment_id, content, &self.author)
            .await?;
        if let Some(comment) = self
            .local_task_mut(task_id)
            .and_then(|t| t.find_comment_mut(comment_id))
        {
            comment.replies.push(reply.clone());
        }
        Ok(reply)
    }

    pub async fn add_attachment(
        &mut self,
        task_id: Uuid,
        draft: NewAttachment,
    ) -> ServiceResult<Attachment> {
        let attachment = self
            .task_service
            .add_attachment(self.project_id, task_id, draft)
            .await?;
        if let Some(task) = self.local_task_mut(task_id) {
            task.attachments.push(attachment.clone());
        }
        Ok(attachment)
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Append a column to the selected worksheet.
    pub async fn create_column(&mut self, title: &str, color: &str) -> ServiceResult<Column> {
        let worksheet_id = self.selected_id()?;
        let title = self.validated("create column", self.validator.title(title))?;

        let column = self
            .column_service
            .create(self.project_id, worksheet_id, title, color.to_string())
            .await?;
        self.columns.push(column.clone());
        Ok(column)
    }

    pub async fn update_column(
        &mut self,
        column_id: Uuid,
        mut update: ColumnUpdate,
    ) -> ServiceResult<Column> {
        update.title = self.validated(
            "update column",
            self.validator.optional_title(update.title.as_deref()),
        )?;

        let column = self
            .column_service
            .update(self.project_id, column_id, update)
            .await?;

        if let Some(existing) = self.columns.iter_mut().find(|c| c.id == column.id) {
            *existing = column.clone();
        }
        for task in self.tasks.iter_mut().filter(|t| t.column_id == column.id) {
            task.status = column.status.clone();
        }
        Ok(column)
    }

    /// Delete a column; its tasks land in the absorbing column reported by
    /// the returned [`ColumnDeletion`].
    pub async fn delete_column(&mut self, column_id: Uuid) -> ServiceResult<ColumnDeletion> {
        let deletion = self
            .column_service
            .delete(self.project_id, column_id)
            .await?;

        self.replace_worksheet_columns(deletion.deleted.worksheet_id, deletion.remaining.clone());
        for task_id in &deletion.reassigned_task_ids {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == *task_id) {
                task.assign_column(&deletion.absorbed_by);
            }
        }
        Ok(deletion)
    }

    /// Move a column to `new_index` within its worksheet.
    pub async fn reorder_columns(
        &mut self,
        column_id: Uuid,
        new_index: usize,
    ) -> ServiceResult<Vec<Column>> {
        let columns = self
            .column_service
            .reorder(self.project_id, column_id, new_index)
            .await?;

        if let Some(first) = columns.first() {
            self.replace_worksheet_columns(first.worksheet_id, columns.clone());
        }
        Ok(columns)
    }
}
