use crate::{Result as ServiceResult, ServiceContext, ServiceError};

use kb_core::{
    Attachment, Author, Column, Comment, CoreError, NewAttachment, NewTask, Reply, Task,
    TaskUpdate, apply_optional_text,
};
use kb_store::{Collection, StoreKey};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::info;
use uuid::Uuid;

/// Tasks plus the comments, replies and attachments embedded in them.
#[derive(Clone)]
pub struct TaskService {
    ctx: ServiceContext,
}

impl TaskService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    fn tasks(&self, project_id: Uuid) -> Collection<Task> {
        self.ctx.collection(StoreKey::tasks(project_id))
    }

    fn find_column(&self, project_id: Uuid, column_id: Uuid) -> ServiceResult<Column> {
        let columns: Collection<Column> = self.ctx.collection(StoreKey::columns(project_id));
        columns
            .get()?
            .into_iter()
            .find(|c| c.id == column_id)
            .ok_or_else(|| ServiceError::not_found("Column", column_id))
    }

    /// Read-modify-write of a single task.
    fn modify_task<R>(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        f: impl FnOnce(&mut Task) -> ServiceResult<R>,
    ) -> ServiceResult<R> {
        self.tasks(project_id)
            .modify(|tasks| -> ServiceResult<R> {
                let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
                    return Err(ServiceError::not_found("Task", task_id));
                };
                f(task)
            })
    }

    pub async fn list(&self, project_id: Uuid) -> ServiceResult<Vec<Task>> {
        self.ctx
            .run("load tasks", || Ok(self.tasks(project_id).get()?))
            .await
    }

    pub async fn list_for_worksheet(
        &self,
        project_id: Uuid,
        worksheet_id: Uuid,
    ) -> ServiceResult<Vec<Task>> {
        self.ctx
            .run("load tasks", || {
                let mut tasks = self.tasks(project_id).get()?;
                tasks.retain(|t| t.worksheet_id == worksheet_id);
                Ok(tasks)
            })
            .await
    }

    pub async fn get(&self, project_id: Uuid, task_id: Uuid) -> ServiceResult<Task> {
        self.ctx
            .run("load task", || {
                self.tasks(project_id)
                    .get()?
                    .into_iter()
                    .find(|t| t.id == task_id)
                    .ok_or_else(|| ServiceError::not_found("Task", task_id))
            })
            .await
    }

    /// Create a task in `draft.column_id`; its worksheet and status come
    /// from that column.
    pub async fn create(&self, project_id: Uuid, draft: NewTask) -> ServiceResult<Task> {
        let task = self
            .ctx
            .run("create task", || {
                let column = self.find_column(project_id, draft.column_id)?;

                let mut task = Task::new(project_id, &column, draft.title, draft.priority);
                task.description = draft.description;
                task.due_date = draft.due_date;
                task.assignee = draft.assignee;

                self.tasks(project_id)
                    .modify(|tasks| -> ServiceResult<()> {
                        tasks.push(task.clone());
                        Ok(())
                    })?;
                Ok(task)
            })
            .await?;

        info!("Created task '{}' in {}", task.title, task.status);
        self.ctx.notify_success("Task created");
        Ok(task)
    }

    pub async fn update(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        update: TaskUpdate,
    ) -> ServiceResult<Task> {
        let task = self
            .ctx
            .run("update task", || {
                let column = update
                    .column_id
                    .map(|id| self.find_column(project_id, id))
                    .transpose()?;

                self.modify_task(project_id, task_id, |task| {
                    if let Some(column) = &column {
                        ensure_same_worksheet(task, column)?;
                        task.assign_column(column);
                    }
                    if let Some(title) = update.title {
                        task.title = title;
                    }
                    apply_optional_text(&mut task.description, update.description);
                    if let Some(priority) = update.priority {
                        task.priority = priority;
                    }
                    if let Some(due_date) = update.due_date {
                        task.due_date = Some(due_date);
                    }
                    apply_optional_text(&mut task.assignee, update.assignee);
                    task.updated_at = Utc::now();

                    Ok(task.clone())
                })
            })
            .await?;

        self.ctx.notify_success("Task updated");
        Ok(task)
    }

    /// Move a task to another column of its worksheet. Moving it to the
    /// column it already sits in changes nothing.
    pub async fn move_task(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        column_id: Uuid,
    ) -> ServiceResult<Task> {
        let (task, moved) = self
            .ctx
            .run("move task", || {
                let column = self.find_column(project_id, column_id)?;
                self.modify_task(project_id, task_id, |task| {
                    ensure_same_worksheet(task, &column)?;
                    let moved = task.assign_column(&column);
                    Ok((task.clone(), moved))
                })
            })
            .await?;

        if moved {
            info!("Moved task {} to {}", task.id, task.status);
            self.ctx.notify_success("Task moved");
        }
        Ok(task)
    }

    pub async fn delete(&self, project_id: Uuid, task_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .run("delete task", || {
                self.tasks(project_id).modify(|tasks| {
                    let before = tasks.len();
                    tasks.retain(|t| t.id != task_id);
                    if tasks.len() == before {
                        return Err(ServiceError::not_found("Task", task_id));
                    }
                    Ok(())
                })
            })
            .await?;

        info!("Deleted task {task_id}");
        self.ctx.notify_success("Task deleted");
        Ok(())
    }

    pub async fn add_comment(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        content: String,
        author: &Author,
    ) -> ServiceResult<Comment> {
        let comment = self
            .ctx
            .run("add comment", || {
                self.modify_task(project_id, task_id, |task| {
                    let comment = Comment::new(
                        task_id,
                        content,
                        author.id.clone(),
                        author.name.clone(),
                    );
                    task.comments.push(comment.clone());
                    task.updated_at = Utc::now();
                    Ok(comment)
                })
            })
            .await?;

        self.ctx.notify_success("Comment added");
        Ok(comment)
    }

    pub async fn add_reply(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        comment_id: Uuid,
        content: String,
        author: &Author,
    ) -> ServiceResult<Reply> {
        let reply = self
            .ctx
            .run("add reply", || {
                self.modify_task(project_id, task_id, |task| {
                    let Some(comment) = task.find_comment_mut(comment_id) else {
                        return Err(ServiceError::not_found("Comment", comment_id));
                    };
                    let reply = Reply::new(
                        comment_id,
                        content,
                        author.id.clone(),
                        author.name.clone(),
                    );
                    comment.replies.push(reply.clone());
                    task.updated_at = Utc::now();
                    Ok(reply)
                })
            })
            .await?;

        self.ctx.notify_success("Reply added");
        Ok(reply)
    }

    /// Delete a comment together with its replies.
    pub async fn delete_comment(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        comment_id: Uuid,
    ) -> ServiceResult<()> {
        self.ctx
            .run("delete comment", || {
                self.modify_task(project_id, task_id, |task| {
                    let before = task.comments.len();
                    task.comments.retain(|c| c.id != comment_id);
                    if task.comments.len() == before {
                        return Err(ServiceError::not_found("Comment", comment_id));
                    }
                    task.updated_at = Utc::now();
                    Ok(())
                })
            })
            .await?;

        self.ctx.notify_success("Comment deleted");
        Ok(())
    }

    pub async fn add_attachment(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        draft: NewAttachment,
    ) -> ServiceResult<Attachment> {
        let attachment = self
            .ctx
            .run("add attachment", || {
                self.modify_task(project_id, task_id, |task| {
                    let attachment = Attachment::new(
                        task_id,
                        draft.name,
                        draft.url,
                        draft.content_type,
                        draft.size,
                    );
                    task.attachments.push(attachment.clone());
                    task.updated_at = Utc::now();
                    Ok(attachment)
                })
            })
            .await?;

        info!("Attached '{}' to task {task_id}", attachment.name);
        self.ctx.notify_success("Attachment added");
        Ok(attachment)
    }

    pub async fn delete_attachment(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        attachment_id: Uuid,
    ) -> ServiceResult<()> {
        self.ctx
            .run("delete attachment", || {
                self.modify_task(project_id, task_id, |task| {
                    let before = task.attachments.len();
                    task.attachments.retain(|a| a.id != attachment_id);
                    if task.attachments.len() == before {
                        return Err(ServiceError::not_found("Attachment", attachment_id));
                    }
                    task.updated_at = Utc::now();
                    Ok(())
                })
            })
            .await?;

        self.ctx.notify_success("Attachment deleted");
        Ok(())
    }
}

#[track_caller]
fn ensure_same_worksheet(task: &Task, column: &Column) -> ServiceResult<()> {
    if task.worksheet_id == column.worksheet_id {
        return Ok(());
    }
    Err(CoreError::ColumnNotOnWorksheet {
        column_id: column.id,
        worksheet_id: task.worksheet_id,
        location: ErrorLocation::from(Location::caller()),
    }
    .into())
}
