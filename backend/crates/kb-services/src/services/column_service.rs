use crate::{Result as ServiceResult, ServiceContext, ServiceError};

use kb_core::{
    Column, ColumnUpdate, Task, Worksheet, absorbing_sibling, backlog_column, default_columns,
    move_column, renumber, status_slug, take_worksheet_columns,
};
use kb_store::{Collection, StoreKey};

use log::info;
use serde::Serialize;
use uuid::Uuid;

/// Outcome of deleting a column.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDeletion {
    pub deleted: Column,
    /// Column that received the deleted column's tasks
    pub absorbed_by: Column,
    /// True when `absorbed_by` is a backlog column created for the purpose
    pub created_backlog: bool,
    pub reassigned_task_ids: Vec<Uuid>,
    /// The worksheet's columns after deletion, in order
    pub remaining: Vec<Column>,
}

#[derive(Clone)]
pub struct ColumnService {
    ctx: ServiceContext,
}

impl ColumnService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    fn columns(&self, project_id: Uuid) -> Collection<Column> {
        self.ctx.collection(StoreKey::columns(project_id))
    }

    fn tasks(&self, project_id: Uuid) -> Collection<Task> {
        self.ctx.collection(StoreKey::tasks(project_id))
    }

    fn ensure_worksheet(&self, project_id: Uuid, worksheet_id: Uuid) -> ServiceResult<()> {
        let worksheets: Collection<Worksheet> =
            self.ctx.collection(StoreKey::worksheets(project_id));
        if worksheets.get()?.iter().any(|w| w.id == worksheet_id) {
            Ok(())
        } else {
            Err(ServiceError::not_found("Worksheet", worksheet_id))
        }
    }

    /// Columns of one worksheet in display order. A worksheet without
    /// columns is seeded with todo, in-progress, review and done.
    pub async fn list(&self, project_id: Uuid, worksheet_id: Uuid) -> ServiceResult<Vec<Column>> {
        self.ctx
            .run("load columns", || {
                self.ensure_worksheet(project_id, worksheet_id)?;

                let mut all = self.columns(project_id).get()?;
                let local = take_worksheet_columns(&mut all, worksheet_id);
                if !local.is_empty() {
                    return Ok(local);
                }

                self.columns(project_id)
                    .modify(|all| -> ServiceResult<Vec<Column>> {
                        let mut local = take_worksheet_columns(all, worksheet_id);
                        if local.is_empty() {
                            info!("Seeding default columns for worksheet {worksheet_id}");
                            local = default_columns(worksheet_id);
                        }
                        all.extend(local.iter().cloned());
                        Ok(local)
                    })
            })
            .await
    }

    /// Every column of the project, across worksheets.
    pub async fn list_for_project(&self, project_id: Uuid) -> ServiceResult<Vec<Column>> {
        self.ctx
            .run("load columns", || Ok(self.columns(project_id).get()?))
            .await
    }

    /// Append a column to the worksheet. Its status is the slug of `title`.
    pub async fn create(
        &self,
        project_id: Uuid,
        worksheet_id: Uuid,
        title: String,
        color: String,
    ) -> ServiceResult<Column> {
        let column = self
            .ctx
            .run("create column", || {
                self.ensure_worksheet(project_id, worksheet_id)?;

                self.columns(project_id)
                    .modify(|all| -> ServiceResult<Column> {
                        let mut local = take_worksheet_columns(all, worksheet_id);
                        renumber(&mut local);
                        let column = Column::new(worksheet_id, title, color, local.len() as u32);
                        local.push(column.clone());
                        all.extend(local);
                        Ok(column)
                    })
            })
            .await?;

        info!("Created column '{}' ({})", column.title, column.status);
        self.ctx.notify_success("Column created");
        Ok(column)
    }

    /// Retitle or recolor a column. A new title also yields a new status
    /// slug, which is copied onto the column's tasks.
    pub async fn update(
        &self,
        project_id: Uuid,
        column_id: Uuid,
        update: ColumnUpdate,
    ) -> ServiceResult<Column> {
        let column = self
            .ctx
            .run("update column", || {
                let column = self
                    .columns(project_id)
                    .modify(|all| -> ServiceResult<Column> {
                        let Some(column) = all.iter_mut().find(|c| c.id == column_id) else {
                            return Err(ServiceError::not_found("Column", column_id));
                        };

                        if let Some(title) = update.title {
                            column.status = status_slug(&title);
                            column.title = title;
                        }
                        if let Some(color) = update.color {
                            column.color = color;
                        }

                        Ok(column.clone())
                    })?;

                self.tasks(project_id).modify(|tasks| -> ServiceResult<()> {
                    for task in tasks
                        .iter_mut()
                        .filter(|t| t.column_id == column.id && t.status != column.status)
                    {
                        task.status = column.status.clone();
                    }
                    Ok(())
                })?;

                Ok(column)
            })
            .await?;

        self.ctx.notify_success("Column updated");
        Ok(column)
    }

    /// Delete a column without orphaning its tasks.
    ///
    /// Tasks move to the first other column of the worksheet; when there
    /// is none a "Backlog" column is created for them. Remaining orders are
    /// renumbered by position. The absorbing column exists before any task
    /// is moved, so an interrupted delete never leaves tasks pointing at a
    /// missing column.
    pub async fn delete(&self, project_id: Uuid, column_id: Uuid) -> ServiceResult<ColumnDeletion> {
        let deletion = self
            .ctx
            .run("delete column", || {
                let (deleted, absorbed_by, created_backlog) = self
                    .columns(project_id)
                    .modify(|all| -> ServiceResult<(Column, Column, bool)> {
                        let Some(deleted) = all.iter().find(|c| c.id == column_id).cloned() else {
                            return Err(ServiceError::not_found("Column", column_id));
                        };

                        let mut local = take_worksheet_columns(all, deleted.worksheet_id);
                        let (target, created) = match absorbing_sibling(&local, column_id) {
                            Some(sibling) => (sibling.clone(), false),
                            None => {
                                let backlog =
                                    backlog_column(deleted.worksheet_id, local.len() as u32);
                                local.push(backlog.clone());
                                (backlog, true)
                            }
                        };
                        all.extend(local);

                        Ok((deleted, target, created))
                    })?;

                let reassigned_task_ids =
                    self.tasks(project_id)
                        .modify(|tasks| -> ServiceResult<Vec<Uuid>> {
                            let mut ids = Vec::new();
                            for task in tasks.iter_mut().filter(|t| t.column_id == column_id) {
                                task.assign_column(&absorbed_by);
                                ids.push(task.id);
                            }
                            Ok(ids)
                        })?;

                let remaining = self
                    .columns(project_id)
                    .modify(|all| -> ServiceResult<Vec<Column>> {
                        let mut local = take_worksheet_columns(all, deleted.worksheet_id);
                        local.retain(|c| c.id != column_id);
                        renumber(&mut local);
                        all.extend(local.iter().cloned());
                        Ok(local)
                    })?;

                // Orders were renumbered, pick up the absorbing column's new one
                let absorbed_by = remaining
                    .iter()
                    .find(|c| c.id == absorbed_by.id)
                    .cloned()
                    .unwrap_or(absorbed_by);

                Ok(ColumnDeletion {
                    deleted,
                    absorbed_by,
                    created_backlog,
                    reassigned_task_ids,
                    remaining,
                })
            })
            .await?;

        info!(
            "Deleted column '{}', {} task(s) moved to '{}'",
            deletion.deleted.title,
            deletion.reassigned_task_ids.len(),
            deletion.absorbed_by.title
        );
        self.ctx.notify_success("Column deleted");
        Ok(deletion)
    }

    /// Move a column to `new_index` within its worksheet and return the
    /// worksheet's columns in their new order.
    pub async fn reorder(
        &self,
        project_id: Uuid,
        column_id: Uuid,
        new_index: usize,
    ) -> ServiceResult<Vec<Column>> {
        let columns = self
            .ctx
            .run("reorder columns", || {
                self.columns(project_id)
                    .modify(|all| -> ServiceResult<Vec<Column>> {
                        let Some(worksheet_id) =
                            all.iter().find(|c| c.id == column_id).map(|c| c.worksheet_id)
                        else {
                            return Err(ServiceError::not_found("Column", column_id));
                        };

                        let mut local = take_worksheet_columns(all, worksheet_id);
                        move_column(&mut local, column_id, new_index)?;
                        all.extend(local.iter().cloned());
                        Ok(local)
                    })
            })
            .await?;

        self.ctx.notify_success("Columns reordered");
        Ok(columns)
    }
}
