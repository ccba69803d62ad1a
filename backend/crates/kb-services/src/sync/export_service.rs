use crate::{
    BoardExport, EXPORT_SCHEMA_VERSION, EntityImportCounts, ImportResult, Result as ServiceResult,
    ServiceContext, ServiceError,
};

use kb_core::{Column, Project, Task, Worksheet, renumber, take_worksheet_columns};
use kb_store::{Collection, StoreKey};

use std::collections::HashSet;
use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{info, warn};
use uuid::Uuid;

/// Whole-project snapshots for backup and transfer between stores.
#[derive(Clone)]
pub struct ExportService {
    ctx: ServiceContext,
}

impl ExportService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn export_project(&self, project_id: Uuid) -> ServiceResult<BoardExport> {
        self.ctx
            .run("export project", || {
                let projects: Collection<Project> = self.ctx.collection(StoreKey::projects());
                let Some(project) = projects.get()?.into_iter().find(|p| p.id == project_id)
                else {
                    return Err(ServiceError::not_found("Project", project_id));
                };

                let worksheets: Collection<Worksheet> =
                    self.ctx.collection(StoreKey::worksheets(project_id));
                let columns: Collection<Column> =
                    self.ctx.collection(StoreKey::columns(project_id));
                let tasks: Collection<Task> = self.ctx.collection(StoreKey::tasks(project_id));

                Ok(BoardExport {
                    schema_version: EXPORT_SCHEMA_VERSION,
                    exported_at: Utc::now().to_rfc3339(),
                    exported_by: "kb".to_string(),
                    project,
                    worksheets: worksheets.get()?,
                    columns: columns.get()?,
                    tasks: tasks.get()?,
                })
            })
            .await
    }

    /// Merge an export into the store.
    ///
    /// Entities are matched by id. Missing ones are created; projects and
    /// tasks replace the stored copy when their `updatedAt` is newer, and
    /// columns always take the imported title, color and order. Columns
    /// whose worksheet is unknown are skipped, as are tasks whose column is
    /// unknown or that belong to another project. Column orders are
    /// renumbered afterwards and every task takes the worksheet and status
    /// of its column.
    pub async fn import_project(&self, data: BoardExport) -> ServiceResult<ImportResult> {
        if data.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(ServiceError::SchemaVersion {
                found: data.schema_version,
                expected: EXPORT_SCHEMA_VERSION,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let result = self
            .ctx
            .run("import project", || {
                let project_id = data.project.id;
                let mut result = ImportResult::default();

                let projects: Collection<Project> = self.ctx.collection(StoreKey::projects());
                result.projects = projects.modify(|stored| -> ServiceResult<_> {
                    Ok(upsert(
                        stored,
                        vec![data.project],
                        |p| p.id,
                        |incoming, existing| incoming.updated_at > existing.updated_at,
                    ))
                })?;

                let worksheets: Collection<Worksheet> =
                    self.ctx.collection(StoreKey::worksheets(project_id));
                let worksheet_ids = worksheets.modify(|stored| -> ServiceResult<_> {
                    let counts = upsert(stored, data.worksheets, |w| w.id, |_, _| false);
                    let ids: HashSet<Uuid> = stored.iter().map(|w| w.id).collect();
                    Ok((counts, ids))
                })?;
                result.worksheets = worksheet_ids.0;
                let worksheet_ids = worksheet_ids.1;

                let (known, orphaned): (Vec<Column>, Vec<Column>) = data
                    .columns
                    .into_iter()
                    .partition(|c| worksheet_ids.contains(&c.worksheet_id));

                let columns: Collection<Column> =
                    self.ctx.collection(StoreKey::columns(project_id));
                let live_columns = columns.modify(|stored| -> ServiceResult<_> {
                    let mut counts = upsert(stored, known, |c| c.id, |_, _| true);
                    counts.skipped += orphaned.len();

                    for worksheet_id in &worksheet_ids {
                        let mut local = take_worksheet_columns(stored, *worksheet_id);
                        renumber(&mut local);
                        stored.extend(local);
                    }
                    Ok((counts, stored.clone()))
                })?;
                result.columns = live_columns.0;
                let live_columns = live_columns.1;

                let (known, orphaned): (Vec<Task>, Vec<Task>) = data
                    .tasks
                    .into_iter()
                    .partition(|t| {
                        t.project_id == project_id
                            && live_columns.iter().any(|c| c.id == t.column_id)
                    });

                let tasks: Collection<Task> = self.ctx.collection(StoreKey::tasks(project_id));
                result.tasks = tasks.modify(|stored| -> ServiceResult<_> {
                    let mut counts = upsert(
                        stored,
                        known,
                        |t| t.id,
                        |incoming, existing| incoming.updated_at > existing.updated_at,
                    );
                    counts.skipped += orphaned.len();

                    // The column decides worksheet and status
                    for task in stored.iter_mut() {
                        if let Some(column) = live_columns.iter().find(|c| c.id == task.column_id)
                        {
                            task.worksheet_id = column.worksheet_id;
                            task.status = column.status.clone();
                        }
                    }
                    Ok(counts)
                })?;

                if !orphaned.is_empty() {
                    warn!(
                        "Skipped {} task(s) outside the imported project or its columns",
                        orphaned.len()
                    );
                }

                Ok(result)
            })
            .await?;

        info!(
            "Imported project: {} task(s) created, {} updated, {} skipped",
            result.tasks.created, result.tasks.updated, result.tasks.skipped
        );
        self.ctx.notify_success("Project imported");
        Ok(result)
    }
}

/// Insert or replace `incoming` items in `stored` by id. `replace` decides
/// whether an existing item is overwritten.
fn upsert<T>(
    stored: &mut Vec<T>,
    incoming: Vec<T>,
    id: impl Fn(&T) -> Uuid,
    replace: impl Fn(&T, &T) -> bool,
) -> EntityImportCounts {
    let mut counts = EntityImportCounts::default();

    for item in incoming {
        match stored.iter_mut().find(|existing| id(existing) == id(&item)) {
            None => {
                stored.push(item);
                counts.created += 1;
            }
            Some(existing) if replace(&item, existing) => {
                *existing = item;
                counts.updated += 1;
            }
            Some(_) => {
                counts.skipped += 1;
            }
        }
    }

    counts
}
