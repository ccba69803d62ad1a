use crate::{Result as ServiceResult, ServiceContext, ServiceError};

use kb_core::{
    Column, DEFAULT_WORKSHEET_TITLE, Project, Task, Worksheet, WorksheetUpdate,
    apply_optional_text,
};
use kb_store::{Collection, StoreKey};

use log::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct WorksheetService {
    ctx: ServiceContext,
}

impl WorksheetService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    fn worksheets(&self, project_id: Uuid) -> Collection<Worksheet> {
        self.ctx.collection(StoreKey::worksheets(project_id))
    }

    /// Worksheets only hang off stored projects.
    fn ensure_project(&self, project_id: Uuid) -> ServiceResult<()> {
        let projects: Collection<Project> = self.ctx.collection(StoreKey::projects());
        if projects.get()?.iter().any(|p| p.id == project_id) {
            Ok(())
        } else {
            Err(ServiceError::not_found("Project", project_id))
        }
    }

    /// Worksheets of the project. A project without any gets a
    /// "Main Board" worksheet created and persisted first. Unknown projects
    /// are `NotFound` and leave the store untouched.
    pub async fn list(&self, project_id: Uuid) -> ServiceResult<Vec<Worksheet>> {
        self.ctx
            .run("load worksheets", || {
                self.ensure_project(project_id)?;
                self.worksheets(project_id).modify(|worksheets| {
                    if worksheets.is_empty() {
                        let worksheet = Worksheet::new(
                            project_id,
                            DEFAULT_WORKSHEET_TITLE.to_string(),
                            None,
                        );
                        info!("Created default worksheet for project {project_id}");
                        worksheets.push(worksheet);
                    }
                    Ok::<_, ServiceError>(worksheets.clone())
                })
            })
            .await
    }

    pub async fn create(
        &self,
        project_id: Uuid,
        title: String,
        description: Option<String>,
    ) -> ServiceResult<Worksheet> {
        let worksheet = self
            .ctx
            .run("create worksheet", || {
                self.ensure_project(project_id)?;
                let worksheet = Worksheet::new(project_id, title, description);
                self.worksheets(project_id).modify(|worksheets| {
                    worksheets.push(worksheet.clone());
                    Ok::<_, ServiceError>(())
                })?;
                Ok(worksheet)
            })
            .await?;

        self.ctx.notify_success("Worksheet created");
        Ok(worksheet)
    }

    pub async fn update(
        &self,
        project_id: Uuid,
        worksheet_id: Uuid,
        update: WorksheetUpdate,
    ) -> ServiceResult<Worksheet> {
        let worksheet = self
            .ctx
            .run("update worksheet", || {
                self.worksheets(project_id).modify(|worksheets| {
                    let Some(worksheet) = worksheets.iter_mut().find(|w| w.id == worksheet_id)
                    else {
                        return Err(ServiceError::not_found("Worksheet", worksheet_id));
                    };

                    if let Some(title) = update.title {
                        worksheet.title = title;
                    }
                    apply_optional_text(&mut worksheet.description, update.description);

                    Ok(worksheet.clone())
                })
            })
            .await?;

        self.ctx.notify_success("Worksheet updated");
        Ok(worksheet)
    }

    /// Delete a worksheet along with its columns and tasks.
    pub async fn delete(&self, project_id: Uuid, worksheet_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .run("delete worksheet", || {
                self.worksheets(project_id).modify(|worksheets| {
                    let before = worksheets.len();
                    worksheets.retain(|w| w.id != worksheet_id);
                    if worksheets.len() == before {
                        return Err(ServiceError::not_found("Worksheet", worksheet_id));
                    }
                    Ok(())
                })?;

                let columns: Collection<Column> =
                    self.ctx.collection(StoreKey::columns(project_id));
                columns.modify(|columns| {
                    columns.retain(|c| c.worksheet_id != worksheet_id);
                    Ok::<_, ServiceError>(())
                })?;

                let tasks: Collection<Task> = self.ctx.collection(StoreKey::tasks(project_id));
                tasks.modify(|tasks| {
                    tasks.retain(|t| t.worksheet_id != worksheet_id);
                    Ok::<_, ServiceError>(())
                })
            })
            .await?;

        info!("Deleted worksheet {worksheet_id} of project {project_id}");
        self.ctx.notify_success("Worksheet deleted");
        Ok(())
    }
}
