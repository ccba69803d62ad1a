use crate::{Result as ServiceResult, ServiceContext, ServiceError};

use kb_core::{Project, ProjectUpdate, apply_optional_text};
use kb_store::{Collection, StoreKey};

use chrono::{NaiveDate, Utc};
use log::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProjectService {
    ctx: ServiceContext,
}

impl ProjectService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    fn projects(&self) -> Collection<Project> {
        self.ctx.collection(StoreKey::projects())
    }

    pub async fn list(&self) -> ServiceResult<Vec<Project>> {
        self.ctx
            .run("load projects", || Ok(self.projects().get()?))
            .await
    }

    pub async fn get(&self, project_id: Uuid) -> ServiceResult<Project> {
        self.ctx
            .run("load project", || {
                self.projects()
                    .get()?
                    .into_iter()
                    .find(|p| p.id == project_id)
                    .ok_or_else(|| ServiceError::not_found("Project", project_id))
            })
            .await
    }

    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> ServiceResult<Project> {
        let project = self
            .ctx
            .run("create project", || {
                let project = Project::new(name, description, due_date);
                self.projects().modify(|projects| {
                    projects.push(project.clone());
                    Ok::<_, ServiceError>(())
                })?;
                Ok(project)
            })
            .await?;

        info!("Created project {} ({})", project.name, project.id);
        self.ctx.notify_success("Project created");
        Ok(project)
    }

    pub async fn update(&self, project_id: Uuid, update: ProjectUpdate) -> ServiceResult<Project> {
        let project = self
            .ctx
            .run("update project", || {
                self.projects().modify(|projects| {
                    let Some(project) = projects.iter_mut().find(|p| p.id == project_id) else {
                        return Err(ServiceError::not_found("Project", project_id));
                    };

                    if let Some(name) = update.name {
                        project.name = name;
                    }
                    apply_optional_text(&mut project.description, update.description);
                    if let Some(status) = update.status {
                        project.status = status;
                    }
                    if let Some(due_date) = update.due_date {
                        project.due_date = Some(due_date);
                    }
                    project.updated_at = Utc::now();

                    Ok(project.clone())
                })
            })
            .await?;

        self.ctx.notify_success("Project updated");
        Ok(project)
    }

    /// Delete the project together with its worksheets, columns and tasks.
    pub async fn delete(&self, project_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .run("delete project", || {
                self.projects().modify(|projects| {
                    let before = projects.len();
                    projects.retain(|p| p.id != project_id);
                    if projects.len() == before {
                        return Err(ServiceError::not_found("Project", project_id));
                    }
                    Ok(())
                })?;

                for key in StoreKey::project_scoped(project_id) {
                    self.ctx.store.remove(&key)?;
                }
                Ok(())
            })
            .await?;

        info!("Deleted project {project_id}");
        self.ctx.notify_success("Project deleted");
        Ok(())
    }
}
