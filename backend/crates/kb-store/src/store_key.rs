use uuid::Uuid;

const PROJECTS_KEY: &str = "projects";
const WORKSHEETS_PREFIX: &str = "worksheets";
const COLUMNS_PREFIX: &str = "kanban-columns";
const TASKS_PREFIX: &str = "kanban-tasks";

/// Builds the `<resource>-<projectId>` keys collections live under.
pub struct StoreKey;

impl StoreKey {
    pub fn projects() -> String {
        PROJECTS_KEY.to_string()
    }

    pub fn worksheets(project_id: Uuid) -> String {
        format!("{WORKSHEETS_PREFIX}-{project_id}")
    }

    pub fn columns(project_id: Uuid) -> String {
        format!("{COLUMNS_PREFIX}-{project_id}")
    }

    pub fn tasks(project_id: Uuid) -> String {
        format!("{TASKS_PREFIX}-{project_id}")
    }

    /// Every per-project key, for cascade deletes and exports.
    pub fn project_scoped(project_id: Uuid) -> [String; 3] {
        [
            Self::worksheets(project_id),
            Self::columns(project_id),
            Self::tasks(project_id),
        ]
    }

    /// Keys are used as file names by the file backend, so only ASCII
    /// alphanumerics, `-` and `_` are accepted.
    pub fn is_valid(key: &str) -> bool {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}
