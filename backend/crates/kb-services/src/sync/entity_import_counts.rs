use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct EntityImportCounts {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}
