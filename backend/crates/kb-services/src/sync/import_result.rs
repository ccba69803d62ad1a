use crate::sync::entity_import_counts::EntityImportCounts;

use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportResult {
    pub projects: EntityImportCounts,
    pub worksheets: EntityImportCounts,
    pub columns: EntityImportCounts,
    pub tasks: EntityImportCounts,
}
