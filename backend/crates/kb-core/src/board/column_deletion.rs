use crate::Column;

use uuid::Uuid;

/// Column that takes over the tasks of `deleted_id`: the first remaining
/// column of the worksheet in display order. `None` means the deleted
/// column was the last one and a backlog column has to be created.
///
/// `columns` must be one worksheet's columns sorted by order.
pub fn absorbing_sibling(columns: &[Column], deleted_id: Uuid) -> Option<&Column> {
    columns.iter().find(|c| c.id != deleted_id)
}
