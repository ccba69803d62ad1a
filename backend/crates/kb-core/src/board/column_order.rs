use crate::{Column, CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Sort one worksheet's columns by `order`. Stable, so ties keep their
/// stored sequence.
pub fn sort_by_order(columns: &mut [Column]) {
    columns.sort_by_key(|c| c.order);
}

/// Rewrite every `order` to match array position.
pub fn renumber(columns: &mut [Column]) {
    for (index, column) in columns.iter_mut().enumerate() {
        column.order = index as u32;
    }
}

/// True when the orders are exactly `0..n-1` in some permutation.
pub fn is_contiguous(columns: &[Column]) -> bool {
    let mut orders: Vec<u32> = columns.iter().map(|c| c.order).collect();
    orders.sort_unstable();
    orders.iter().enumerate().all(|(i, o)| *o == i as u32)
}

/// Move `column_id` to `new_index` within one worksheet's columns (already
/// sorted by order) and renumber. Indexes past the end clamp to the end.
#[track_caller]
pub fn move_column(columns: &mut Vec<Column>, column_id: Uuid, new_index: usize) -> CoreResult<()> {
    let current = columns
        .iter()
        .position(|c| c.id == column_id)
        .ok_or_else(|| CoreError::Validation {
            message: format!("column {column_id} is not on this worksheet"),
            field: Some("column_id".into()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let column = columns.remove(current);
    let target = new_index.min(columns.len());
    columns.insert(target, column);
    renumber(columns);

    Ok(())
}

/// Remove and return the columns of `worksheet_id` from a project-wide
/// list, sorted by order. Callers push them back after editing.
pub fn take_worksheet_columns(all: &mut Vec<Column>, worksheet_id: Uuid) -> Vec<Column> {
    let (mut local, others): (Vec<Column>, Vec<Column>) = std::mem::take(all)
        .into_iter()
        .partition(|c| c.worksheet_id == worksheet_id);
    *all = others;
    sort_by_order(&mut local);
    local
}
