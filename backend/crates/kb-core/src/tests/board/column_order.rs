use crate::tests::three_columns;
use crate::{Column, is_contiguous, move_column, renumber, sort_by_order};

use googletest::prelude::*;
use proptest::prelude::*;
use uuid::Uuid;

fn titles(columns: &[Column]) -> Vec<&str> {
    columns.iter().map(|c| c.title.as_str()).collect()
}

#[test]
fn given_last_column_when_moved_to_front_then_orders_rewritten() {
    let mut columns = three_columns(Uuid::new_v4());
    let done = columns[2].id;

    move_column(&mut columns, done, 0).unwrap();

    assert_that!(titles(&columns), elements_are![eq(&"Done"), eq(&"To Do"), eq(&"In Progress")]);
    assert_that!(columns.iter().map(|c| c.order).collect::<Vec<_>>(), elements_are![eq(&0), eq(&1), eq(&2)]);
}

#[test]
fn given_index_past_end_when_moved_then_clamped_to_last() {
    let mut columns = three_columns(Uuid::new_v4());
    let first = columns[0].id;

    move_column(&mut columns, first, 99).unwrap();

    assert_that!(columns[2].id, eq(first));
    assert_that!(is_contiguous(&columns), eq(true));
}

#[test]
fn given_unknown_column_when_moved_then_error() {
    let mut columns = three_columns(Uuid::new_v4());

    let result = move_column(&mut columns, Uuid::new_v4(), 0);

    assert_that!(result, err(anything()));
}

#[test]
fn given_gapped_orders_when_sorted_and_renumbered_then_contiguous() {
    let mut columns = three_columns(Uuid::new_v4());
    columns[0].order = 7;
    columns[1].order = 2;
    columns[2].order = 5;
    assert_that!(is_contiguous(&columns), eq(false));

    sort_by_order(&mut columns);
    renumber(&mut columns);

    assert_that!(titles(&columns), elements_are![eq(&"In Progress"), eq(&"Done"), eq(&"To Do")]);
    assert_that!(is_contiguous(&columns), eq(true));
}

proptest! {
    #[test]
    fn given_any_reorder_sequence_then_orders_stay_contiguous(
        count in 1usize..8,
        moves in proptest::collection::vec((0usize..8, 0usize..10), 0..20),
    ) {
        let worksheet_id = Uuid::new_v4();
        let mut columns: Vec<Column> = (0..count)
            .map(|i| Column::new(worksheet_id, format!("Column {i}"), "#000".into(), i as u32))
            .collect();

        for (from, to) in moves {
            let id = columns[from % count].id;
            move_column(&mut columns, id, to).unwrap();
        }

        prop_assert!(is_contiguous(&columns));
        prop_assert_eq!(columns.len(), count);
    }
}

#[test]
fn given_two_worksheets_when_taking_one_then_other_left_behind() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let mut all = three_columns(first);
    all.extend(three_columns(second));
    all.reverse();

    let taken = crate::take_worksheet_columns(&mut all, first);

    assert_that!(taken, len(eq(3)));
    assert_that!(titles(&taken), elements_are![eq(&"To Do"), eq(&"In Progress"), eq(&"Done")]);
    assert!(all.iter().all(|c| c.worksheet_id == second));
}
