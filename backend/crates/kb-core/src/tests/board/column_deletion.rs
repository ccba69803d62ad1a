use crate::absorbing_sibling;
use crate::tests::three_columns;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_middle_column_deleted_then_first_column_absorbs() {
    let columns = three_columns(Uuid::new_v4());

    let target = absorbing_sibling(&columns, columns[1].id);

    assert_that!(target.map(|c| c.status.as_str()), some(eq("to-do")));
}

#[test]
fn given_first_column_deleted_then_next_column_absorbs() {
    let columns = three_columns(Uuid::new_v4());

    let target = absorbing_sibling(&columns, columns[0].id);

    assert_that!(target.map(|c| c.id), some(eq(columns[1].id)));
}

#[test]
fn given_only_column_deleted_then_no_sibling() {
    let columns = three_columns(Uuid::new_v4());
    let single = vec![columns[0].clone()];

    assert_that!(absorbing_sibling(&single, single[0].id), none());
}
