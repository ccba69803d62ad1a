use crate::Column;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_title_with_spaces_when_column_created_then_status_is_slug() {
    let column = Column::new(Uuid::new_v4(), "Ready For QA".into(), "#fff".into(), 0);

    assert_that!(column.status, eq("ready-for-qa"));
}

#[test]
fn given_column_when_serialized_then_uses_camel_case_keys() {
    let worksheet_id = Uuid::new_v4();
    let column = Column::new(worksheet_id, "Done".into(), "#fff".into(), 3);

    let value = serde_json::to_value(&column).unwrap();

    assert_that!(value["worksheetId"].as_str(), some(eq(worksheet_id.to_string().as_str())));
    assert_that!(value["order"].as_u64(), some(eq(3)));
}
