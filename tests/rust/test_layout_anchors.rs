use super::*;

#[test]
fn test_default_table_entries() {
    let table = AnchorTable::default();
    assert_eq!(table.len(), 7);
    assert_eq!(table.cell(0, 4), GridCell::new(0, 0));
    assert_eq!(table.cell(4, 4), GridCell::new(3, 0));
    assert_eq!(table.cell(5, 4), GridCell::new(3, 3));
    assert_eq!(table.cell(6, 4), GridCell::new(2, 1));
}

#[test]
fn test_fallback_past_table_end() {
    let table = AnchorTable::default();
    for i in table.len()..40 {
        assert_eq!(table.cell(i, 4), GridCell::new(i % 4, i / 4));
    }
}

#[test]
fn test_fallback_is_reproducible() {
    let table = AnchorTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.cell(9, 4), table.cell(9, 4));
    assert_eq!(table.cell(9, 4), GridCell::new(1, 2));
}

#[test]
fn test_fallback_zero_columns_does_not_panic() {
    assert_eq!(fallback_cell(3, 0), GridCell::new(0, 3));
}

#[test]
fn test_table_json_is_plain_array() {
    let table: AnchorTable = serde_json::from_str(r#"[{"col": 2, "row": 1}]"#).unwrap();
    assert_eq!(table.cells(), &[GridCell::new(2, 1)]);
    assert_eq!(table.cell(1, 4), GridCell::new(1, 0));
}
