use super::*;

#[test]
fn card_always_has_title_and_body_line() {
    assert_eq!(card_line_classes(0).len(), 2);
    assert_eq!(card_line_classes(2).len(), 2);
}

#[test]
fn card_adds_lines_up_to_four() {
    assert_eq!(card_line_classes(3).len(), 3);
    assert_eq!(card_line_classes(4).len(), 4);
    assert_eq!(card_line_classes(10).len(), 4);
}

#[test]
fn card_title_is_first() {
    assert!(card_line_classes(3)[0].starts_with("skeleton--title"));
}

#[test]
fn first_table_column_is_wider() {
    assert_eq!(table_cell_class(0), "skeleton--line w-32");
    assert_eq!(table_cell_class(1), "skeleton--line w-24");
    assert_eq!(table_cell_class(3), "skeleton--line w-24");
}
