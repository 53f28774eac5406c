use super::*;

#[test]
fn start_is_origin() {
    assert_eq!(Position::START, Position::new(0, 0));
    assert_eq!(Position::default(), Position::START);
}

#[test]
fn display_uses_line_column_marker() {
    assert_eq!(Position::new(3, 14).to_string(), "L3:14");
    assert_eq!(format!("{:?}", Position::new(3, 14)), "(3, 14)");
}

#[test]
fn one_based_shifts_both_axes() {
    assert_eq!(Position::new(0, 0).one_based(), (1, 1));
    assert_eq!(Position::new(9, 4).one_based(), (10, 5));
    assert_eq!(Position::new(u32::MAX, 0).one_based(), (u32::MAX, 1));
}

#[test]
fn ordering_is_line_major() {
    assert!(Position::new(0, 50) < Position::new(1, 0));
    assert!(Position::new(2, 3) < Position::new(2, 4));
}

#[test]
fn from_tuple() {
    assert_eq!(Position::from((7, 2)), Position::new(7, 2));
}
