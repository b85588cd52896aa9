use super::*;

#[test]
fn forward_range() {
	let r = SelectionRange::new(4, 9);
	assert_eq!(r.first(), 4);
	assert_eq!(r.last(), 8);
	assert_eq!(r.length(), 5);
	assert!(!r.is_empty());
}

#[test]
fn backward_range_sorts_endpoints() {
	let r = SelectionRange::new(9, 4);
	assert_eq!(r.first(), 4);
	assert_eq!(r.last(), 8);
	assert_eq!(r.anchor, 9);
	assert_eq!(r.active, 4);
}

#[test]
fn empty_range_selects_nothing() {
	let r = SelectionRange::point(7);
	assert!(r.is_empty());
	assert!(!r.contains(7));
	assert_eq!(r.length(), 0);
}

#[test]
fn contains_is_inclusive_of_last() {
	let r = SelectionRange::new(4, 9);
	assert!(!r.contains(3));
	assert!(r.contains(4));
	assert!(r.contains(8));
	assert!(!r.contains(9));
}

#[test]
fn extend_from_collapsed_anchors_at_caret() {
	let r = SelectionRange::point(0).extend_to(5, 6);
	assert_eq!(r, SelectionRange::new(5, 6));

	let r = SelectionRange::new(5, 6).extend_to(6, 3);
	assert_eq!(r, SelectionRange::new(5, 3));
}

#[test]
fn clamp_limits_both_ends() {
	let r = SelectionRange::new(12, 30).clamp(20);
	assert_eq!(r, SelectionRange::new(12, 20));
	assert!(SelectionRange::new(25, 30).clamp(20).is_empty());
}
