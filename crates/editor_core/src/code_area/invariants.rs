//! Machine-checkable invariant proofs for the code area.
//!
//! Each invariant is expressed as a `pub(crate) fn test_*()` that is both a
//! runnable test and a link target for the facade docs.

use hexen_primitives::{ByteBuffer, CaretPosition, EditMode, MovementDirection, Section, SelectingMode, SelectionRange};

use super::CodeArea;
use crate::command::{CommandKind, EditCommand, Operation};
use crate::config::EditorConfig;
use crate::undo::ViewSnapshot;

fn area(data: &[u8]) -> CodeArea<ByteBuffer> {
	CodeArea::new(ByteBuffer::from(data), EditorConfig::default())
}

/// Invariant: The caret MUST stay within `[0, data_size]` whatever position is requested.
#[cfg_attr(test, test)]
pub(crate) fn test_caret_clamped_to_data() {
	let mut area = area(&[0; 8]);
	for requested in [0, 7, 8, 9, u64::MAX] {
		area.set_caret_position(requested, 5, Section::CodeMatrix);
		assert!(area.caret().data_position <= area.data_size());
		assert!(area.caret().code_offset < 2, "digit must fit the code type");
	}
}

/// Invariant: Shrinking the data MUST re-clamp caret and selection before listeners run.
#[cfg_attr(test, test)]
pub(crate) fn test_shrink_reclamps_before_notify() {
	let mut area = area(&[0; 16]);
	area.set_selection(10, 16);
	area.set_caret_position(16, 0, Section::CodeMatrix);

	let seen = std::rc::Rc::new(std::cell::Cell::new(CaretPosition::default()));
	let s = seen.clone();
	area.listeners_mut().on_caret_moved(move |caret| s.set(*caret));

	area.set_selection(0, 16);
	area.delete_selection().expect("delete selection");
	assert_eq!(area.data_size(), 0);
	assert_eq!(seen.get(), CaretPosition::at(0));
	assert_eq!(area.selection(), SelectionRange::point(0));
}

/// Invariant: A blocked movement MUST NOT mutate caret, selection, or history state.
#[cfg_attr(test, test)]
pub(crate) fn test_blocked_movement_is_noop() {
	let mut area = area(&[1, 2, 3]);
	area.set_selection(0, 2);
	let before = (area.caret(), area.selection());

	assert!(!area.move_caret(MovementDirection::Left, SelectingMode::None));
	assert!(!area.move_caret(MovementDirection::DocStart, SelectingMode::Selecting));
	assert_eq!((area.caret(), area.selection()), before);
}

/// Invariant: Undo MUST restore the data byte-for-byte and the caret exactly.
#[cfg_attr(test, test)]
pub(crate) fn test_undo_round_trip() {
	let original: Vec<u8> = (0..20).collect();
	let mut area = area(&original);
	area.set_caret_position(10, 1, Section::CodeMatrix);
	let caret = area.caret();

	area.key_typed('f').expect("type digit");
	area.key_typed('0').expect("type digit");
	area.backspace().expect("backspace");
	assert_ne!(area.data().as_slice(), original.as_slice());

	while area.undo().expect("undo") {}
	assert_eq!(area.data().as_slice(), original.as_slice());
	assert_eq!(area.caret(), caret);
}

/// Invariant: Commands MUST refuse phase transitions out of order.
#[cfg_attr(test, test)]
pub(crate) fn test_illegal_phase_transition_panics() {
	let mut store = ByteBuffer::from(vec![1, 2]);
	let view = ViewSnapshot::default();
	let mut command = EditCommand::new(CommandKind::Delete, Operation::remove(0, 1), view, view);

	let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
		let _ = command.undo(&mut store);
	}));
	assert!(result.is_err(), "undo before execute did not panic");
}

/// Invariant: A read-only edit mode MUST leave data and history untouched.
#[cfg_attr(test, test)]
pub(crate) fn test_read_only_mode_never_mutates() {
	let mut area = CodeArea::new(
		ByteBuffer::from(vec![1, 2, 3]),
		EditorConfig {
			edit_mode: EditMode::ReadOnly,
			..EditorConfig::default()
		},
	);
	area.set_selection(0, 3);

	assert!(area.key_typed('a').is_err());
	assert!(area.delete().is_err());
	assert!(area.cut().is_err());
	assert_eq!(area.data().as_slice(), &[1, 2, 3]);
	assert!(area.undo_log().is_empty());
}
