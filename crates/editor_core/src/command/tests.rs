use hexen_primitives::{ByteBuffer, CaretPosition, DataError, SelectionRange};
use proptest::prelude::*;

use super::*;

fn buffer(data: &[u8]) -> ByteBuffer {
	ByteBuffer::from(data)
}

fn view(position: u64) -> ViewSnapshot {
	ViewSnapshot::new(CaretPosition::at(position), SelectionRange::point(position))
}

fn executed(kind: CommandKind, operation: Operation, store: &mut ByteBuffer) -> EditCommand {
	let mut command = EditCommand::new(kind, operation, view(0), view(0));
	command.execute(store).unwrap();
	command
}

#[test]
fn insert_inverse_is_remove() {
	let mut store = buffer(b"abcd");
	let inverse = Operation::insert(2, b"XY".to_vec()).execute(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"abXYcd");
	assert_eq!(inverse, Operation::remove(2, 2));

	inverse.execute(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"abcd");
}

#[test]
fn remove_captures_bytes_before_removing() {
	let mut store = buffer(b"abcdef");
	let inverse = Operation::remove(1, 3).execute(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"aef");
	assert_eq!(inverse, Operation::insert(1, b"bcd".to_vec()));
}

#[test]
fn modify_snapshots_previous_bytes() {
	let mut store = buffer(b"abcd");
	let inverse = Operation::modify(1, b"ZZ".to_vec()).execute(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"aZZd");
	assert_eq!(inverse, Operation::modify(1, b"bc".to_vec()));
}

#[test]
fn compound_inverse_runs_in_reverse() {
	let mut store = buffer(b"abcdef");
	let forward = Operation::Compound(vec![
		Operation::remove(1, 2),
		Operation::modify(1, b"Q".to_vec()),
		Operation::insert(2, b"RS".to_vec()),
	]);
	let inverse = forward.execute(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"aQRSef");

	inverse.execute(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"abcdef");
}

#[test]
fn failing_compound_rolls_back() {
	let mut store = buffer(b"abcd");
	let forward = Operation::Compound(vec![Operation::insert(0, b"X".to_vec()), Operation::remove(3, 10)]);
	let err = forward.execute(&mut store).unwrap_err();
	assert!(matches!(err, DataError::OutOfBounds { .. }));
	assert_eq!(store.as_slice(), b"abcd");
}

#[test]
fn out_of_bounds_remove_leaves_store_untouched() {
	let mut store = buffer(b"ab");
	let err = Operation::remove(1, 5).execute(&mut store).unwrap_err();
	assert!(matches!(err, DataError::OutOfBounds { .. }));
	assert_eq!(store.as_slice(), b"ab");
}

#[test]
fn compound_constructor_collapses_single_child() {
	assert_eq!(
		Operation::compound(vec![Operation::remove(0, 1)]),
		Operation::remove(0, 1)
	);
	assert!(Operation::compound(Vec::new()).is_noop());
}

#[test]
fn lifecycle_round_trip() {
	let mut store = buffer(b"0123");
	let mut command = EditCommand::new(
		CommandKind::Paste,
		Operation::insert(4, b"45".to_vec()),
		view(4),
		view(6),
	);
	assert_eq!(command.phase(), CommandPhase::Created);

	command.execute(&mut store).unwrap();
	assert_eq!(command.phase(), CommandPhase::Executed);
	assert_eq!(store.as_slice(), b"012345");

	command.undo(&mut store).unwrap();
	assert_eq!(command.phase(), CommandPhase::Reverted);
	assert_eq!(store.as_slice(), b"0123");

	command.redo(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"012345");
	assert_eq!(command.before(), view(4));
	assert_eq!(command.after(), view(6));
}

#[test]
#[should_panic(expected = "cannot execute")]
fn double_execute_panics() {
	let mut store = buffer(b"ab");
	let mut command = executed(CommandKind::Delete, Operation::remove(0, 1), &mut store);
	let _ = command.execute(&mut store);
}

#[test]
#[should_panic(expected = "cannot redo")]
fn redo_before_undo_panics() {
	let mut store = buffer(b"ab");
	let mut command = executed(CommandKind::Delete, Operation::remove(0, 1), &mut store);
	let _ = command.redo(&mut store);
}

#[test]
fn adjacent_inserts_merge() {
	let mut store = buffer(b"ab");
	let mut first = executed(CommandKind::EditChar, Operation::insert(1, b"X".to_vec()), &mut store);
	let second = executed(CommandKind::EditChar, Operation::insert(2, b"Y".to_vec()), &mut store);
	first.try_append(second).unwrap();

	assert_eq!(first.operation(), &Operation::insert(1, b"XY".to_vec()));
	first.undo(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"ab");
}

#[test]
fn modify_inside_insert_patches_payload() {
	let mut store = buffer(b"ab");
	let mut first = executed(CommandKind::EditCode, Operation::insert(2, vec![0x10]), &mut store);
	let second = executed(CommandKind::EditCode, Operation::modify(2, vec![0x1f]), &mut store);
	first.try_append(second).unwrap();

	assert_eq!(first.operation(), &Operation::insert(2, vec![0x1f]));
	first.undo(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"ab");
}

#[test]
fn consecutive_modifies_keep_original_bytes() {
	let mut store = buffer(&[0x00, 0x11, 0x22]);
	let mut first = executed(CommandKind::EditCode, Operation::modify(0, vec![0xa0]), &mut store);
	for operation in [Operation::modify(0, vec![0xab]), Operation::modify(1, vec![0xc1])] {
		let next = executed(CommandKind::EditCode, operation, &mut store);
		first.try_append(next).unwrap();
	}

	assert_eq!(first.operation(), &Operation::modify(0, vec![0xab, 0xc1]));
	first.undo(&mut store).unwrap();
	assert_eq!(store.as_slice(), &[0x00, 0x11, 0x22]);
}

#[test]
fn disjoint_operations_become_compound() {
	let mut store = buffer(b"abcdef");
	let mut first = executed(CommandKind::EditChar, Operation::modify(0, b"X".to_vec()), &mut store);
	let second = executed(CommandKind::EditChar, Operation::insert(6, b"Y".to_vec()), &mut store);
	first.try_append(second).unwrap();

	assert!(matches!(first.operation(), Operation::Compound(ops) if ops.len() == 2));
	assert_eq!(store.as_slice(), b"XbcdefY");
	first.undo(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"abcdef");
	first.redo(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"XbcdefY");
}

#[test]
fn non_appendable_kinds_refuse() {
	let mut store = buffer(b"abcd");
	let mut first = executed(CommandKind::Delete, Operation::remove(0, 1), &mut store);
	let second = executed(CommandKind::Delete, Operation::remove(0, 1), &mut store);
	assert!(first.try_append(second).is_err());

	let mut typed = executed(CommandKind::EditChar, Operation::modify(0, b"Z".to_vec()), &mut store);
	let code = executed(CommandKind::EditCode, Operation::modify(0, vec![1]), &mut store);
	assert!(typed.try_append(code).is_err());
}

fn arb_operation(size: u64) -> impl Strategy<Value = Operation> {
	let insert = (0..=size, proptest::collection::vec(any::<u8>(), 1..4))
		.prop_map(|(position, data)| Operation::insert(position, data));
	let remove = (0..size.max(1), 1..4u64).prop_map(move |(position, length)| {
		Operation::remove(position.min(size), length.min(size - position.min(size)))
	});
	let modify = (0..size.max(1), proptest::collection::vec(any::<u8>(), 1..4)).prop_map(move |(position, data)| {
		let position = position.min(size);
		let length = (data.len() as u64).min(size - position) as usize;
		Operation::modify(position, data[..length].to_vec())
	});
	prop_oneof![insert, remove, modify]
}

proptest! {
	#[test]
	fn execute_then_inverse_restores(
		data in proptest::collection::vec(any::<u8>(), 16..32),
		operation in arb_operation(16),
	) {
		let mut store = buffer(&data);
		let inverse = operation.execute(&mut store).unwrap();
		inverse.execute(&mut store).unwrap();
		prop_assert_eq!(store.as_slice(), data.as_slice());
	}
}
