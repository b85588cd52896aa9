use hexen_primitives::{ByteBuffer, CaretPosition, SelectionRange};

use super::*;
use crate::command::{CommandKind, CommandPhase, Operation};

fn view(position: u64) -> ViewSnapshot {
	ViewSnapshot::new(CaretPosition::at(position), SelectionRange::point(position))
}

fn command(kind: CommandKind, operation: Operation) -> EditCommand {
	EditCommand::new(kind, operation, view(0), view(1))
}

#[test]
fn undo_redo_cycle() {
	let mut store = ByteBuffer::from(b"abc".to_vec());
	let mut log = UndoLog::default();

	log.execute(command(CommandKind::Paste, Operation::insert(3, b"d".to_vec())), &mut store)
		.unwrap();
	assert!(log.can_undo());
	assert!(!log.can_redo());
	assert!(log.is_modified());

	assert_eq!(log.undo(&mut store).unwrap(), Some(view(0)));
	assert_eq!(store.as_slice(), b"abc");
	assert!(!log.is_modified());

	assert_eq!(log.redo(&mut store).unwrap(), Some(view(1)));
	assert_eq!(store.as_slice(), b"abcd");
	assert_eq!(log.redo(&mut store).unwrap(), None);
}

#[test]
fn cursor_commands_follow_position() {
	let mut store = ByteBuffer::from(b"ab".to_vec());
	let mut log = UndoLog::default();
	assert!(log.undo_command().is_none());
	assert!(log.redo_command().is_none());

	log.execute(command(CommandKind::Delete, Operation::remove(0, 1)), &mut store)
		.unwrap();
	assert_eq!(log.undo_command().map(EditCommand::kind), Some(CommandKind::Delete));
	assert!(log.redo_command().is_none());

	log.undo(&mut store).unwrap();
	assert!(log.undo_command().is_none());
	assert_eq!(log.redo_command().map(EditCommand::phase), Some(CommandPhase::Reverted));
}

#[test]
fn undo_on_empty_log_is_none() {
	let mut store = ByteBuffer::new();
	let mut log = UndoLog::default();
	assert_eq!(log.undo(&mut store).unwrap(), None);
}

#[test]
fn new_command_truncates_redo_tail() {
	let mut store = ByteBuffer::from(b"ab".to_vec());
	let mut log = UndoLog::default();
	log.execute(command(CommandKind::Delete, Operation::remove(0, 1)), &mut store)
		.unwrap();
	log.execute(command(CommandKind::Delete, Operation::remove(0, 1)), &mut store)
		.unwrap();
	log.undo(&mut store).unwrap();
	assert!(log.can_redo());

	log.execute(command(CommandKind::Paste, Operation::insert(1, b"z".to_vec())), &mut store)
		.unwrap();
	assert!(!log.can_redo());
	assert_eq!(log.len(), 2);
	assert_eq!(store.as_slice(), b"bz");
}

#[test]
fn typing_run_coalesces_until_break() {
	let mut store = ByteBuffer::from(b"ab".to_vec());
	let mut log = UndoLog::default();

	assert!(
		!log.execute(command(CommandKind::EditChar, Operation::insert(2, b"c".to_vec())), &mut store)
			.unwrap()
	);
	assert!(
		log.execute(command(CommandKind::EditChar, Operation::insert(3, b"d".to_vec())), &mut store)
			.unwrap()
	);
	assert_eq!(log.len(), 1);

	log.break_sequence();
	assert!(
		!log.execute(command(CommandKind::EditChar, Operation::insert(4, b"e".to_vec())), &mut store)
			.unwrap()
	);
	assert_eq!(log.len(), 2);

	log.undo(&mut store).unwrap();
	log.undo(&mut store).unwrap();
	assert_eq!(store.as_slice(), b"ab");
}

#[test]
fn sync_point_blocks_coalescing() {
	let mut store = ByteBuffer::from(b"ab".to_vec());
	let mut log = UndoLog::default();
	log.execute(command(CommandKind::EditChar, Operation::modify(0, b"x".to_vec())), &mut store)
		.unwrap();
	log.mark_synced();
	assert!(!log.is_modified());

	log.execute(command(CommandKind::EditChar, Operation::modify(1, b"y".to_vec())), &mut store)
		.unwrap();
	assert_eq!(log.len(), 2);
	assert!(log.is_modified());

	log.undo(&mut store).unwrap();
	assert!(!log.is_modified());
}

#[test]
fn undo_closes_sequence() {
	let mut store = ByteBuffer::from(b"ab".to_vec());
	let mut log = UndoLog::default();
	log.execute(command(CommandKind::EditChar, Operation::modify(0, b"x".to_vec())), &mut store)
		.unwrap();
	log.undo(&mut store).unwrap();
	log.redo(&mut store).unwrap();
	log.execute(command(CommandKind::EditChar, Operation::modify(1, b"y".to_vec())), &mut store)
		.unwrap();
	assert_eq!(log.len(), 2);
}

#[test]
fn eviction_respects_limit_and_shifts_sync() {
	let mut store = ByteBuffer::new();
	let mut log = UndoLog::new(3);
	for i in 0..5u8 {
		log.execute(command(CommandKind::Paste, Operation::insert(u64::from(i), vec![i])), &mut store)
			.unwrap();
		if i == 2 {
			log.mark_synced();
		}
	}

	assert_eq!(log.len(), 3);
	assert_eq!(log.position(), 3);
	assert_eq!(log.sync_position(), Some(1));

	log.undo(&mut store).unwrap();
	log.undo(&mut store).unwrap();
	assert!(!log.is_modified());
	log.undo(&mut store).unwrap();
	assert!(!log.can_undo());
	assert_eq!(store.as_slice(), &[0, 1]);
}

#[test]
fn evicting_the_synced_state_loses_it() {
	let mut store = ByteBuffer::new();
	let mut log = UndoLog::new(2);
	for i in 0..3u8 {
		log.execute(command(CommandKind::Paste, Operation::insert(0, vec![i])), &mut store)
			.unwrap();
	}
	assert_eq!(log.sync_position(), None);
	assert!(log.is_modified());
}

#[test]
fn truncating_past_sync_loses_it() {
	let mut store = ByteBuffer::from(b"abc".to_vec());
	let mut log = UndoLog::default();
	log.execute(command(CommandKind::Delete, Operation::remove(0, 1)), &mut store)
		.unwrap();
	log.mark_synced();
	log.undo(&mut store).unwrap();
	log.execute(command(CommandKind::Delete, Operation::remove(2, 1)), &mut store)
		.unwrap();
	assert_eq!(log.sync_position(), None);
}

#[test]
fn failed_command_is_not_recorded() {
	let mut store = ByteBuffer::from(b"ab".to_vec());
	let mut log = UndoLog::default();
	let err = log
		.execute(command(CommandKind::Delete, Operation::remove(1, 4)), &mut store)
		.unwrap_err();
	assert!(matches!(err, crate::error::EditError::Data(_)));
	assert!(log.is_empty());
	assert!(!log.is_modified());
}

#[test]
fn clear_resets_everything() {
	let mut store = ByteBuffer::from(b"ab".to_vec());
	let mut log = UndoLog::default();
	log.execute(command(CommandKind::Delete, Operation::remove(0, 1)), &mut store)
		.unwrap();
	log.clear();
	assert!(log.is_empty());
	assert!(!log.can_undo());
	assert!(!log.is_modified());
}
