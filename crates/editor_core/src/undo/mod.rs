//! Undo/redo log.
//!
//! The log is a list of executed commands with a cursor: everything before
//! `position` can be undone, everything after it redone. Executing a new
//! command drops the redo tail. A separate sync mark records the position that
//! matches persisted data, which is what [`UndoLog::is_modified`] compares
//! against.
//!
//! Consecutive typing commands coalesce into the top entry while the
//! sequence is open. Undo, redo, an explicit break, syncing, and any
//! non-typing command close it.

use hexen_primitives::{CaretPosition, EditableByteStore, SelectionRange};
use tracing::{debug, trace};

use crate::command::EditCommand;
use crate::config::DEFAULT_MAX_UNDO;
use crate::error::Result;

#[cfg(test)]
mod tests;

/// Caret and selection captured around a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSnapshot {
	pub caret: CaretPosition,
	pub selection: SelectionRange,
}

impl ViewSnapshot {
	pub const fn new(caret: CaretPosition, selection: SelectionRange) -> Self {
		Self { caret, selection }
	}
}

/// Linear command history with a sync mark.
#[derive(Debug)]
pub struct UndoLog {
	commands: Vec<EditCommand>,
	/// Number of commands currently applied.
	position: usize,
	/// Position matching persisted data; `None` once that state is unreachable.
	sync_position: Option<usize>,
	/// Whether the next typing command may coalesce into the top entry.
	sequence_open: bool,
	max_undo: usize,
}

impl Default for UndoLog {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_UNDO)
	}
}

impl UndoLog {
	/// Creates an empty log holding at most `max_undo` commands.
	pub fn new(max_undo: usize) -> Self {
		Self {
			commands: Vec::new(),
			position: 0,
			sync_position: Some(0),
			sequence_open: false,
			max_undo: max_undo.max(1),
		}
	}

	pub fn can_undo(&self) -> bool {
		self.position > 0
	}

	pub fn can_redo(&self) -> bool {
		self.position < self.commands.len()
	}

	/// Returns the number of stored commands, applied or not.
	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Returns the number of applied commands.
	pub fn position(&self) -> usize {
		self.position
	}

	pub fn sync_position(&self) -> Option<usize> {
		self.sync_position
	}

	pub fn max_undo(&self) -> usize {
		self.max_undo
	}

	/// Returns true if the data differs from the last synced state.
	pub fn is_modified(&self) -> bool {
		self.sync_position != Some(self.position)
	}

	/// Returns the command the next undo would revert.
	pub fn undo_command(&self) -> Option<&EditCommand> {
		self.position.checked_sub(1).map(|i| &self.commands[i])
	}

	/// Returns the command the next redo would re-apply.
	pub fn redo_command(&self) -> Option<&EditCommand> {
		self.commands.get(self.position)
	}

	/// Records that the current state matches persisted data.
	pub fn mark_synced(&mut self) {
		self.sync_position = Some(self.position);
		self.sequence_open = false;
	}

	/// Drops all history and treats the current state as synced.
	pub fn clear(&mut self) {
		self.commands.clear();
		self.position = 0;
		self.sync_position = Some(0);
		self.sequence_open = false;
	}

	/// Prevents the next command from coalescing into the top entry.
	pub fn break_sequence(&mut self) {
		self.sequence_open = false;
	}

	/// Changes the depth limit, evicting the oldest commands if needed.
	pub fn set_max_undo(&mut self, max_undo: usize) {
		self.max_undo = max_undo.max(1);
		self.enforce_limit();
	}

	/// Executes `command` and records it, coalescing typing runs.
	///
	/// Returns true if the command was folded into the previous entry. A
	/// command that fails to execute leaves the log untouched.
	pub fn execute(&mut self, mut command: EditCommand, store: &mut dyn EditableByteStore) -> Result<bool> {
		command.execute(store)?;

		let appendable = command.kind().is_appendable();
		let command = if self.can_append() {
			match self.commands[self.position - 1].try_append(command) {
				Ok(()) => {
					trace!(position = self.position, "undo.append");
					return Ok(true);
				}
				Err(command) => command,
			}
		} else {
			command
		};

		self.push(command);
		self.sequence_open = appendable;
		Ok(false)
	}

	fn can_append(&self) -> bool {
		self.sequence_open
			&& self.position > 0
			&& self.position == self.commands.len()
			&& self.sync_position != Some(self.position)
	}

	fn push(&mut self, command: EditCommand) {
		if self.position < self.commands.len() {
			self.commands.truncate(self.position);
			if self.sync_position.is_some_and(|sync| sync > self.position) {
				self.sync_position = None;
			}
		}
		trace!(kind = ?command.kind(), position = self.position, "undo.push");
		self.commands.push(command);
		self.position += 1;
		self.enforce_limit();
	}

	/// Evicts the oldest commands beyond the depth limit.
	fn enforce_limit(&mut self) {
		let excess = self.commands.len().saturating_sub(self.max_undo);
		if excess == 0 {
			return;
		}
		self.commands.drain(..excess);
		self.position = self.position.saturating_sub(excess);
		self.sync_position = self.sync_position.and_then(|sync| sync.checked_sub(excess));
		debug!(evicted = excess, "undo.evict");
	}

	/// Reverts the top applied command.
	///
	/// Returns the view state captured before it ran, or `None` if there is
	/// nothing to undo.
	pub fn undo(&mut self, store: &mut dyn EditableByteStore) -> Result<Option<ViewSnapshot>> {
		self.sequence_open = false;
		let Some(index) = self.position.checked_sub(1) else {
			return Ok(None);
		};
		let command = &mut self.commands[index];
		command.undo(store)?;
		self.position = index;
		trace!(position = self.position, "undo.undo");
		Ok(Some(command.before()))
	}

	/// Re-applies the next reverted command.
	///
	/// Returns the view state captured after it ran, or `None` if there is
	/// nothing to redo.
	pub fn redo(&mut self, store: &mut dyn EditableByteStore) -> Result<Option<ViewSnapshot>> {
		self.sequence_open = false;
		let Some(command) = self.commands.get_mut(self.position) else {
			return Ok(None);
		};
		command.redo(store)?;
		let after = command.after();
		self.position += 1;
		trace!(position = self.position, "undo.redo");
		Ok(Some(after))
	}
}
