//! Typing, deletion, and undo/redo.
//!
//! Each edit builds one [`Operation`], wraps it in an [`EditCommand`] with the
//! caret and selection on either side, and hands it to the undo log. Checks
//! run before the command is built, so a rejected edit leaves the data, the
//! view, and the history untouched.

use hexen_primitives::{ByteStore, CaretPosition, EditMode, EditOperation, Section, SelectionRange};
use tracing::debug;

use super::CodeArea;
use crate::command::{CommandKind, EditCommand, Operation};
use crate::error::{EditError, ReadOnlyReason, Result};
use crate::listeners::Changes;
use crate::undo::ViewSnapshot;

/// What to do with bytes that do not fit the size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Overflow {
	/// Reject the whole edit.
	Reject,
	/// Drop the bytes beyond the limit.
	Truncate,
}

impl<S: ByteStore> CodeArea<S> {
	/// Handles a typed character in the caret's section.
	///
	/// In the code matrix `c` must be a digit of the code type; it replaces
	/// the digit under the caret, or starts a new byte when inserting at a
	/// byte boundary. In the preview `c` is encoded through the charset.
	/// A non-empty selection is deleted first when the edit mode allows it.
	pub fn key_typed(&mut self, c: char) -> Result<()> {
		self.check_editable()?;
		match self.caret.section {
			Section::CodeMatrix => self.type_digit(c),
			Section::TextPreview => self.type_char(c),
		}
	}

	fn type_digit(&mut self, c: char) -> Result<()> {
		let code_type = self.config.code_type;
		let digit = code_type.digit_value(c).ok_or(EditError::InvalidDigit(c, code_type))?;
		self.clear_selection_for_typing()?;

		let CaretPosition {
			data_position: position,
			code_offset,
			section,
		} = self.caret;
		let size = self.data.size();
		let starts_byte = position == size || (self.active_operation() == EditOperation::Insert && code_offset == 0);
		let operation = if starts_byte {
			self.growth_allowance(size, 1, Overflow::Reject)?;
			Operation::Insert {
				position,
				code_offset,
				data: vec![code_type.set_digit(0, code_offset, digit)],
			}
		} else {
			let byte = self.data.byte(position)?;
			Operation::modify(position, vec![code_type.set_digit(byte, code_offset, digit)])
		};

		let next = if code_offset + 1 < code_type.max_digits_for_byte() {
			CaretPosition::new(position, code_offset + 1, section)
		} else {
			CaretPosition::new(position + 1, 0, section)
		};
		self.execute_edit(CommandKind::EditCode, operation, next)
	}

	fn type_char(&mut self, c: char) -> Result<()> {
		let charset = self.config.charset;
		let encoded = charset.encode_char(c).ok_or(EditError::Unencodable(c, charset))?;
		self.clear_selection_for_typing()?;

		let position = self.caret.data_position;
		let (operation, written) = self.write_operation(
			self.data.size(),
			position,
			encoded.to_vec(),
			self.active_operation(),
			Overflow::Reject,
		)?;
		let next = CaretPosition::new(position + written, 0, self.caret.section);
		self.execute_edit(CommandKind::EditChar, operation, next)
	}

	fn clear_selection_for_typing(&mut self) -> Result<()> {
		if self.selection.is_empty() {
			return Ok(());
		}
		if self.config.edit_mode.allows_size_change() {
			self.delete_selection()
		} else {
			self.set_selection_state(SelectionRange::point(self.caret.data_position));
			Ok(())
		}
	}

	/// Removes the byte under the caret, or the selection if there is one.
	pub fn delete(&mut self) -> Result<()> {
		self.check_editable()?;
		if !self.selection.is_empty() {
			return self.delete_selection();
		}
		self.check_shrink()?;
		let position = self.caret.data_position;
		if position >= self.data.size() {
			return Err(EditError::NothingToDelete);
		}
		let next = CaretPosition::new(position, 0, self.caret.section);
		self.execute_edit(CommandKind::Delete, Operation::remove(position, 1), next)
	}

	/// Removes the byte before the caret, or the selection if there is one.
	pub fn backspace(&mut self) -> Result<()> {
		self.check_editable()?;
		if !self.selection.is_empty() {
			return self.delete_selection();
		}
		self.check_shrink()?;
		let Some(position) = self.caret.data_position.checked_sub(1) else {
			return Err(EditError::NothingToDelete);
		};
		let next = CaretPosition::new(position, 0, self.caret.section);
		self.execute_edit(CommandKind::Delete, Operation::remove(position, 1), next)
	}

	/// Removes the selected bytes and collapses the selection at its start.
	pub fn delete_selection(&mut self) -> Result<()> {
		self.remove_selection(CommandKind::DeleteSelection)
	}

	pub(super) fn remove_selection(&mut self, kind: CommandKind) -> Result<()> {
		self.check_editable()?;
		if self.selection.is_empty() {
			return Err(EditError::NothingToDelete);
		}
		self.check_shrink()?;
		let first = self.selection.first();
		let operation = Operation::remove(first, self.selection.length());
		let next = CaretPosition::new(first, 0, self.caret.section);
		self.execute_edit(kind, operation, next)
	}

	/// Reverts the last edit; returns false if there is nothing to undo.
	pub fn undo(&mut self) -> Result<bool> {
		self.check_editable()?;
		let store = self
			.data
			.as_editable()
			.ok_or(EditError::NotEditable(ReadOnlyReason::ReadOnlyData))?;
		let Some(view) = self.undo.undo(store)? else {
			return Ok(false);
		};
		debug!(position = self.undo.position(), "code_area.undo");
		self.pending |= Changes::DATA;
		self.restore_view(view);
		self.commit();
		Ok(true)
	}

	/// Re-applies the last undone edit; returns false if there is nothing to redo.
	pub fn redo(&mut self) -> Result<bool> {
		self.check_editable()?;
		let store = self
			.data
			.as_editable()
			.ok_or(EditError::NotEditable(ReadOnlyReason::ReadOnlyData))?;
		let Some(view) = self.undo.redo(store)? else {
			return Ok(false);
		};
		debug!(position = self.undo.position(), "code_area.redo");
		self.pending |= Changes::DATA;
		self.restore_view(view);
		self.commit();
		Ok(true)
	}

	/// Closes the current typing run so the next edit starts a new undo entry.
	pub fn undo_sequence_break(&mut self) {
		self.undo.break_sequence();
	}

	/// Fails unless both the edit mode and the store permit modification.
	pub(super) fn check_editable(&mut self) -> Result<()> {
		if !self.config.edit_mode.is_editable() {
			return Err(EditError::NotEditable(ReadOnlyReason::EditMode));
		}
		if self.data.as_editable().is_none() {
			return Err(EditError::NotEditable(ReadOnlyReason::ReadOnlyData));
		}
		Ok(())
	}

	pub(super) fn check_shrink(&self) -> Result<()> {
		if self.config.edit_mode.allows_size_change() {
			Ok(())
		} else {
			Err(EditError::SizeChangeNotAllowed)
		}
	}

	/// Returns how many of `added` new bytes may be appended to data of `size` bytes.
	pub(super) fn growth_allowance(&self, size: u64, added: u64, overflow: Overflow) -> Result<u64> {
		let allowed = added.min(self.config.growth_room(size));
		if allowed < added && overflow == Overflow::Reject {
			return Err(match (self.config.edit_mode, self.config.capacity) {
				(EditMode::Capped, Some(capacity)) => EditError::CapacityExceeded { capacity },
				_ => EditError::SizeChangeNotAllowed,
			});
		}
		Ok(allowed)
	}

	/// Builds the operation writing `bytes` at `position` into data of `size` bytes.
	///
	/// Overwrite replaces existing bytes and appends the rest past the end.
	/// Returns the operation with the number of bytes it writes.
	pub(super) fn write_operation(
		&self,
		size: u64,
		position: u64,
		mut bytes: Vec<u8>,
		edit_operation: EditOperation,
		overflow: Overflow,
	) -> Result<(Operation, u64)> {
		let overwritten = match edit_operation {
			EditOperation::Insert => 0,
			EditOperation::Overwrite => (bytes.len() as u64).min(size.saturating_sub(position)),
		};
		let mut tail = bytes.split_off(overwritten as usize);
		let appended = self.growth_allowance(size, tail.len() as u64, overflow)?;
		tail.truncate(appended as usize);

		let mut operations = Vec::with_capacity(2);
		if !bytes.is_empty() {
			operations.push(Operation::modify(position, bytes));
		}
		if !tail.is_empty() {
			operations.push(Operation::insert(position + overwritten, tail));
		}
		Ok((Operation::compound(operations), overwritten + appended))
	}

	/// Executes and records an edit, then moves the caret to `next` with an empty selection.
	pub(super) fn execute_edit(&mut self, kind: CommandKind, operation: Operation, next: CaretPosition) -> Result<()> {
		let before = ViewSnapshot::new(self.caret, self.selection);
		let after = ViewSnapshot::new(next, SelectionRange::point(next.data_position));
		let command = EditCommand::new(kind, operation, before, after);

		let store = self
			.data
			.as_editable()
			.ok_or(EditError::NotEditable(ReadOnlyReason::ReadOnlyData))?;
		let appended = self.undo.execute(command, store)?;
		debug!(?kind, appended, size = self.data.size(), "code_area.edit");

		self.pending |= Changes::DATA;
		self.restore_view(after);
		self.commit();
		Ok(())
	}
}
