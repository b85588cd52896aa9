//! Copy, cut, and paste.

use hexen_primitives::{ByteStore, CaretPosition, EditOperation};
use tracing::debug;

use super::CodeArea;
use super::editing::Overflow;
use crate::clipboard::{Clipboard, ClipboardData, decode_code_text, encode_code_text};
use crate::command::{CommandKind, Operation};
use crate::error::{EditError, Result};

impl<S: ByteStore> CodeArea<S> {
	pub fn clipboard(&self) -> &dyn Clipboard {
		self.clipboard.as_ref()
	}

	fn selected_bytes(&self) -> Result<Option<Vec<u8>>> {
		if self.selection.is_empty() {
			return Ok(None);
		}
		let bytes = self.data.read_vec(self.selection.first(), self.selection.length())?;
		Ok(Some(bytes))
	}

	/// Copies the selection as binary plus charset-decoded text.
	///
	/// Returns false if nothing is selected.
	pub fn copy(&mut self) -> Result<bool> {
		let Some(bytes) = self.selected_bytes()? else {
			return Ok(false);
		};
		let text = self.config.charset.decode(&bytes);
		debug!(length = bytes.len(), "code_area.copy");
		self.clipboard.set_contents(ClipboardData::new(bytes, text));
		Ok(true)
	}

	/// Copies the selection as binary plus its digits as text.
	pub fn copy_as_code(&mut self) -> Result<bool> {
		let Some(bytes) = self.selected_bytes()? else {
			return Ok(false);
		};
		let text = encode_code_text(&bytes, self.config.code_type, self.config.code_characters_case);
		debug!(length = bytes.len(), "code_area.copy_as_code");
		self.clipboard.set_contents(ClipboardData::new(bytes, text));
		Ok(true)
	}

	/// Copies and then deletes the selection.
	pub fn cut(&mut self) -> Result<bool> {
		if self.selection.is_empty() {
			return Ok(false);
		}
		self.check_editable()?;
		self.check_shrink()?;
		self.copy()?;
		self.remove_selection(CommandKind::Cut)?;
		Ok(true)
	}

	/// Returns true if the data is editable and the clipboard offers contents.
	pub fn can_paste(&self) -> bool {
		self.config.edit_mode.is_editable() && self.clipboard.has_contents()
	}

	/// Pastes clipboard contents at the caret, replacing the selection.
	///
	/// The binary flavor is used when present, otherwise the text is encoded
	/// through the charset. Returns false if nothing was written.
	pub fn paste(&mut self) -> Result<bool> {
		let Some(contents) = self.clipboard.contents() else {
			return Ok(false);
		};
		let bytes = match contents.binary {
			Some(binary) => binary,
			None => self.config.charset.encode(&contents.text),
		};
		self.paste_bytes(bytes)
	}

	/// Pastes clipboard text parsed as digit groups of the current code type.
	pub fn paste_from_code(&mut self) -> Result<bool> {
		let Some(contents) = self.clipboard.contents() else {
			return Ok(false);
		};
		let code_type = self.config.code_type;
		let bytes = decode_code_text(&contents.text, code_type).ok_or(EditError::InvalidCodeText(code_type))?;
		self.paste_bytes(bytes)
	}

	/// Writes `bytes` at the caret as one undoable command.
	///
	/// A selection is removed first when the size may change; the bytes then
	/// go in at its start under the active edit operation, so overwriting
	/// replaces what followed the selection and only the remainder past the
	/// end is inserted. Without size change they overwrite from the start of
	/// the selection. Bytes beyond the size limit are dropped.
	fn paste_bytes(&mut self, bytes: Vec<u8>) -> Result<bool> {
		self.check_editable()?;
		if bytes.is_empty() {
			return Ok(false);
		}

		let mut size = self.data.size();
		let mut position = self.caret.data_position;
		let mut edit_operation = self.active_operation();
		let mut operations = Vec::with_capacity(3);
		if !self.selection.is_empty() {
			position = self.selection.first();
			if self.config.edit_mode.allows_size_change() {
				let length = self.selection.length();
				operations.push(Operation::remove(position, length));
				size -= length;
			} else {
				edit_operation = EditOperation::Overwrite;
			}
		}

		let (write, written) = self.write_operation(size, position, bytes, edit_operation, Overflow::Truncate)?;
		if written == 0 && operations.is_empty() {
			return Ok(false);
		}
		match write {
			_ if written == 0 => {}
			Operation::Compound(parts) => operations.extend(parts),
			write => operations.push(write),
		}

		let next = CaretPosition::new(position + written, 0, self.caret.section);
		self.execute_edit(CommandKind::Paste, Operation::compound(operations), next)?;
		Ok(true)
	}
}
