//! Abstract input routing.
//!
//! Hosts translate toolkit key and mouse events into [`InputEvent`]s; the
//! mapping from physical keys is theirs to choose.

use hexen_primitives::{ByteStore, MovementDirection, ScrollingDirection, SelectingMode};
use tracing::debug;

use super::CodeArea;
use crate::error::Result;

/// Toolkit-independent input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
	/// Caret movement, optionally extending the selection.
	Move {
		direction: MovementDirection,
		selecting: SelectingMode,
	},
	/// Press at a cell of the data area.
	Click {
		row: u64,
		column: u32,
		selecting: SelectingMode,
	},
	/// Printable character.
	Typed(char),
	Backspace,
	Delete,
	Copy,
	CopyAsCode,
	Cut,
	Paste,
	PasteFromCode,
	Undo,
	Redo,
	SelectAll,
	ToggleEditOperation,
	Scroll(ScrollingDirection),
	CenterOnCaret,
}

impl<S: ByteStore> CodeArea<S> {
	/// Routes `event` to the matching operation.
	///
	/// Returns true if the event changed something. Rejected edits are logged
	/// and reported as unhandled rather than surfaced, since key handling has
	/// nobody to report to.
	pub fn handle_input(&mut self, event: InputEvent) -> bool {
		match self.dispatch(event) {
			Ok(handled) => handled,
			Err(err) => {
				debug!(?event, %err, "code_area.input_rejected");
				false
			}
		}
	}

	fn dispatch(&mut self, event: InputEvent) -> Result<bool> {
		match event {
			InputEvent::Move { direction, selecting } => Ok(self.move_caret(direction, selecting)),
			InputEvent::Click { row, column, selecting } => {
				let before = (self.caret, self.selection);
				self.move_caret_to_point(row, column, selecting);
				Ok(before != (self.caret, self.selection))
			}
			InputEvent::Typed(c) => self.key_typed(c).map(|()| true),
			InputEvent::Backspace => self.backspace().map(|()| true),
			InputEvent::Delete => self.delete().map(|()| true),
			InputEvent::Copy => self.copy(),
			InputEvent::CopyAsCode => self.copy_as_code(),
			InputEvent::Cut => self.cut(),
			InputEvent::Paste => self.paste(),
			InputEvent::PasteFromCode => self.paste_from_code(),
			InputEvent::Undo => self.undo(),
			InputEvent::Redo => self.redo(),
			InputEvent::SelectAll => {
				let before = self.selection;
				self.select_all();
				Ok(before != self.selection)
			}
			InputEvent::ToggleEditOperation => {
				if !self.config.edit_mode.allows_size_change() {
					return Ok(false);
				}
				self.toggle_edit_operation();
				Ok(true)
			}
			InputEvent::Scroll(direction) => Ok(self.scroll(direction)),
			InputEvent::CenterOnCaret => Ok(self.center_on_caret()),
		}
	}
}
