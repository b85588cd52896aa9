//! Caret, selection, and scroll operations.

use hexen_layout::scrolling::max_scroll_position;
use hexen_layout::{compute_center_on_scroll_position, compute_movement, compute_reveal_scroll_position, compute_scrolling};
use hexen_primitives::{
	ByteStore, CaretPosition, MovementDirection, ScrollPosition, ScrollingDirection, Section, SelectingMode,
	SelectionRange,
};
use tracing::trace;

use super::{CodeArea, section_visible};

impl<S: ByteStore> CodeArea<S> {
	/// Moves the caret one step in `direction`.
	///
	/// Returns false, touching nothing, if the caret cannot move. With
	/// [`SelectingMode::Selecting`] the selection grows from its anchor to
	/// the new caret; otherwise it collapses onto the caret.
	pub fn move_caret(&mut self, direction: MovementDirection, selecting: SelectingMode) -> bool {
		let target = compute_movement(&self.structure, self.caret, direction, self.metrics.rows_per_page);
		if target == self.caret {
			return false;
		}
		trace!(?direction, position = target.data_position, "code_area.move");
		self.move_to(target, selecting);
		true
	}

	/// Moves the caret to the cell at (`row`, `column`), as for a mouse click.
	pub fn move_caret_to_point(&mut self, row: u64, column: u32, selecting: SelectingMode) {
		let target = self.structure.caret_position_for_point(row, column);
		self.move_to(target, selecting);
	}

	fn move_to(&mut self, target: CaretPosition, selecting: SelectingMode) {
		let origin = self.caret.data_position;
		self.undo.break_sequence();
		self.set_caret_state(target);

		let position = self.caret.data_position;
		let selection = match selecting {
			SelectingMode::Selecting => self.selection.extend_to(origin, position),
			SelectingMode::None => SelectionRange::point(position),
		};
		self.set_selection_state(selection);
		self.follow_caret();
		self.commit();
	}

	/// Places the caret directly.
	///
	/// The position is clamped to the data; `section` is ignored when the view
	/// mode hides it, and a section switch resets the digit. An empty
	/// selection follows the caret.
	pub fn set_caret_position(&mut self, data_position: u64, code_offset: u32, section: Section) {
		let section = if section_visible(self.config.view_mode, section) {
			section
		} else {
			self.caret.section
		};
		let code_offset = if section == self.caret.section { code_offset } else { 0 };
		self.undo.break_sequence();
		self.set_caret_state(CaretPosition::new(data_position, code_offset, section));
		if self.selection.is_empty() {
			self.set_selection_state(SelectionRange::point(self.caret.data_position));
		}
		self.commit();
	}

	/// Selects `[anchor, active)` in either direction.
	pub fn set_selection(&mut self, anchor: u64, active: u64) {
		self.set_selection_state(SelectionRange::new(anchor, active));
		self.commit();
	}

	pub fn select_all(&mut self) {
		self.set_selection(0, self.data.size());
	}

	/// Collapses the selection onto the caret.
	pub fn clear_selection(&mut self) {
		self.set_selection(self.caret.data_position, self.caret.data_position);
	}

	/// Returns true if the byte at `position` is selected.
	pub fn is_in_selection(&self, position: u64) -> bool {
		self.selection.contains(position)
	}

	/// Scrolls one step; returns false at the document edge.
	pub fn scroll(&mut self, direction: ScrollingDirection) -> bool {
		let scroll = compute_scrolling(&self.structure, &self.metrics, self.scroll, direction);
		if scroll == self.scroll {
			return false;
		}
		self.set_scroll_state(scroll);
		self.commit();
		true
	}

	/// Sets the scroll position, clamped to the document.
	pub fn set_scroll_position(&mut self, scroll: ScrollPosition) {
		let max = max_scroll_position(&self.structure, &self.metrics);
		let mut scroll = scroll;
		if scroll.row_position >= max.row_position {
			scroll.row_position = max.row_position;
			scroll.row_offset = scroll.row_offset.min(0);
		}
		if scroll.char_position >= max.char_position {
			scroll.char_position = max.char_position;
			scroll.char_offset = scroll.char_offset.min(0);
		}
		self.set_scroll_state(scroll);
		self.commit();
	}

	/// Scrolls the minimal amount that shows the caret; false if it was visible.
	pub fn reveal_caret(&mut self) -> bool {
		let Some(scroll) = compute_reveal_scroll_position(&self.structure, &self.metrics, self.scroll, self.caret) else {
			return false;
		};
		self.set_scroll_state(scroll);
		self.commit();
		true
	}

	/// Scrolls so the caret sits in the middle of the viewport; false if already there.
	pub fn center_on_caret(&mut self) -> bool {
		let Some(scroll) =
			compute_center_on_scroll_position(&self.structure, &self.metrics, self.scroll, self.caret)
		else {
			return false;
		};
		self.set_scroll_state(scroll);
		self.commit();
		true
	}
}
