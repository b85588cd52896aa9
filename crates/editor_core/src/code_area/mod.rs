//! The code area facade.
//!
//! [`CodeArea`] ties the byte store to the layout engine and the command
//! system. Every public mutation follows the same path: change state,
//! recompute the [`Structure`], re-clamp caret, selection, and scroll against
//! the new data size, then notify listeners once per touched kind. Listeners
//! therefore never observe an out-of-range caret.

use std::mem;

use hexen_layout::scrolling::max_scroll_position;
use hexen_layout::{Structure, ViewportMetrics, compute_reveal_scroll_position};
use hexen_primitives::{
	ByteStore, CaretPosition, Charset, CodeCharactersCase, CodeType, EditMode, EditOperation, RowWrappingMode,
	ScrollPosition, Section, SelectionRange, ViewMode,
};
use tracing::{debug, trace};

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::config::EditorConfig;
use crate::listeners::{Changes, Listeners};
use crate::undo::{UndoLog, ViewSnapshot};

mod clipboard;
mod editing;
mod input;
mod navigation;

#[cfg(test)]
mod invariants;

pub use input::InputEvent;

/// Headless binary editor component.
pub struct CodeArea<S> {
	data: S,
	config: EditorConfig,
	structure: Structure,
	metrics: ViewportMetrics,
	caret: CaretPosition,
	selection: SelectionRange,
	scroll: ScrollPosition,
	undo: UndoLog,
	clipboard: Box<dyn Clipboard>,
	listeners: Listeners,
	/// Kinds touched by the operation in progress.
	pending: Changes,
}

impl<S: std::fmt::Debug> std::fmt::Debug for CodeArea<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CodeArea")
			.field("data", &self.data)
			.field("config", &self.config)
			.field("caret", &self.caret)
			.field("selection", &self.selection)
			.field("scroll", &self.scroll)
			.field("undo", &self.undo)
			.finish_non_exhaustive()
	}
}

impl<S: ByteStore> CodeArea<S> {
	/// Creates a code area over `data` with a process-local clipboard and no viewport.
	pub fn new(data: S, config: EditorConfig) -> Self {
		let metrics = ViewportMetrics::default();
		let structure = Structure::new(config.layout(), data.size(), metrics.characters_per_page);
		let caret = CaretPosition::new(0, 0, config.view_mode.default_section());
		Self {
			data,
			undo: UndoLog::new(config.max_undo),
			config,
			structure,
			metrics,
			caret,
			selection: SelectionRange::default(),
			scroll: ScrollPosition::default(),
			clipboard: Box::new(MemoryClipboard::new()),
			listeners: Listeners::new(),
			pending: Changes::empty(),
		}
	}

	/// Replaces the clipboard, typically with a bridge to the system clipboard.
	pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
		self.clipboard = Box::new(clipboard);
		self
	}

	pub fn data(&self) -> &S {
		&self.data
	}

	pub fn into_data(self) -> S {
		self.data
	}

	/// Swaps in new data, dropping the history and resetting the view.
	pub fn replace_data(&mut self, data: S) -> S {
		let previous = mem::replace(&mut self.data, data);
		self.undo.clear();
		self.pending |= Changes::DATA;
		self.refresh();
		self.set_caret_state(CaretPosition::new(0, 0, self.caret.section));
		self.set_selection_state(SelectionRange::point(0));
		self.set_scroll_state(ScrollPosition::default());
		self.commit();
		previous
	}

	pub fn data_size(&self) -> u64 {
		self.data.size()
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn structure(&self) -> &Structure {
		&self.structure
	}

	pub fn viewport(&self) -> &ViewportMetrics {
		&self.metrics
	}

	pub fn caret(&self) -> CaretPosition {
		self.caret
	}

	pub fn selection(&self) -> SelectionRange {
		self.selection
	}

	pub fn has_selection(&self) -> bool {
		!self.selection.is_empty()
	}

	pub fn scroll_position(&self) -> ScrollPosition {
		self.scroll
	}

	pub fn undo_log(&self) -> &UndoLog {
		&self.undo
	}

	pub fn can_undo(&self) -> bool {
		self.config.edit_mode.is_editable() && self.undo.can_undo()
	}

	pub fn can_redo(&self) -> bool {
		self.config.edit_mode.is_editable() && self.undo.can_redo()
	}

	/// Returns the caption of the edit the next undo would revert.
	pub fn undo_caption(&self) -> Option<&'static str> {
		if !self.can_undo() {
			return None;
		}
		self.undo.undo_command().map(|command| command.kind().caption())
	}

	/// Returns the caption of the edit the next redo would re-apply.
	pub fn redo_caption(&self) -> Option<&'static str> {
		if !self.can_redo() {
			return None;
		}
		self.undo.redo_command().map(|command| command.kind().caption())
	}

	/// Returns true if the data differs from the last synced state.
	pub fn is_modified(&self) -> bool {
		self.undo.is_modified()
	}

	/// Records that the data was persisted.
	pub fn mark_synced(&mut self) {
		self.undo.mark_synced();
	}

	pub fn listeners_mut(&mut self) -> &mut Listeners {
		&mut self.listeners
	}

	/// Returns the operation typing performs under the current edit mode.
	pub fn active_operation(&self) -> EditOperation {
		self.config.edit_mode.active_operation(self.config.edit_operation)
	}

	/// Applies a whole configuration at once.
	pub fn set_config(&mut self, config: EditorConfig) {
		if config == self.config {
			return;
		}
		debug!(
			code_type = ?config.code_type,
			view_mode = ?config.view_mode,
			edit_mode = ?config.edit_mode,
			"code_area.config"
		);
		self.undo.set_max_undo(config.max_undo);
		self.undo.break_sequence();
		self.config = config;
		self.refresh();
		self.commit();
	}

	fn update_config(&mut self, update: impl FnOnce(&mut EditorConfig)) {
		let mut config = self.config.clone();
		update(&mut config);
		self.set_config(config);
	}

	pub fn set_code_type(&mut self, code_type: CodeType) {
		self.update_config(|config| config.code_type = code_type);
	}

	pub fn set_code_characters_case(&mut self, case: CodeCharactersCase) {
		self.update_config(|config| config.code_characters_case = case);
	}

	pub fn set_position_code_type(&mut self, code_type: CodeType) {
		self.update_config(|config| config.position_code_type = code_type);
	}

	pub fn set_view_mode(&mut self, view_mode: ViewMode) {
		self.update_config(|config| config.view_mode = view_mode);
	}

	pub fn set_row_wrapping(&mut self, row_wrapping: RowWrappingMode) {
		self.update_config(|config| config.row_wrapping = row_wrapping);
	}

	pub fn set_max_bytes_per_row(&mut self, max_bytes_per_row: u32) {
		self.update_config(|config| config.max_bytes_per_row = max_bytes_per_row);
	}

	pub fn set_wrapping_group_size(&mut self, group_size: u32) {
		self.update_config(|config| config.wrapping_group_size = group_size);
	}

	pub fn set_row_position_length_limits(&mut self, min: u32, max: u32) {
		self.update_config(|config| {
			config.min_row_position_length = min;
			config.max_row_position_length = max;
		});
	}

	pub fn set_edit_mode(&mut self, edit_mode: EditMode) {
		self.update_config(|config| config.edit_mode = edit_mode);
	}

	pub fn set_capacity(&mut self, capacity: Option<u64>) {
		self.update_config(|config| config.capacity = capacity);
	}

	pub fn set_edit_operation(&mut self, edit_operation: EditOperation) {
		self.update_config(|config| config.edit_operation = edit_operation);
	}

	/// Switches between insert and overwrite.
	pub fn toggle_edit_operation(&mut self) {
		self.set_edit_operation(self.config.edit_operation.toggled());
	}

	pub fn set_charset(&mut self, charset: Charset) {
		self.update_config(|config| config.charset = charset);
	}

	/// Updates the viewport size; with wrapping this also changes the row structure.
	pub fn set_viewport(&mut self, metrics: ViewportMetrics) {
		if metrics == self.metrics {
			return;
		}
		self.metrics = metrics;
		self.refresh();
		self.commit();
	}

	/// Recomputes the structure and re-clamps all view state.
	fn refresh(&mut self) {
		self.structure
			.update(self.config.layout(), self.data.size(), self.metrics.characters_per_page);

		let view_mode = self.config.view_mode;
		let mut caret = self.caret;
		if !section_visible(view_mode, caret.section) {
			caret = caret.with_section(view_mode.default_section());
		}
		self.set_caret_state(caret);
		self.set_selection_state(self.selection);

		let max = max_scroll_position(&self.structure, &self.metrics);
		let mut scroll = self.scroll;
		if scroll.row_position > max.row_position {
			scroll.row_position = max.row_position;
			scroll.row_offset = 0;
		}
		if scroll.char_position > max.char_position {
			scroll.char_position = max.char_position;
			scroll.char_offset = 0;
		}
		self.set_scroll_state(scroll);
	}

	fn set_caret_state(&mut self, caret: CaretPosition) {
		let caret = caret.clamp(self.data.size(), self.config.code_type);
		if caret != self.caret {
			self.caret = caret;
			self.pending |= Changes::CARET;
		}
	}

	/// Stores a clamped selection.
	///
	/// Moving an empty selection is not a visible change, so it updates the
	/// state without notifying.
	fn set_selection_state(&mut self, selection: SelectionRange) {
		let selection = selection.clamp(self.data.size());
		if selection == self.selection {
			return;
		}
		if !(selection.is_empty() && self.selection.is_empty()) {
			self.pending |= Changes::SELECTION;
		}
		self.selection = selection;
	}

	fn set_scroll_state(&mut self, scroll: ScrollPosition) {
		if scroll != self.scroll {
			self.scroll = scroll;
			self.pending |= Changes::SCROLL;
		}
	}

	/// Restores the view captured by a command.
	fn restore_view(&mut self, view: ViewSnapshot) {
		self.refresh();
		let view_mode = self.config.view_mode;
		let mut caret = view.caret;
		if !section_visible(view_mode, caret.section) {
			caret = caret.with_section(view_mode.default_section());
		}
		self.set_caret_state(caret);
		self.set_selection_state(view.selection);
		self.follow_caret();
	}

	/// Scrolls the caret into view after a discrete move, once the host has
	/// reported a viewport.
	fn follow_caret(&mut self) {
		if self.metrics == ViewportMetrics::default() {
			return;
		}
		if let Some(scroll) = compute_reveal_scroll_position(&self.structure, &self.metrics, self.scroll, self.caret) {
			self.set_scroll_state(scroll);
		}
	}

	/// Delivers the pending notifications.
	fn commit(&mut self) {
		let changes = mem::replace(&mut self.pending, Changes::empty());
		if changes.is_empty() {
			return;
		}
		trace!(?changes, "code_area.notify");
		self.listeners
			.notify(changes, &self.caret, &self.selection, &self.scroll);
	}
}

fn section_visible(view_mode: ViewMode, section: Section) -> bool {
	match section {
		Section::CodeMatrix => view_mode.shows_code(),
		Section::TextPreview => view_mode.shows_preview(),
	}
}
