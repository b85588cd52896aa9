//! Scroll, reveal, and center computation.
//!
//! All functions are pure: they take the current [`ScrollPosition`] and
//! return the new one without touching any widget. Vertical units are rows,
//! horizontal units are character columns.

use hexen_primitives::{CaretPosition, ScrollPosition, ScrollingDirection};

use crate::structure::Structure;


/// Viewport size in cells.
///
/// `*_per_page` count fully visible cells, `*_per_rect` also count a partially
/// visible trailing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportMetrics {
	/// Fully visible rows.
	pub rows_per_page: u64,
	/// Rows touched by the viewport.
	pub rows_per_rect: u64,
	/// Fully visible character columns.
	pub characters_per_page: u32,
	/// Character columns touched by the viewport.
	pub characters_per_rect: u32,
}

impl ViewportMetrics {
	/// Creates metrics for a viewport measured in whole cells.
	pub const fn new(rows: u64, characters: u32) -> Self {
		Self {
			rows_per_page: rows,
			rows_per_rect: rows,
			characters_per_page: characters,
			characters_per_rect: characters,
		}
	}

	/// Converts a pixel viewport into cell counts.
	///
	/// Zero cell sizes yield an empty viewport.
	pub fn from_pixels(width: u32, height: u32, char_width: u32, row_height: u32) -> Self {
		if char_width == 0 || row_height == 0 {
			return Self::default();
		}
		Self {
			rows_per_page: u64::from(height / row_height),
			rows_per_rect: u64::from(height.div_ceil(row_height)),
			characters_per_page: width / char_width,
			characters_per_rect: width.div_ceil(char_width),
		}
	}

	fn page_rows(&self) -> u64 {
		self.rows_per_page.max(1)
	}

	fn page_characters(&self) -> u32 {
		self.characters_per_page.max(1)
	}
}

/// Returns the largest cell-aligned scroll position.
///
/// The row range includes the caret row at the end of data, which lies one
/// past the document when the last row is full.
pub fn max_scroll_position(structure: &Structure, metrics: &ViewportMetrics) -> ScrollPosition {
	let rows = structure.row_of(structure.data_size()) + 1;
	ScrollPosition::new(
		rows.max(structure.rows_per_document()).saturating_sub(metrics.rows_per_page),
		structure.characters_per_row().saturating_sub(metrics.characters_per_page),
	)
}

/// Scrolls one step in `direction`, clamped to the document.
///
/// A partially scrolled cell is first aligned before moving further back.
pub fn compute_scrolling(
	structure: &Structure,
	metrics: &ViewportMetrics,
	start: ScrollPosition,
	direction: ScrollingDirection,
) -> ScrollPosition {
	let max = max_scroll_position(structure, metrics);
	let mut scroll = start;

	match direction {
		ScrollingDirection::Up => {
			if scroll.row_offset > 0 {
				scroll.row_offset = 0;
			} else {
				scroll.row_position = scroll.row_position.saturating_sub(1);
			}
		}
		ScrollingDirection::Down => {
			scroll.row_position = scroll.row_position.saturating_add(1);
			scroll.row_offset = 0;
		}
		ScrollingDirection::PageUp => {
			scroll.row_position = scroll.row_position.saturating_sub(metrics.page_rows());
			scroll.row_offset = 0;
		}
		ScrollingDirection::PageDown => {
			scroll.row_position = scroll.row_position.saturating_add(metrics.page_rows());
			scroll.row_offset = 0;
		}
		ScrollingDirection::Left => {
			if scroll.char_offset > 0 {
				scroll.char_offset = 0;
			} else {
				scroll.char_position = scroll.char_position.saturating_sub(1);
			}
		}
		ScrollingDirection::Right => {
			scroll.char_position = scroll.char_position.saturating_add(1);
			scroll.char_offset = 0;
		}
		ScrollingDirection::PageLeft => {
			scroll.char_position = scroll.char_position.saturating_sub(metrics.page_characters());
			scroll.char_offset = 0;
		}
		ScrollingDirection::PageRight => {
			scroll.char_position = scroll.char_position.saturating_add(metrics.page_characters());
			scroll.char_offset = 0;
		}
	}

	if scroll.row_position >= max.row_position {
		scroll.row_position = max.row_position;
		scroll.row_offset = 0;
	}
	if scroll.char_position >= max.char_position {
		scroll.char_position = max.char_position;
		scroll.char_offset = 0;
	}
	scroll
}

/// Returns the minimal scroll change that shows the caret cell completely.
///
/// Returns `None` if the caret is already fully visible. Each axis moves only
/// if it has to; when the viewport cannot hold a whole cell the caret is
/// placed at the top-left.
pub fn compute_reveal_scroll_position(
	structure: &Structure,
	metrics: &ViewportMetrics,
	current: ScrollPosition,
	caret: CaretPosition,
) -> Option<ScrollPosition> {
	let row = structure.row_of(caret.data_position);
	let column = structure.caret_column(caret);
	let mut scroll = current;

	let rows = metrics.page_rows();
	if row < current.row_position || (row == current.row_position && current.row_offset > 0) {
		scroll.row_position = row;
		scroll.row_offset = 0;
	} else if row >= current.row_position + rows {
		scroll.row_position = row + 1 - rows;
		scroll.row_offset = 0;
	}

	let characters = metrics.page_characters();
	if column < current.char_position || (column == current.char_position && current.char_offset > 0) {
		scroll.char_position = column;
		scroll.char_offset = 0;
	} else if column >= current.char_position + characters {
		scroll.char_position = column + 1 - characters;
		scroll.char_offset = 0;
	}

	(scroll != current).then_some(scroll)
}

/// Returns the scroll position that centers the caret, if it differs from `current`.
pub fn compute_center_on_scroll_position(
	structure: &Structure,
	metrics: &ViewportMetrics,
	current: ScrollPosition,
	caret: CaretPosition,
) -> Option<ScrollPosition> {
	let max = max_scroll_position(structure, metrics);
	let row = structure.row_of(caret.data_position);
	let column = structure.caret_column(caret);

	let row_position = row.saturating_sub(metrics.rows_per_page / 2).min(max.row_position);
	let char_position = column
		.saturating_sub(metrics.characters_per_page / 2)
		.min(max.char_position);

	let target = ScrollPosition {
		row_position,
		char_position,
		..current
	}
	.aligned();
	(target != current).then_some(target)
}
