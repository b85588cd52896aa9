//! Visible column and byte ranges for a horizontal window.

use crate::structure::Structure;


/// Columns and bytes of a row that intersect a horizontal window.
///
/// Every range is half-open; an empty range means nothing of that kind is
/// visible. Byte ranges are offsets within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
	/// First byte whose code cell is visible.
	pub skip_to_code: u32,
	/// First byte after the visible code cells.
	pub skip_rest_from_code: u32,
	/// First visible character column.
	pub skip_to_char: u32,
	/// First character column after the window.
	pub skip_rest_from_char: u32,
	/// First byte whose preview cell is visible.
	pub skip_to_preview: u32,
	/// First byte after the visible preview cells.
	pub skip_rest_from_preview: u32,
	/// First column of the preview section.
	pub preview_char_pos: u32,
	/// Last column of the code section.
	pub code_last_char_pos: u32,
}

impl VisibleRange {
	/// Computes the visible ranges for the character window `[left, right)`.
	pub fn compute(structure: &Structure, left: u32, right: u32) -> Self {
		let view_mode = structure.config().view_mode;
		let bytes_per_row = structure.bytes_per_row();
		let row_width = structure.characters_per_row();
		let code_width = structure.characters_per_code_section();
		let preview_char_pos = structure.preview_char_pos();

		let skip_to_char = left.min(row_width);
		let skip_rest_from_char = right.min(row_width).max(skip_to_char);

		let (skip_to_code, skip_rest_from_code) = if view_mode.shows_code() && left < code_width && left < right {
			let last_visible = right.min(code_width) - 1;
			(structure.position_byte(left), structure.position_byte(last_visible) + 1)
		} else {
			(0, 0)
		};

		let preview_end = preview_char_pos + bytes_per_row;
		let (skip_to_preview, skip_rest_from_preview) =
			if view_mode.shows_preview() && left < preview_end && right > preview_char_pos && left < right {
				(
					left.saturating_sub(preview_char_pos),
					(right - preview_char_pos).min(bytes_per_row),
				)
			} else {
				(0, 0)
			};

		Self {
			skip_to_code,
			skip_rest_from_code,
			skip_to_char,
			skip_rest_from_char,
			skip_to_preview,
			skip_rest_from_preview,
			preview_char_pos,
			code_last_char_pos: code_width.saturating_sub(1),
		}
	}

	/// Returns true if any code cell is visible.
	pub fn has_code(&self) -> bool {
		self.skip_to_code < self.skip_rest_from_code
	}

	/// Returns true if any preview cell is visible.
	pub fn has_preview(&self) -> bool {
		self.skip_to_preview < self.skip_rest_from_preview
	}
}
