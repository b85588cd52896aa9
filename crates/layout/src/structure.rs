//! Row structure of the code area.
//!
//! [`Structure`] derives how many bytes fit on a row, how wide a row is in
//! character cells, and how many rows the document occupies. It also owns the
//! two core coordinate mappings between byte offsets within a row and
//! character columns.
//!
//! # Row layout
//!
//! ```text
//! code matrix                        preview
//! 00 01 02 03  04 05 06 07           ........
//! ^  ^         ^ extra space per group
//! |  first_code_character_pos(1) == 3
//! ```
//!
//! In [`ViewMode::Dual`] one separator column sits between the last code
//! digit and the first preview cell.

use hexen_primitives::{CaretPosition, CodeType, RowWrappingMode, Section, ViewMode};
use tracing::trace;


/// Inputs that determine the row structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
	/// Numeric base of the code matrix.
	pub code_type: CodeType,
	/// Visible sections.
	pub view_mode: ViewMode,
	/// Fixed or width-derived rows.
	pub row_wrapping: RowWrappingMode,
	/// Bytes per row without wrapping; upper bound with wrapping (0 = none).
	pub max_bytes_per_row: u32,
	/// Bytes per visual group, separated by an extra space (0 = no groups).
	pub wrapping_group_size: u32,
	/// Numeric base of the address column.
	pub position_code_type: CodeType,
	/// Lower bound of the address column width.
	pub min_row_position_length: u32,
	/// Upper bound of the address column width (0 = none).
	pub max_row_position_length: u32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			code_type: CodeType::Hexadecimal,
			view_mode: ViewMode::Dual,
			row_wrapping: RowWrappingMode::NoWrapping,
			max_bytes_per_row: 16,
			wrapping_group_size: 0,
			position_code_type: CodeType::Hexadecimal,
			min_row_position_length: 0,
			max_row_position_length: 0,
		}
	}
}

/// Derived row structure.
///
/// Recomputed by [`Structure::update`] whenever configuration, data size, or
/// the available width changes. Recomputing with unchanged inputs leaves every
/// field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
	config: LayoutConfig,
	data_size: u64,
	available_characters: u32,
	bytes_per_row: u32,
	characters_per_code_section: u32,
	characters_per_row: u32,
	rows_per_document: u64,
	row_position_length: u32,
}

impl Default for Structure {
	fn default() -> Self {
		Self::new(LayoutConfig::default(), 0, u32::MAX)
	}
}

impl Structure {
	/// Computes the structure for the given inputs.
	///
	/// `available_characters` is the width budget in character cells used in
	/// [`RowWrappingMode::Wrapping`]; it is ignored otherwise.
	pub fn new(config: LayoutConfig, data_size: u64, available_characters: u32) -> Self {
		let mut structure = Self {
			config,
			data_size,
			available_characters,
			bytes_per_row: 1,
			characters_per_code_section: 0,
			characters_per_row: 0,
			rows_per_document: 1,
			row_position_length: 1,
		};
		structure.recompute();
		structure
	}

	/// Updates the inputs and recomputes, returning true if anything changed.
	pub fn update(&mut self, config: LayoutConfig, data_size: u64, available_characters: u32) -> bool {
		let before = *self;
		self.config = config;
		self.data_size = data_size;
		self.available_characters = available_characters;
		self.recompute();
		let changed = before != *self;
		if changed {
			trace!(
				bytes_per_row = self.bytes_per_row,
				characters_per_row = self.characters_per_row,
				rows = self.rows_per_document,
				"structure.recompute"
			);
		}
		changed
	}

	fn recompute(&mut self) {
		self.bytes_per_row = self.compute_bytes_per_row();
		self.characters_per_code_section = saturate(self.code_section_width(self.bytes_per_row));
		self.characters_per_row = saturate(self.row_width(self.bytes_per_row));

		let bytes_per_row = u64::from(self.bytes_per_row);
		self.rows_per_document = self.data_size.div_ceil(bytes_per_row).max(1);

		let mut length = self.config.position_code_type.position_length(self.data_size);
		length = length.max(self.config.min_row_position_length);
		if self.config.max_row_position_length > 0 {
			length = length.min(self.config.max_row_position_length);
		}
		self.row_position_length = length;
	}

	fn compute_bytes_per_row(&self) -> u32 {
		let max = self.config.max_bytes_per_row;
		if self.config.row_wrapping == RowWrappingMode::NoWrapping {
			return max.max(1);
		}

		let budget = self.available_characters;
		let mut upper = budget.max(1);
		if max > 0 {
			upper = upper.min(max);
		}

		// Largest count whose row still fits; row width grows monotonically.
		let (mut low, mut high) = (1u32, upper);
		while low < high {
			let mid = low + (high - low).div_ceil(2);
			if self.row_width(mid) <= u64::from(budget) {
				low = mid;
			} else {
				high = mid - 1;
			}
		}

		let group = self.config.wrapping_group_size;
		if group > 0 && low >= group {
			low -= low % group;
		}
		low
	}

	fn code_digits(&self) -> u32 {
		self.config.code_type.max_digits_for_byte()
	}

	// Widths are computed in u64 so probing large byte counts cannot overflow.
	fn code_section_width(&self, bytes: u32) -> u64 {
		if !self.config.view_mode.shows_code() || bytes == 0 {
			return 0;
		}
		let last = u64::from(bytes - 1);
		let group = u64::from(self.config.wrapping_group_size);
		let gaps = if group > 0 { last / group } else { 0 };
		let digits = u64::from(self.code_digits());
		last * (digits + 1) + gaps + digits
	}

	fn row_width(&self, bytes: u32) -> u64 {
		let code = self.code_section_width(bytes);
		match self.config.view_mode {
			ViewMode::CodeMatrix => code,
			ViewMode::TextPreview => u64::from(bytes),
			ViewMode::Dual => code + 1 + u64::from(bytes),
		}
	}

	/// Returns the layout inputs.
	pub fn config(&self) -> &LayoutConfig {
		&self.config
	}

	/// Returns the data size the structure was computed for.
	pub fn data_size(&self) -> u64 {
		self.data_size
	}

	/// Returns the number of bytes rendered on each row.
	pub fn bytes_per_row(&self) -> u32 {
		self.bytes_per_row
	}

	/// Returns the width of the code section in character cells.
	pub fn characters_per_code_section(&self) -> u32 {
		self.characters_per_code_section
	}

	/// Returns the width of a full row in character cells.
	pub fn characters_per_row(&self) -> u32 {
		self.characters_per_row
	}

	/// Returns the number of rows, at least one so an empty document still has a caret row.
	pub fn rows_per_document(&self) -> u64 {
		self.rows_per_document
	}

	/// Returns the number of digits in the address column.
	pub fn row_position_length(&self) -> u32 {
		self.row_position_length
	}

	/// Returns the column of the first digit of the byte at `byte_offset` within a row.
	pub fn first_code_character_pos(&self, byte_offset: u32) -> u32 {
		let group = self.config.wrapping_group_size;
		let gaps = if group > 0 { byte_offset / group } else { 0 };
		byte_offset * (self.code_digits() + 1) + gaps
	}

	/// Returns the column of the last digit of the byte at `byte_offset` within a row.
	pub fn last_code_character_pos(&self, byte_offset: u32) -> u32 {
		self.first_code_character_pos(byte_offset) + self.code_digits() - 1
	}

	/// Returns the byte offset within a row whose code cell covers `column`.
	///
	/// Spacing columns map to the preceding byte; the result is clamped to
	/// `[0, bytes_per_row)`.
	pub fn position_byte(&self, column: u32) -> u32 {
		let cell = self.code_digits() + 1;
		let group = self.config.wrapping_group_size;
		let byte = if group > 0 {
			let group_width = group * cell + 1;
			let within = column % group_width;
			(column / group_width) * group + (within / cell).min(group - 1)
		} else {
			column / cell
		};
		byte.min(self.bytes_per_row - 1)
	}

	/// Returns the digit within its byte that `column` points at.
	pub fn position_code_offset(&self, column: u32) -> u32 {
		let byte = self.position_byte(column);
		column
			.saturating_sub(self.first_code_character_pos(byte))
			.min(self.code_digits() - 1)
	}

	/// Returns the first column of the preview section.
	pub fn preview_char_pos(&self) -> u32 {
		match self.config.view_mode {
			ViewMode::TextPreview => 0,
			ViewMode::CodeMatrix | ViewMode::Dual => self.characters_per_code_section + 1,
		}
	}

	/// Returns the row that holds `data_position`.
	pub fn row_of(&self, data_position: u64) -> u64 {
		data_position / u64::from(self.bytes_per_row)
	}

	/// Returns the first byte position of the row holding `data_position`.
	pub fn row_start(&self, data_position: u64) -> u64 {
		data_position - data_position % u64::from(self.bytes_per_row)
	}

	/// Returns the character column the caret occupies within its row.
	pub fn caret_column(&self, caret: CaretPosition) -> u32 {
		let byte_in_row = (caret.data_position % u64::from(self.bytes_per_row)) as u32;
		match caret.section {
			Section::CodeMatrix => self.first_code_character_pos(byte_in_row) + caret.code_offset,
			Section::TextPreview => self.preview_char_pos() + byte_in_row,
		}
	}

	/// Maps a cell (row, column) to the nearest caret position.
	///
	/// The column picks the section: in dual view the separator belongs to the
	/// code matrix. Points past the end of data land on the end of data with
	/// the first digit selected.
	pub fn caret_position_for_point(&self, row: u64, column: u32) -> CaretPosition {
		let view_mode = self.config.view_mode;
		let in_preview = match view_mode {
			ViewMode::CodeMatrix => false,
			ViewMode::TextPreview => true,
			ViewMode::Dual => column >= self.preview_char_pos(),
		};

		let (byte_in_row, code_offset, section) = if in_preview {
			let offset = column.saturating_sub(self.preview_char_pos());
			(offset.min(self.bytes_per_row - 1), 0, Section::TextPreview)
		} else {
			let column = column.min(self.characters_per_code_section.saturating_sub(1));
			(self.position_byte(column), self.position_code_offset(column), Section::CodeMatrix)
		};

		let data_position = row
			.saturating_mul(u64::from(self.bytes_per_row))
			.saturating_add(u64::from(byte_in_row));
		if data_position >= self.data_size {
			CaretPosition::new(self.data_size, 0, section)
		} else {
			CaretPosition::new(data_position, code_offset, section)
		}
	}
}

fn saturate(value: u64) -> u32 {
	u32::try_from(value).unwrap_or(u32::MAX)
}
