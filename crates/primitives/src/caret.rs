//! Caret position model.

use crate::code_type::CodeType;
use crate::mode::Section;


/// Caret location: a byte position, a digit within that byte, and a section.
///
/// `data_position` may equal the data size, which places the caret after the
/// last byte. `code_offset` is only meaningful in [`Section::CodeMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CaretPosition {
	/// Byte position, `0..=data_size`.
	pub data_position: u64,
	/// Digit index within the byte, counted from the most significant digit.
	pub code_offset: u32,
	/// Section occupied by the caret.
	pub section: Section,
}

impl CaretPosition {
	/// Creates a caret position.
	pub const fn new(data_position: u64, code_offset: u32, section: Section) -> Self {
		Self {
			data_position,
			code_offset,
			section,
		}
	}

	/// Creates a caret at the first digit of `data_position` in the code matrix.
	pub const fn at(data_position: u64) -> Self {
		Self::new(data_position, 0, Section::CodeMatrix)
	}

	/// Returns the same caret moved to another byte, resetting the digit.
	pub const fn with_data_position(self, data_position: u64) -> Self {
		Self::new(data_position, 0, self.section)
	}

	/// Returns the caret in `section`, resetting the digit when the section changes.
	pub const fn with_section(self, section: Section) -> Self {
		if matches!(
			(self.section, section),
			(Section::CodeMatrix, Section::CodeMatrix) | (Section::TextPreview, Section::TextPreview)
		) {
			self
		} else {
			Self::new(self.data_position, 0, section)
		}
	}

	/// Returns the caret clamped to valid bounds.
	///
	/// `data_position` is limited to `data_size`. The digit is limited to the
	/// digits of `code_type` and cleared in the preview section or when the caret
	/// sits past the last byte.
	pub fn clamp(self, data_size: u64, code_type: CodeType) -> Self {
		let data_position = self.data_position.min(data_size);
		let code_offset = if self.section == Section::TextPreview || data_position == data_size {
			0
		} else {
			self.code_offset.min(code_type.max_digits_for_byte() - 1)
		};
		Self::new(data_position, code_offset, self.section)
	}
}
