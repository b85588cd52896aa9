//! Scroll position in row and character units.

/// Scroll position of the viewport.
///
/// Rows and characters are whole cells. The offsets are sub-cell amounts owned
/// by the host (usually pixels); the core carries them through unchanged and
/// resets them whenever it moves to a cell boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScrollPosition {
	/// First visible row.
	pub row_position: u64,
	/// Sub-row offset of the first visible row.
	pub row_offset: i32,
	/// First visible character column.
	pub char_position: u32,
	/// Sub-character offset of the first visible column.
	pub char_offset: i32,
}

impl ScrollPosition {
	/// Creates a cell-aligned scroll position.
	pub const fn new(row_position: u64, char_position: u32) -> Self {
		Self {
			row_position,
			row_offset: 0,
			char_position,
			char_offset: 0,
		}
	}

	/// Returns the same position with both offsets cleared.
	pub const fn aligned(self) -> Self {
		Self::new(self.row_position, self.char_position)
	}
}
