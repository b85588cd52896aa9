//! Selection range between an anchor and an active end.

#[cfg(test)]
mod tests;

/// A half-open byte range `[min, max)` defined by anchor and active positions.
///
/// The anchor is the fixed end and the active end follows the caret while
/// selecting. Positions are stored unsorted so the selection can be extended
/// in either direction; [`first`](Self::first) and [`last`](Self::last) always
/// sort and report an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionRange {
	/// The fixed end of the range.
	pub anchor: u64,
	/// The moving end of the range.
	pub active: u64,
}

impl SelectionRange {
	/// Creates a new range from anchor to active.
	pub const fn new(anchor: u64, active: u64) -> Self {
		Self { anchor, active }
	}

	/// Creates an empty range at the given position.
	pub const fn point(pos: u64) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the smaller of anchor and active.
	#[inline]
	pub fn min(&self) -> u64 {
		std::cmp::min(self.anchor, self.active)
	}

	/// Returns the larger of anchor and active (exclusive end).
	#[inline]
	pub fn max(&self) -> u64 {
		std::cmp::max(self.anchor, self.active)
	}

	/// Returns the first selected byte.
	#[inline]
	pub fn first(&self) -> u64 {
		self.min()
	}

	/// Returns the last selected byte (inclusive).
	///
	/// Meaningless for an empty range, where it saturates to `first`.
	#[inline]
	pub fn last(&self) -> u64 {
		self.max().saturating_sub(1).max(self.min())
	}

	/// Returns the number of selected bytes.
	#[inline]
	pub fn length(&self) -> u64 {
		self.max() - self.min()
	}

	/// Returns true if anchor equals active.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.active
	}

	/// Returns true if `pos` is a selected byte.
	pub fn contains(&self, pos: u64) -> bool {
		!self.is_empty() && pos >= self.min() && pos < self.max()
	}

	/// Returns the range extended so its active end is at `pos`.
	///
	/// An empty range is re-anchored at `caret` first, so extending from a
	/// collapsed selection starts where the caret was.
	pub fn extend_to(&self, caret: u64, pos: u64) -> Self {
		if self.is_empty() {
			Self::new(caret, pos)
		} else {
			Self::new(self.anchor, pos)
		}
	}

	/// Clamps anchor and active to `[0, data_size]`.
	pub fn clamp(&self, data_size: u64) -> Self {
		Self::new(self.anchor.min(data_size), self.active.min(data_size))
	}
}
