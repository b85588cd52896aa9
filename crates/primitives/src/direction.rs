//! Directional types for caret movement and scrolling.

/// Caret movement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementDirection {
	Left,
	Right,
	Up,
	Down,
	RowStart,
	RowEnd,
	DocStart,
	DocEnd,
	PageUp,
	PageDown,
	/// Toggles between the code matrix and the preview in dual view.
	SwitchSection,
}

/// Discrete scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollingDirection {
	Up,
	Down,
	Left,
	Right,
	PageUp,
	PageDown,
	PageLeft,
	PageRight,
}
