//! View, wrapping, and edit mode definitions.

use serde::Deserialize;

/// Sections rendered for each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
	/// Only the code matrix.
	CodeMatrix,
	/// Only the text preview.
	TextPreview,
	/// Code matrix followed by the text preview.
	#[default]
	Dual,
}

impl ViewMode {
	/// Returns true if the code matrix is rendered.
	pub const fn shows_code(self) -> bool {
		matches!(self, Self::CodeMatrix | Self::Dual)
	}

	/// Returns true if the text preview is rendered.
	pub const fn shows_preview(self) -> bool {
		matches!(self, Self::TextPreview | Self::Dual)
	}

	/// Returns the section the caret belongs to when it is not free to choose.
	pub const fn default_section(self) -> Section {
		match self {
			Self::TextPreview => Section::TextPreview,
			Self::CodeMatrix | Self::Dual => Section::CodeMatrix,
		}
	}
}

/// Whether a row holds a fixed byte count or fills the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowWrappingMode {
	#[default]
	NoWrapping,
	Wrapping,
}

/// Editing permission of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditMode {
	/// No modifications.
	ReadOnly,
	/// Bytes can be overwritten but the size is fixed.
	Inplace,
	/// Size can change up to a capacity.
	Capped,
	/// Size can change freely.
	#[default]
	Expanding,
}

impl EditMode {
	/// Returns true if any modification is permitted.
	pub const fn is_editable(self) -> bool {
		!matches!(self, Self::ReadOnly)
	}

	/// Returns true if edits may change the data size.
	///
	/// `Capped` additionally requires the caller to check capacity.
	pub const fn allows_size_change(self) -> bool {
		matches!(self, Self::Capped | Self::Expanding)
	}

	/// Resolves the operation actually applied for a user-chosen `operation`.
	pub const fn active_operation(self, operation: EditOperation) -> EditOperation {
		match self {
			Self::ReadOnly => EditOperation::Insert,
			Self::Inplace => EditOperation::Overwrite,
			Self::Capped | Self::Expanding => operation,
		}
	}
}

/// Whether typed input is inserted or overwrites existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditOperation {
	Insert,
	#[default]
	Overwrite,
}

impl EditOperation {
	/// Returns the other operation.
	pub const fn toggled(self) -> Self {
		match self {
			Self::Insert => Self::Overwrite,
			Self::Overwrite => Self::Insert,
		}
	}
}

/// Section of a row occupied by the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
	#[default]
	CodeMatrix,
	TextPreview,
}

impl Section {
	/// Returns the opposite section.
	pub const fn other(self) -> Self {
		match self {
			Self::CodeMatrix => Self::TextPreview,
			Self::TextPreview => Self::CodeMatrix,
		}
	}
}

/// Whether caret movement extends the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectingMode {
	/// Movement collapses the selection to the caret.
	#[default]
	None,
	/// Movement extends the selection from its anchor.
	Selecting,
}
