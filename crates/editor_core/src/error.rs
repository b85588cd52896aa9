//! Edit error types.

use hexen_primitives::{Charset, CodeType, DataError};
use thiserror::Error;

/// Why an edit was rejected as not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOnlyReason {
	/// The edit mode is [`EditMode::ReadOnly`](hexen_primitives::EditMode::ReadOnly).
	EditMode,
	/// The byte store has no editable view.
	ReadOnlyData,
}

/// Errors raised by editing operations.
///
/// Every variant is raised before the byte store is touched, except
/// [`EditError::Data`], which reports a store failure after which the
/// command was rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	#[error("data is not editable ({0:?})")]
	NotEditable(ReadOnlyReason),
	#[error("edit mode does not allow changing the data size")]
	SizeChangeNotAllowed,
	#[error("edit would exceed the capacity of {capacity} bytes")]
	CapacityExceeded { capacity: u64 },
	#[error("'{0}' is not a valid {1:?} digit")]
	InvalidDigit(char, CodeType),
	#[error("'{0}' cannot be encoded in {1:?}")]
	Unencodable(char, Charset),
	#[error("clipboard text is not valid {0:?} code")]
	InvalidCodeText(CodeType),
	#[error("nothing to delete")]
	NothingToDelete,
	#[error(transparent)]
	Data(#[from] DataError),
}

/// Result type for editing operations.
pub type Result<T> = std::result::Result<T, EditError>;
