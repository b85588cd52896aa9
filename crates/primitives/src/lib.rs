//! Core types for binary editing: code types, carets, selections, and byte stores.

/// Caret position within the code matrix or preview section.
pub mod caret;
/// Byte ↔ character mapping for the preview section.
pub mod charset;
/// Numeric code types used to render bytes.
pub mod code_type;
/// Byte storage contract and the in-memory buffer.
pub mod data;
/// Directional types for caret movement and scrolling.
pub mod direction;
/// View, wrapping, and edit mode definitions.
pub mod mode;
/// Scroll position type.
pub mod scroll;
/// Selection range between an anchor and an active end.
pub mod selection;

pub use caret::CaretPosition;
pub use charset::Charset;
pub use code_type::{CodeCharactersCase, CodeType};
pub use data::{ByteBuffer, ByteStore, DataError, EditableByteStore};
pub use direction::{MovementDirection, ScrollingDirection};
pub use mode::{EditMode, EditOperation, RowWrappingMode, Section, SelectingMode, ViewMode};
pub use scroll::ScrollPosition;
pub use selection::SelectionRange;
