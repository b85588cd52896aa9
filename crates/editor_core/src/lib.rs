//! Headless binary editor core.
//!
//! [`CodeArea`] is the facade a host toolkit embeds: it owns the caret,
//! selection, scroll position, row structure, and undo log, routes abstract
//! input into navigation or edit commands, and notifies registered listeners
//! after every state change. Rendering, fonts, scrollbars, and the OS
//! clipboard stay with the host.

/// Clipboard payloads and the clipboard seam.
pub mod clipboard;
/// The code area facade.
pub mod code_area;
/// Invertible edit commands.
pub mod command;
/// Editor configuration loading.
pub mod config;
/// Edit error types.
pub mod error;
/// Change listeners.
pub mod listeners;
/// Undo/redo log.
pub mod undo;

pub use clipboard::{BINARY_MIME_TYPE, Clipboard, ClipboardData, MemoryClipboard, TEXT_MIME_TYPE};
pub use code_area::{CodeArea, InputEvent};
pub use command::{CommandKind, CommandPhase, EditCommand, Operation};
pub use config::{ConfigError, EditorConfig};
pub use error::{EditError, ReadOnlyReason};
pub use listeners::{Changes, ListenerId, Listeners};
pub use undo::{UndoLog, ViewSnapshot};
