//! Editor configuration.
//!
//! Every option has a default, so an empty document is a valid configuration.
//! Hosts usually load a TOML table:
//!
//! ```toml
//! code-type = "hexadecimal"
//! view-mode = "dual"
//! row-wrapping = "wrapping"
//! wrapping-group-size = 4
//! edit-mode = "capped"
//! capacity = 4096
//! ```

use std::path::{Path, PathBuf};

use hexen_layout::LayoutConfig;
use hexen_primitives::{
	Charset, CodeCharactersCase, CodeType, EditMode, EditOperation, RowWrappingMode, ViewMode,
};
use serde::Deserialize;
use thiserror::Error;

/// Default depth of the undo log.
pub const DEFAULT_MAX_UNDO: usize = 1000;

/// Errors raised while loading an [`EditorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to parse editor config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("failed to read {}: {error}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		error: std::io::Error,
	},
	#[error("invalid editor config: {0}")]
	Invalid(String),
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// User-facing options of a code area.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EditorConfig {
	pub code_type: CodeType,
	pub code_characters_case: CodeCharactersCase,
	pub position_code_type: CodeType,
	pub view_mode: ViewMode,
	pub row_wrapping: RowWrappingMode,
	/// Bytes per row without wrapping, or the wrapping cap (0 = uncapped).
	pub max_bytes_per_row: u32,
	pub wrapping_group_size: u32,
	pub min_row_position_length: u32,
	/// 0 leaves the address column unbounded.
	pub max_row_position_length: u32,
	pub edit_mode: EditMode,
	pub edit_operation: EditOperation,
	/// Size limit in [`EditMode::Capped`]; `None` is unlimited.
	pub capacity: Option<u64>,
	pub charset: Charset,
	pub max_undo: usize,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			code_type: CodeType::Hexadecimal,
			code_characters_case: CodeCharactersCase::Upper,
			position_code_type: CodeType::Hexadecimal,
			view_mode: ViewMode::Dual,
			row_wrapping: RowWrappingMode::NoWrapping,
			max_bytes_per_row: 16,
			wrapping_group_size: 0,
			min_row_position_length: 0,
			max_row_position_length: 0,
			edit_mode: EditMode::Expanding,
			edit_operation: EditOperation::Overwrite,
			capacity: None,
			charset: Charset::Iso8859_1,
			max_undo: DEFAULT_MAX_UNDO,
		}
	}
}

impl EditorConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml(source: &str) -> Result<Self> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and parses a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml(&source)
	}

	/// Checks cross-field constraints serde cannot express.
	pub fn validate(&self) -> Result<()> {
		if self.row_wrapping == RowWrappingMode::NoWrapping && self.max_bytes_per_row == 0 {
			return Err(ConfigError::Invalid(
				"max-bytes-per-row must be positive without wrapping".into(),
			));
		}
		if self.max_row_position_length > 0 && self.max_row_position_length < self.min_row_position_length {
			return Err(ConfigError::Invalid(format!(
				"max-row-position-length {} is below min-row-position-length {}",
				self.max_row_position_length, self.min_row_position_length
			)));
		}
		if self.max_undo == 0 {
			return Err(ConfigError::Invalid("max-undo must be positive".into()));
		}
		Ok(())
	}

	/// Returns the subset of options that shape the row structure.
	pub fn layout(&self) -> LayoutConfig {
		LayoutConfig {
			code_type: self.code_type,
			view_mode: self.view_mode,
			row_wrapping: self.row_wrapping,
			max_bytes_per_row: self.max_bytes_per_row,
			wrapping_group_size: self.wrapping_group_size,
			position_code_type: self.position_code_type,
			min_row_position_length: self.min_row_position_length,
			max_row_position_length: self.max_row_position_length,
		}
	}

	/// Returns how many bytes may still be added to data of `size` bytes.
	pub fn growth_room(&self, size: u64) -> u64 {
		match (self.edit_mode, self.capacity) {
			(EditMode::Expanding, _) | (EditMode::Capped, None) => u64::MAX,
			(EditMode::Capped, Some(capacity)) => capacity.saturating_sub(size),
			(EditMode::ReadOnly | EditMode::Inplace, _) => 0,
		}
	}
}
