//! Page enhancement error types.

use engage_tables::TableError;
use thiserror::Error;

/// Result type for page operations.
pub type PageResult<T> = Result<T, PageError>;

/// Errors raised by page operations.
///
/// Event bindings never surface these to the user; they log them and leave
/// the page as it was.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PageError {
	/// The page has no table.
	#[error("no table found on the page")]
	TableNotFound,

	/// The table has no body section to reorder.
	#[error("table has no body section")]
	TableBodyNotFound,

	/// Sorting or encoding the table failed.
	#[error(transparent)]
	Table(#[from] TableError),

	/// The host refused to start a download.
	#[error("download failed: {0}")]
	Download(String),

	/// Settings were readable but inconsistent.
	#[error("invalid settings: {0}")]
	InvalidSettings(String),

	/// Settings JSON could not be parsed.
	#[error("failed to parse settings: {0}")]
	SettingsParse(#[from] serde_json::Error),
}
