//! Error types for table sorting and export

use thiserror::Error;

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Table operation errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
	/// A row has no cell at the requested column.
	#[error("column {column} is out of range for row {row} with {width} cells")]
	ColumnOutOfRange {
		/// Requested column index.
		column: usize,
		/// Index of the offending row within the sorted section.
		row: usize,
		/// Number of cells the row actually has.
		width: usize,
	},

	/// The CSV writer rejected a record.
	#[error("csv encoding failed: {0}")]
	Csv(#[from] csv::Error),

	/// Flushing the CSV buffer failed.
	#[error("csv buffer error: {0}")]
	Io(#[from] std::io::Error),

	/// Encoded output was not valid UTF-8.
	#[error("csv output is not valid utf-8: {0}")]
	Encoding(#[from] std::string::FromUtf8Error),
}
