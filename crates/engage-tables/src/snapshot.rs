//! Owned copy of a table's text

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export::encode_csv;
use crate::sort::{column_keys, sort_by_keys};

/// The text of a table, row by row, in document order.
///
/// The first row is the header; the remaining rows form the body. Sorting
/// only ever reorders the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
	rows: Vec<Vec<String>>,
}

impl TableSnapshot {
	/// Creates an empty snapshot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a snapshot from rows in document order, header first.
	pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
		Self { rows }
	}

	/// Creates a snapshot from a header and body rows.
	pub fn with_header(header: Vec<String>, body: Vec<Vec<String>>) -> Self {
		let mut rows = Vec::with_capacity(body.len() + 1);
		rows.push(header);
		rows.extend(body);
		Self { rows }
	}

	/// Returns the header row, if any.
	pub fn header(&self) -> Option<&[String]> {
		self.rows.first().map(Vec::as_slice)
	}

	/// Returns the body rows.
	pub fn body(&self) -> &[Vec<String>] {
		self.rows.get(1..).unwrap_or_default()
	}

	/// Returns every row, header first.
	pub fn rows(&self) -> &[Vec<String>] {
		&self.rows
	}

	/// Returns the total number of rows including the header.
	pub fn row_count(&self) -> usize {
		self.rows.len()
	}

	/// Sorts the body by the text of `column`, ascending and stable.
	///
	/// Leaves the snapshot untouched if any body row is too narrow.
	pub fn sort_by_column(&mut self, column: usize) -> Result<()> {
		if self.rows.len() < 2 {
			return Ok(());
		}
		let keys = column_keys(self.body(), column, Vec::clone)?;
		let body = self.rows.split_off(1);
		self.rows.extend(sort_by_keys(body, keys));
		Ok(())
	}

	/// Encodes the whole table as CSV.
	pub fn to_csv(&self) -> Result<String> {
		encode_csv(&self.rows)
	}
}
