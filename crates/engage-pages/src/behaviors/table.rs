//! Table sorting and CSV export on the page
//!
//! Both operations read the table fresh on every call, so they always act on
//! the current DOM, including any order left by a previous sort.

use std::rc::Rc;

use engage_tables::{CsvDocument, TableSnapshot, is_sortable_column, sort_by_column};

use crate::dom::{Node, Page, PageEvent};
use crate::error::{PageError, PageResult};
use crate::{info_log, warn_log};

/// Sorts the table's body rows by the text of `column`, ascending.
///
/// Cell text is trimmed before comparison and compared with
/// [`engage_tables::natural_cmp`]. Equal keys keep their current order. The
/// existing row elements are re-attached; nothing is created and cell
/// contents are untouched. If any row is too narrow for `column` the body is
/// left as it was.
pub fn sort_table<P: Page>(page: &P, column: usize) -> PageResult<()> {
	let table = page.table().ok_or(PageError::TableNotFound)?;
	let body = page.table_body(&table).ok_or(PageError::TableBodyNotFound)?;

	let rows = page.rows(&body);
	let sorted = sort_by_column(rows, column, |row| {
		page.cells(row).iter().map(Node::text_content).collect()
	})?;
	page.replace_rows(&body, &sorted);
	Ok(())
}

/// Reads the rendered text of every table row, header first.
pub fn read_table<P: Page>(page: &P) -> PageResult<TableSnapshot> {
	let table = page.table().ok_or(PageError::TableNotFound)?;
	let rows = page
		.rows(&table)
		.iter()
		.map(|row| page.cells(row).iter().map(Node::rendered_text).collect())
		.collect();
	Ok(TableSnapshot::from_rows(rows))
}

/// Encodes the table as CSV and starts a download named `filename`.
///
/// Returns the document that was handed to the download.
pub fn export_table_to_csv<P: Page>(page: &P, filename: &str) -> PageResult<CsvDocument> {
	let snapshot = read_table(page)?;
	let document = CsvDocument::new(filename, snapshot.to_csv()?);
	page.download(&document)?;
	info_log!(
		"Exported {} rows to {}",
		snapshot.row_count(),
		document.filename()
	);
	Ok(document)
}

/// Makes every header cell except the last one sort the table on click.
///
/// Returns the number of sortable headers.
pub fn bind_sort_headers<P: Page>(page: &P) -> usize {
	let Some(table) = page.table() else {
		return 0;
	};
	let headers = page.header_cells(&table);
	let count = headers.len();

	let mut bound = 0;
	for (index, header) in headers.iter().enumerate() {
		if !is_sortable_column(index, count) {
			continue;
		}
		header.set_style("cursor", "pointer");
		let page = page.clone();
		header.on(
			PageEvent::Click,
			Rc::new(move || {
				if let Err(err) = sort_table(&page, index) {
					warn_log!("Sort by column {} skipped: {}", index, err);
				}
			}),
		);
		bound += 1;
	}
	bound
}
