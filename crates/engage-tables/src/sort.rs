//! Column sorting and header trigger policy
//!
//! Sorting is single-column and ascending. Keys are the trimmed cell text and
//! are ordered with [`natural_cmp`]. The sort is stable: rows whose keys
//! compare equal keep the order they had before the sort, which also makes
//! sorting twice by the same column a no-op.

use crate::compare::natural_cmp;
use crate::error::{Result, TableError};

/// Returns whether the header cell at `index` triggers a sort.
///
/// The last header column holds row actions and is never sortable.
pub fn is_sortable_column(index: usize, header_len: usize) -> bool {
	index + 1 < header_len
}

/// Extracts the sort key of every row for `column`.
///
/// `cells` returns the text of each cell of a row in order. Keys are trimmed
/// of surrounding whitespace. Fails if any row is narrower than `column + 1`.
pub fn column_keys<R, F>(rows: &[R], column: usize, cells: F) -> Result<Vec<String>>
where
	F: Fn(&R) -> Vec<String>,
{
	rows.iter()
		.enumerate()
		.map(|(index, row)| {
			let mut texts = cells(row);
			let width = texts.len();
			if column >= width {
				return Err(TableError::ColumnOutOfRange {
					column,
					row: index,
					width,
				});
			}
			Ok(texts.swap_remove(column).trim().to_string())
		})
		.collect()
}

/// Reorders `rows` by their paired `keys`, ascending and stable.
///
/// # Panics
///
/// Panics if `rows` and `keys` have different lengths.
pub fn sort_by_keys<R>(rows: Vec<R>, keys: Vec<String>) -> Vec<R> {
	assert_eq!(rows.len(), keys.len(), "every row needs exactly one sort key");

	let mut keyed: Vec<(String, R)> = keys.into_iter().zip(rows).collect();
	keyed.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
	keyed.into_iter().map(|(_, row)| row).collect()
}

/// Sorts `rows` by the text of their cell at `column`.
///
/// The rows themselves are moved, never rebuilt, so row identity is
/// preserved. Keys are validated before anything is reordered.
///
/// # Example
///
/// ```rust
/// use engage_tables::sort_by_column;
///
/// let rows = vec![vec!["10"], vec!["9"], vec!["2"]];
/// let sorted = sort_by_column(rows, 0, |row| {
/// 	row.iter().map(|cell| cell.to_string()).collect()
/// })
/// .unwrap();
/// assert_eq!(sorted, vec![vec!["2"], vec!["9"], vec!["10"]]);
/// ```
pub fn sort_by_column<R, F>(rows: Vec<R>, column: usize, cells: F) -> Result<Vec<R>>
where
	F: Fn(&R) -> Vec<String>,
{
	let keys = column_keys(&rows, column, cells)?;
	Ok(sort_by_keys(rows, keys))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn texts(row: &Vec<&str>) -> Vec<String> {
		row.iter().map(|cell| cell.to_string()).collect()
	}

	#[rstest]
	#[case(0, 3, true)]
	#[case(1, 3, true)]
	#[case(2, 3, false)]
	#[case(0, 1, false)]
	#[case(0, 0, false)]
	fn test_is_sortable_column(#[case] index: usize, #[case] len: usize, #[case] expected: bool) {
		assert_eq!(is_sortable_column(index, len), expected);
	}

	#[rstest]
	fn test_column_keys_are_trimmed() {
		let rows = vec![vec!["  Bob \n", "x"], vec!["\tAlice", "y"]];
		let keys = column_keys(&rows, 0, texts).unwrap();
		assert_eq!(keys, vec!["Bob", "Alice"]);
	}

	#[rstest]
	fn test_column_out_of_range_reports_row() {
		let rows = vec![vec!["a", "b"], vec!["c"]];
		let err = column_keys(&rows, 1, texts).unwrap_err();
		assert!(matches!(
			err,
			TableError::ColumnOutOfRange {
				column: 1,
				row: 1,
				width: 1
			}
		));
	}

	#[rstest]
	fn test_sort_is_stable_for_equal_keys() {
		let rows = vec![vec!["b", "1"], vec!["A", "2"], vec!["a", "3"], vec!["B", "4"]];
		let sorted = sort_by_column(rows, 0, texts).unwrap();
		let order: Vec<&str> = sorted.iter().map(|row| row[1]).collect();
		assert_eq!(order, vec!["2", "3", "1", "4"]);
	}

	#[rstest]
	fn test_sort_places_letters_without_decomposition_by_base_letter() {
		let names = [
			"Zofia", "Łukasz", "Mona", "Øystein", "Pia", "Weiß", "Weit", "Ægir", "Bob", "Đorđe",
			"Eva",
		];
		let rows: Vec<Vec<&str>> = names.iter().map(|name| vec![*name]).collect();

		let sorted = sort_by_column(rows, 0, texts).unwrap();

		let order: Vec<&str> = sorted.iter().map(|row| row[0]).collect();
		assert_eq!(
			order,
			vec![
				"Ægir", "Bob", "Đorđe", "Eva", "Łukasz", "Mona", "Øystein", "Pia", "Weiß", "Weit",
				"Zofia",
			]
		);
	}

	#[rstest]
	fn test_sort_empty_rows() {
		let rows: Vec<Vec<&str>> = Vec::new();
		assert!(sort_by_column(rows, 5, texts).unwrap().is_empty());
	}
}
