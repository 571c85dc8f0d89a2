//! Property-based tests for column sorting
//!
//! Uses proptest to verify properties that should hold for all cell values.

use engage_tables::{TableSnapshot, natural_cmp, sort_by_column};
use proptest::prelude::*;
use std::cmp::Ordering;

fn cell_text() -> impl Strategy<Value = String> {
	prop_oneof![
		r"[0-9]{1,4}",
		r"[a-zA-Z]{1,6}",
		r"[a-zA-Z ]{0,3}[0-9]{0,3}[a-zA-Zé,'\x22 ]{0,4}",
	]
}

fn rows() -> impl Strategy<Value = Vec<Vec<String>>> {
	prop::collection::vec(prop::collection::vec(cell_text(), 3), 0..24)
}

proptest! {
	/// Property: sorting twice by the same column gives the same order as sorting once
	#[test]
	fn prop_sort_is_idempotent(body in rows(), column in 0usize..3) {
		let once = sort_by_column(body, column, Vec::clone).unwrap();
		let twice = sort_by_column(once.clone(), column, Vec::clone).unwrap();

		prop_assert_eq!(once, twice);
	}

	/// Property: sorting only permutes rows, it never adds, drops or edits them
	#[test]
	fn prop_sort_is_permutation(body in rows(), column in 0usize..3) {
		let indexed: Vec<(usize, Vec<String>)> = body.iter().cloned().enumerate().collect();
		let sorted = sort_by_column(indexed, column, |(_, cells)| cells.clone()).unwrap();

		let mut seen: Vec<usize> = sorted.iter().map(|(index, _)| *index).collect();
		seen.sort_unstable();
		prop_assert_eq!(seen, (0..body.len()).collect::<Vec<_>>());
		for (index, cells) in &sorted {
			prop_assert_eq!(cells, &body[*index]);
		}
	}

	/// Property: adjacent rows are in non-decreasing order of their trimmed key
	#[test]
	fn prop_sorted_rows_are_ordered(body in rows(), column in 0usize..3) {
		let sorted = sort_by_column(body, column, Vec::clone).unwrap();

		for pair in sorted.windows(2) {
			let ordering = natural_cmp(pair[0][column].trim(), pair[1][column].trim());
			prop_assert_ne!(ordering, Ordering::Greater);
		}
	}

	/// Property: comparison is antisymmetric
	#[test]
	fn prop_compare_is_antisymmetric(a in cell_text(), b in cell_text()) {
		prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
	}

	/// Property: export has one line per row when no cell contains a newline
	#[test]
	fn prop_export_row_count(body in rows()) {
		let header = vec!["A".to_string(), "B".to_string(), "C".to_string()];
		let table = TableSnapshot::with_header(header, body.clone());
		let csv = table.to_csv().unwrap();

		prop_assert_eq!(csv.split('\n').count(), body.len() + 1);
		for line in csv.split('\n') {
			prop_assert!(line.starts_with('"') && line.ends_with('"'));
		}
	}
}
