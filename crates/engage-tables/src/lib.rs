//! Table sorting and CSV export core for engage-web
//!
//! This crate holds the parts of the page enhancement layer that have real
//! semantics and no DOM dependency: ordering cell text the way a browser's
//! `localeCompare` does with numeric collation, reordering rows by a column,
//! and encoding a table as CSV.
//!
//! # Features
//!
//! - **Natural comparison**: digit runs compare by value, letters ignore case and accents
//! - **Column sorting**: stable, single-column, ascending
//! - **Trigger policy**: the last header column is an action column and never sorts
//! - **Export**: every field quoted, rows joined by `\n`, UTF-8 payload
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableSnapshot] --> B[sort_by_column]
//!     B --> C[natural_cmp]
//!     A --> D[encode_csv]
//!     D --> E[CsvDocument]
//! ```
//!
//! # Example
//!
//! ```rust
//! use engage_tables::TableSnapshot;
//!
//! let mut table = TableSnapshot::from_rows(vec![
//! 	vec!["Name".to_string(), "Score".to_string()],
//! 	vec!["b".to_string(), "10".to_string()],
//! 	vec!["a".to_string(), "9".to_string()],
//! ]);
//! table.sort_by_column(1).unwrap();
//! assert_eq!(table.body()[0][1], "9");
//! assert_eq!(table.to_csv().unwrap(), "\"Name\",\"Score\"\n\"a\",\"9\"\n\"b\",\"10\"");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod compare;
pub mod error;
pub mod export;
pub mod snapshot;
pub mod sort;

// Re-exports for convenience
pub use compare::natural_cmp;
pub use error::{Result, TableError};
pub use export::{CSV_MEDIA_TYPE, CsvDocument, encode_csv};
pub use snapshot::TableSnapshot;
pub use sort::{column_keys, is_sortable_column, sort_by_column, sort_by_keys};
