//! # Engage
//!
//! Client-side enhancements for the engage-web feedback portal, where parents
//! submit feedback about a university and staff review it on an admin page.
//!
//! The portal's pages are rendered on the server. This crate adds the small
//! amount of interactivity they need, compiled to WebAssembly:
//!
//! - the active navigation link is highlighted
//! - submit buttons show a loading state
//! - result notices fade out and disappear
//! - the feedback message gets a live character counter
//! - the admin table sorts by column and exports to CSV
//!
//! ## Crates
//!
//! - [`tables`] (`engage-tables`): natural ordering, stable row sort and CSV
//!   encoding. No DOM, no WASM.
//! - [`pages`] (`engage-pages`): the behaviors, written against small page
//!   and timer traits, plus the web-sys backend and `#[wasm_bindgen]`
//!   exports.
//!
//! ## Feature Flags
//!
//! - `testing` - In-memory page and manual timers
//! - `console_error_panic_hook` - Readable panics in the browser console
//! - `debug-hooks` - Verbose `debug_log!` output in debug builds
//!
//! ## Quick Example
//!
//! ```rust
//! use engage::tables::TableSnapshot;
//!
//! let mut table = TableSnapshot::with_header(
//! 	vec!["Name".into(), "Score".into()],
//! 	vec![vec!["b".into(), "10".into()], vec!["a".into(), "9".into()]],
//! );
//! table.sort_by_column(1).unwrap();
//!
//! assert_eq!(table.to_csv().unwrap(), "\"Name\",\"Score\"\n\"a\",\"9\"\n\"b\",\"10\"");
//! ```

pub mod pages;
pub mod tables;

// Re-export commonly used types
pub use engage_pages::{EnhanceReport, EnhanceSettings, PageError, enhance, load_settings};
pub use engage_tables::{CsvDocument, TableError, TableSnapshot, natural_cmp};
