//! # engage-pages
//!
//! Browser-side enhancements for the engage-web feedback portal, compiled to
//! WebAssembly.
//!
//! ## Behaviors
//!
//! - **Navigation highlight**: marks the home or admin link as active based
//!   on the current path.
//! - **Submit loading state**: disables a form's submit button and shows a
//!   spinner while the request is in flight.
//! - **Notice auto-dismiss**: fades and removes result notices after a delay.
//! - **Character counter**: live length feedback under the message field.
//! - **Table sort**: clicking a header sorts the body rows by that column.
//! - **CSV export**: downloads the table as a quoted CSV file.
//!
//! ## Architecture
//!
//! Behaviors are written against three capabilities defined in [`dom`]:
//! [`Page`] for element lookup, [`Node`] for element mutation and events,
//! and [`Timers`] for deferred work. In the browser these are provided by
//! the `web` module; the `testing` feature provides in-memory versions so
//! every behavior runs in ordinary `cargo test`.
//!
//! ```text
//! start() ──> load_settings ──> enhance ──┬─> highlight_active_nav
//!                                         ├─> bind_submit_loading
//!                                         ├─> schedule_notice_dismissal
//!                                         ├─> attach_character_counter
//!                                         └─> bind_sort_headers
//! ```
//!
//! ## JavaScript surface
//!
//! Besides running on load, the module exports `sortTable(column)` and
//! `exportTableToCSV(filename)` for inline handlers in server-rendered
//! templates.
//!
//! ## Configuration
//!
//! Paths, delays and thresholds come from [`EnhanceSettings`]. A page may
//! override any of them with a JSON element:
//!
//! ```html
//! <script id="engage-settings" type="application/json">
//!   {"admin_path": "/staff", "message_min_length": 10}
//! </script>
//! ```
//!
//! ## Features
//!
//! - `console_error_panic_hook`: readable panic messages in the browser console
//! - `testing`: in-memory [`Page`] and [`Timers`] implementations
//! - `debug-hooks`: enables `debug_log!` output in debug builds

#![warn(missing_docs)]

pub mod behaviors;
pub mod dom;
pub mod enhance;
pub mod error;
pub mod logging;
pub mod settings;

// In-memory page for host-side tests
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Browser backend and wasm-bindgen exports
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types
pub use behaviors::{export_table_to_csv, read_table, sort_table};
pub use dom::{NavTarget, Node, Page, PageEvent, Timers};
pub use enhance::{EnhanceReport, enhance, load_settings};
pub use error::{PageError, PageResult};
pub use settings::EnhanceSettings;

#[cfg(target_arch = "wasm32")]
pub use web::{BrowserTimers, WebNode, WebPage};

// Paths used by the exported logging macros
#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
