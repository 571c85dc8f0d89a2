//! Page behaviors compiled to WebAssembly
//!
//! This module provides access to engage-pages: the navigation highlight,
//! submit loading state, notice auto-dismiss, character counter, table sort
//! and CSV export attached to the portal's server-rendered pages.
//!
//! ## Example
//!
//! ```rust,ignore
//! use engage::pages::testing::{ManualTimers, MemoryPage, table_fragment};
//! use engage::pages::{EnhanceSettings, enhance};
//!
//! let page = MemoryPage::new("/admin")
//! 	.with(table_fragment(&["Parent", "Actions"], &[&["Ravi", "View"]]));
//! let report = enhance(&page, &ManualTimers::new(), &EnhanceSettings::default());
//! assert_eq!(report.sortable_headers, 1);
//! ```

// Re-export all engage-pages functionality
pub use engage_pages::*;
