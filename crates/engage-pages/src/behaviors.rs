//! Page behaviors
//!
//! Each behavior is independent: it looks up the elements it needs through
//! the [`Page`](crate::dom::Page) capability, does nothing when they are
//! absent, and attaches its own listeners.

pub mod counter;
pub mod forms;
pub mod nav;
pub mod notices;
pub mod table;

/// Class identifying dismissible result notices.
pub const NOTICE_CLASS: &str = "result-card";

pub use counter::{attach_character_counter, counter_color, counter_message};
pub use forms::{bind_submit_loading, show_loading};
pub use nav::highlight_active_nav;
pub use notices::{dismiss_later, schedule_notice_dismissal};
pub use table::{bind_sort_headers, export_table_to_csv, read_table, sort_table};
