//! Table sorting and CSV export without a DOM

// Re-export all engage-tables functionality
pub use engage_tables::*;
