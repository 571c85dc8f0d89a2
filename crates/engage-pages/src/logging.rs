//! Logging abstraction layer for engage-pages
//!
//! These macros work on both WASM and native targets. In the browser they
//! write to the console; natively they forward to `tracing`, so host-side
//! tests and tools see the same events through their subscriber.
//! All macros are no-ops in release builds.
//!
//! ## Macro Overview
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-hooks` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | Required | None | `console.info` | `tracing::info!` |
//! | `warn_log!` | Required | None | `console.warn` | `tracing::warn!` |
//! | `error_log!` | Required | None | `console.error` | `tracing::error!` |
//!
//! ## Example
//!
//! ```ignore
//! use engage_pages::{info_log, warn_log};
//!
//! info_log!("Enhanced page: {:?}", report);
//! warn_log!("Sort skipped: {}", error);
//! ```

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!("{}", format!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
///
/// # Example
///
/// ```ignore
/// info_log!("Attached {} sort headers", count);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!("{}", format!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
///
/// Used for operations that were requested but could not apply to the
/// current page, such as sorting when no table is present.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!("{}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!("{}", format!($($arg)*));
	}};
}

/// No-op error_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	// Import macros from crate root
	use crate::{debug_log, error_log, info_log, warn_log};

	#[rstest]
	fn test_logging_macros_compile() {
		debug_log!("Debug message: {}", 42);
		info_log!("Info message: {}", "sort");
		warn_log!("Warning message: {:?}", vec![1, 2, 3]);
		error_log!("Error message: {}", "download");
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		debug_log!("Simple debug");
		info_log!("Simple info");
		warn_log!("Simple warning");
		error_log!("Simple error");
	}
}
