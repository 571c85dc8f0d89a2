//! Page initialization
//!
//! [`enhance`] is the single entry point run once the page has loaded. It
//! attaches every behavior independently, so a page lacking, say, a table
//! still gets its navigation highlight and counter.

use crate::behaviors::{
	attach_character_counter, bind_sort_headers, bind_submit_loading, highlight_active_nav,
	schedule_notice_dismissal,
};
use crate::dom::{NavTarget, Page, Timers};
use crate::settings::EnhanceSettings;
use crate::{debug_log, warn_log};

/// What [`enhance`] found and attached on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnhanceReport {
	/// Navigation link that was highlighted.
	pub active_nav: Option<NavTarget>,
	/// Number of forms given a loading state.
	pub forms: usize,
	/// Number of notices scheduled for dismissal.
	pub notices: usize,
	/// Whether the message character counter was added.
	pub character_counter: bool,
	/// Number of header cells that sort the table.
	pub sortable_headers: usize,
}

/// Reads settings overrides from the page, falling back to defaults.
///
/// Invalid overrides are logged and ignored as a whole.
pub fn load_settings<P: Page>(page: &P) -> EnhanceSettings {
	let Some(source) = page.settings_source() else {
		return EnhanceSettings::default();
	};
	match EnhanceSettings::from_json(&source) {
		Ok(settings) => settings,
		Err(err) => {
			warn_log!("Ignoring page settings: {}", err);
			EnhanceSettings::default()
		}
	}
}

/// Attaches every behavior to `page`.
pub fn enhance<P, T>(page: &P, timers: &T, settings: &EnhanceSettings) -> EnhanceReport
where
	P: Page,
	T: Timers,
{
	let report = EnhanceReport {
		active_nav: highlight_active_nav(page, settings),
		forms: bind_submit_loading(page, settings),
		notices: schedule_notice_dismissal(page, timers, settings),
		character_counter: attach_character_counter(page, settings).is_some(),
		sortable_headers: bind_sort_headers(page),
	};
	debug_log!("Enhanced page: {:?}", report);
	report
}
