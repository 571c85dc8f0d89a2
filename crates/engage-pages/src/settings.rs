//! Enhancement settings
//!
//! Every value has a default matching the portal's stock markup and styles,
//! so pages work without any configuration. A page may override any subset
//! by embedding JSON in an element with id [`SETTINGS_ELEMENT_ID`]:
//!
//! ```html
//! <script type="application/json" id="engage-settings">
//!   { "notice_fade_delay_ms": 8000, "message_min_length": 10 }
//! </script>
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// Id of the element holding settings overrides.
pub const SETTINGS_ELEMENT_ID: &str = "engage-settings";

/// Delay before a result notice starts fading.
pub const DEFAULT_NOTICE_FADE_DELAY: Duration = Duration::from_millis(5000);

/// Delay between the fade starting and the notice being removed.
pub const DEFAULT_NOTICE_REMOVE_DELAY: Duration = Duration::from_millis(500);

/// Text colors of the character counter for each length band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterColors {
	/// Color before any input.
	pub idle: String,
	/// Color below the minimum length.
	pub too_short: String,
	/// Color between the minimum and the warning threshold.
	pub short: String,
	/// Color at or above the warning threshold.
	pub ok: String,
}

impl Default for CounterColors {
	fn default() -> Self {
		Self {
			idle: "#64748b".to_string(),
			too_short: "#ef4444".to_string(),
			short: "#f59e0b".to_string(),
			ok: "#10b981".to_string(),
		}
	}
}

/// Settings for every page behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnhanceSettings {
	/// Path on which the home link is highlighted.
	pub home_path: String,
	/// Path on which the admin link is highlighted.
	pub admin_path: String,
	/// Class added to the active navigation link.
	pub active_class: String,
	/// Label shown next to the spinner while a form submits.
	pub submit_label: String,
	/// Class added to a submit button while its form submits.
	pub loading_class: String,
	/// Milliseconds before a notice fades.
	pub notice_fade_delay_ms: u64,
	/// Milliseconds between the fade and removal.
	pub notice_remove_delay_ms: u64,
	/// CSS transition applied when a notice fades.
	pub notice_transition: String,
	/// `name` of the textarea that gets a character counter.
	pub message_field: String,
	/// Minimum message length announced by the counter.
	pub message_min_length: usize,
	/// Length below which the counter uses the warning color.
	pub message_warn_below: usize,
	/// Counter colors.
	pub counter_colors: CounterColors,
}

impl Default for EnhanceSettings {
	fn default() -> Self {
		Self {
			home_path: "/".to_string(),
			admin_path: "/feedback".to_string(),
			active_class: "active".to_string(),
			submit_label: "Processing...".to_string(),
			loading_class: "loading".to_string(),
			notice_fade_delay_ms: DEFAULT_NOTICE_FADE_DELAY.as_millis() as u64,
			notice_remove_delay_ms: DEFAULT_NOTICE_REMOVE_DELAY.as_millis() as u64,
			notice_transition: "opacity 0.5s ease".to_string(),
			message_field: "message".to_string(),
			message_min_length: 5,
			message_warn_below: 100,
			counter_colors: CounterColors::default(),
		}
	}
}

impl EnhanceSettings {
	/// Creates settings with all defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings overrides from JSON and validates them.
	///
	/// Missing keys keep their defaults; unknown keys are rejected.
	pub fn from_json(json: &str) -> PageResult<Self> {
		let settings: Self = serde_json::from_str(json)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that the settings are consistent.
	pub fn validate(&self) -> PageResult<()> {
		if self.message_warn_below < self.message_min_length {
			return Err(PageError::InvalidSettings(format!(
				"message_warn_below ({}) is lower than message_min_length ({})",
				self.message_warn_below, self.message_min_length
			)));
		}
		if self.message_field.is_empty() {
			return Err(PageError::InvalidSettings(
				"message_field must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Sets the home and admin navigation paths.
	pub fn with_nav_paths(mut self, home: impl Into<String>, admin: impl Into<String>) -> Self {
		self.home_path = home.into();
		self.admin_path = admin.into();
		self
	}

	/// Sets the notice fade and removal delays.
	pub fn with_notice_delays(mut self, fade: Duration, remove: Duration) -> Self {
		self.notice_fade_delay_ms = fade.as_millis() as u64;
		self.notice_remove_delay_ms = remove.as_millis() as u64;
		self
	}

	/// Sets the counter's minimum length and warning threshold.
	pub fn with_message_limits(mut self, minimum: usize, warn_below: usize) -> Self {
		self.message_min_length = minimum;
		self.message_warn_below = warn_below;
		self
	}

	/// Sets the submit label.
	pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
		self.submit_label = label.into();
		self
	}

	/// Returns the notice fade delay.
	pub fn notice_fade_delay(&self) -> Duration {
		Duration::from_millis(self.notice_fade_delay_ms)
	}

	/// Returns the delay between fade and removal.
	pub fn notice_remove_delay(&self) -> Duration {
		Duration::from_millis(self.notice_remove_delay_ms)
	}

	/// Returns the markup placed in a submit button while its form submits.
	pub fn loading_markup(&self) -> String {
		format!("<span class=\"spinner\"></span> {}", self.submit_label)
	}
}
