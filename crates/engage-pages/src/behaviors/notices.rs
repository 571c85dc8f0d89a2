//! Auto-dismissal of result notices

use std::time::Duration;

use crate::dom::{Node, Page, Timers};
use crate::settings::EnhanceSettings;

/// Fades `notice` after `fade`, then removes it after a further `remove`.
///
/// Removing a notice that something else already took off the page is a
/// no-op.
pub fn dismiss_later<N, T>(notice: N, timers: &T, fade: Duration, remove: Duration, transition: String)
where
	N: Node,
	T: Timers,
{
	let chained = timers.clone();
	timers.set_timeout(
		fade,
		Box::new(move || {
			notice.set_style("opacity", "0");
			notice.set_style("transition", &transition);
			chained.set_timeout(remove, Box::new(move || notice.remove()));
		}),
	);
}

/// Schedules every result notice on the page for dismissal.
///
/// Returns the number of notices scheduled.
pub fn schedule_notice_dismissal<P, T>(page: &P, timers: &T, settings: &EnhanceSettings) -> usize
where
	P: Page,
	T: Timers,
{
	let notices = page.notices();
	let count = notices.len();
	for notice in notices {
		dismiss_later(
			notice,
			timers,
			settings.notice_fade_delay(),
			settings.notice_remove_delay(),
			settings.notice_transition.clone(),
		);
	}
	count
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{ManualTimers, MemoryPage, notice_fragment};
	use rstest::*;

	#[fixture]
	fn page() -> MemoryPage {
		MemoryPage::new("/")
			.with(notice_fragment("Feedback #1 received"))
			.with(notice_fragment("Routed to Hostel"))
	}

	#[rstest]
	fn test_fade_then_remove(page: MemoryPage) {
		let timers = ManualTimers::new();
		assert_eq!(
			schedule_notice_dismissal(&page, &timers, &EnhanceSettings::default()),
			2
		);
		let notices = page.notices();

		timers.advance(Duration::from_millis(4999));
		assert!(notices.iter().all(|n| n.style("opacity").is_none() && n.is_attached()));

		timers.advance(Duration::from_millis(1));
		for notice in &notices {
			assert_eq!(notice.style("opacity").as_deref(), Some("0"));
			assert_eq!(notice.style("transition").as_deref(), Some("opacity 0.5s ease"));
			assert!(notice.is_attached());
		}

		timers.advance(Duration::from_millis(499));
		assert!(notices.iter().all(|n| n.is_attached()));

		timers.advance(Duration::from_millis(1));
		assert!(notices.iter().all(|n| !n.is_attached()));
		assert!(page.notices().is_empty());
		assert_eq!(timers.pending(), 0);
	}

	#[rstest]
	fn test_removal_of_already_removed_notice_is_noop(page: MemoryPage) {
		let timers = ManualTimers::new();
		schedule_notice_dismissal(&page, &timers, &EnhanceSettings::default());

		for notice in page.notices() {
			notice.remove();
		}
		timers.advance(Duration::from_secs(10));

		assert!(page.notices().is_empty());
		assert_eq!(timers.pending(), 0);
	}

	#[rstest]
	fn test_custom_delays(page: MemoryPage) {
		let timers = ManualTimers::new();
		let settings = EnhanceSettings::default()
			.with_notice_delays(Duration::from_millis(100), Duration::from_millis(0));
		schedule_notice_dismissal(&page, &timers, &settings);

		timers.advance(Duration::from_millis(100));

		assert!(page.notices().is_empty());
	}
}
