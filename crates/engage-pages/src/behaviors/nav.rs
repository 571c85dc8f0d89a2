//! Active navigation highlighting

use crate::dom::{NavTarget, Node, Page};
use crate::settings::EnhanceSettings;

/// Marks the navigation link for the current path as active.
///
/// Returns the highlighted target, or `None` when the path matches neither
/// link or the matching link is missing.
pub fn highlight_active_nav<P: Page>(page: &P, settings: &EnhanceSettings) -> Option<NavTarget> {
	let path = page.current_path();
	let target = if path == settings.home_path {
		NavTarget::Home
	} else if path == settings.admin_path {
		NavTarget::Admin
	} else {
		return None;
	};

	let link = page.nav_link(target)?;
	link.add_class(&settings.active_class);
	Some(target)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{MemoryPage, nav_link_fragment};
	use rstest::rstest;

	fn page_at(path: &str) -> MemoryPage {
		MemoryPage::new(path)
			.with(nav_link_fragment(NavTarget::Home))
			.with(nav_link_fragment(NavTarget::Admin))
	}

	#[rstest]
	#[case("/", Some(NavTarget::Home))]
	#[case("/feedback", Some(NavTarget::Admin))]
	#[case("/submit", None)]
	#[case("/feedback/", None)]
	fn test_highlight_by_path(#[case] path: &str, #[case] expected: Option<NavTarget>) {
		let page = page_at(path);

		let highlighted = highlight_active_nav(&page, &EnhanceSettings::default());

		assert_eq!(highlighted, expected);
		for target in [NavTarget::Home, NavTarget::Admin] {
			let link = page.nav_link(target).unwrap();
			assert_eq!(link.has_class("active"), expected == Some(target));
		}
	}

	#[rstest]
	fn test_missing_link_is_skipped() {
		let page = MemoryPage::new("/").with(nav_link_fragment(NavTarget::Admin));

		assert_eq!(highlight_active_nav(&page, &EnhanceSettings::default()), None);
		assert!(!page.nav_link(NavTarget::Admin).unwrap().has_class("active"));
	}

	#[rstest]
	fn test_custom_paths() {
		let page = page_at("/admin");
		let settings = EnhanceSettings::default().with_nav_paths("/home", "/admin");

		assert_eq!(highlight_active_nav(&page, &settings), Some(NavTarget::Admin));
	}
}
