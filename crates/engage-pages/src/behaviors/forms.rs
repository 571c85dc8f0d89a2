//! Submit button loading state

use std::rc::Rc;

use crate::dom::{Node, Page, PageEvent};
use crate::settings::EnhanceSettings;

/// Puts a submit button into its loading state.
pub fn show_loading<N: Node>(button: &N, markup: &str, loading_class: &str) {
	button.set_inner_html(markup);
	button.set_disabled(true);
	button.add_class(loading_class);
}

/// Attaches a submit listener to every form on the page.
///
/// On submit, the form's submit button (if it has one) shows a spinner and
/// is disabled. The submission itself proceeds. Returns the number of forms
/// bound.
pub fn bind_submit_loading<P: Page>(page: &P, settings: &EnhanceSettings) -> usize {
	let forms = page.forms();
	for form in &forms {
		let page = page.clone();
		let target = form.clone();
		let markup = settings.loading_markup();
		let loading_class = settings.loading_class.clone();
		form.on(
			PageEvent::Submit,
			Rc::new(move || {
				if let Some(button) = page.submit_button(&target) {
					show_loading(&button, &markup, &loading_class);
				}
			}),
		);
	}
	forms.len()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{MemoryPage, form_fragment};
	use rstest::rstest;

	#[rstest]
	fn test_submit_shows_spinner() {
		let page = MemoryPage::new("/").with(form_fragment(true));
		assert_eq!(bind_submit_loading(&page, &EnhanceSettings::default()), 1);

		let form = page.forms().remove(0);
		let button = page.submit_button(&form).unwrap();
		assert!(!button.is_disabled());

		form.submit();

		assert_eq!(
			button.inner_html().as_deref(),
			Some("<span class=\"spinner\"></span> Processing...")
		);
		assert!(button.is_disabled());
		assert!(button.has_class("loading"));
	}

	#[rstest]
	fn test_form_without_button_is_bound_but_inert() {
		let page = MemoryPage::new("/").with(form_fragment(false));
		assert_eq!(bind_submit_loading(&page, &EnhanceSettings::default()), 1);

		let form = page.forms().remove(0);
		form.submit();

		assert_eq!(form.listener_count(PageEvent::Submit), 1);
	}

	#[rstest]
	fn test_each_form_updates_only_its_button() {
		let page = MemoryPage::new("/")
			.with(form_fragment(true))
			.with(form_fragment(true));
		bind_submit_loading(&page, &EnhanceSettings::default());
		let forms = page.forms();

		forms[1].submit();

		assert!(!page.submit_button(&forms[0]).unwrap().is_disabled());
		assert!(page.submit_button(&forms[1]).unwrap().is_disabled());
	}

	#[rstest]
	fn test_no_forms() {
		let page = MemoryPage::new("/");
		assert_eq!(bind_submit_loading(&page, &EnhanceSettings::default()), 0);
	}
}
