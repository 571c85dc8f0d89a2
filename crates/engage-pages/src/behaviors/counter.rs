//! Live character counter for the feedback message

use std::rc::Rc;

use crate::dom::{Node, Page, PageEvent};
use crate::settings::{CounterColors, EnhanceSettings};

/// Returns the counter text for a message of `length` characters.
pub fn counter_message(length: usize, minimum: usize) -> String {
	format!("{length} characters (minimum {minimum} required)")
}

/// Returns the counter color for a message of `length` characters.
pub fn counter_color<'a>(length: usize, settings: &'a EnhanceSettings) -> &'a str {
	let colors = &settings.counter_colors;
	if length < settings.message_min_length {
		&colors.too_short
	} else if length < settings.message_warn_below {
		&colors.short
	} else {
		&colors.ok
	}
}

fn style_counter<N: Node>(counter: &N, colors: &CounterColors) {
	counter.set_style("font-size", "0.875rem");
	counter.set_style("color", &colors.idle);
	counter.set_style("margin-top", "0.5rem");
}

/// Adds a character counter below the message textarea.
///
/// The counter starts empty and updates on every input. Length is counted in
/// characters, not bytes. Returns the counter element, or `None` when the
/// page has no message field.
pub fn attach_character_counter<P: Page>(page: &P, settings: &EnhanceSettings) -> Option<P::Node> {
	let textarea = page.textarea(&settings.message_field)?;
	let counter = page.append_to_parent(&textarea)?;
	style_counter(&counter, &settings.counter_colors);

	let source = textarea.clone();
	let display = counter.clone();
	let settings = settings.clone();
	textarea.on(
		PageEvent::Input,
		Rc::new(move || {
			let length = source.value().chars().count();
			display.set_text(&counter_message(length, settings.message_min_length));
			display.set_style("color", counter_color(length, &settings));
		}),
	);
	Some(counter)
}
