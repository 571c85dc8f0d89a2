//! Page capability interface
//!
//! Behaviors never reach for a global `document`. They receive a [`Page`],
//! which exposes only the lookups and mutations the portal's enhancements
//! need, and a [`Timers`] for deferred work. The browser implementation
//! lives in the `web` module (wasm32 only); an in-memory one for tests
//! lives in `testing`.
//!
//! Every lookup returns `Option` or an empty `Vec` when the markup lacks the
//! element. Behaviors treat that as "not applicable on this page".

use std::rc::Rc;
use std::time::Duration;

use engage_tables::CsvDocument;

use crate::error::PageResult;

/// Event handler attached to a node.
pub type Handler = Rc<dyn Fn()>;

/// Deferred task scheduled through [`Timers`].
pub type Task = Box<dyn FnOnce()>;

/// DOM events the behaviors listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEvent {
	/// A click on a header cell.
	Click,
	/// A form submission.
	Submit,
	/// Text entered into a field.
	Input,
}

impl PageEvent {
	/// Returns the DOM event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::Submit => "submit",
			Self::Input => "input",
		}
	}
}

/// Navigation links that can be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
	/// The feedback submission page.
	Home,
	/// The feedback admin list.
	Admin,
}

impl NavTarget {
	/// Returns the id of the link element in the page markup.
	pub fn element_id(&self) -> &'static str {
		match self {
			Self::Home => "nav-home",
			Self::Admin => "nav-admin",
		}
	}
}

/// A handle to one element on the page.
///
/// Handles are cheap to clone and compare by identity in the
/// implementations. Mutations on a detached element are harmless no-ops.
pub trait Node: Clone + 'static {
	/// Adds a class to the element.
	fn add_class(&self, class: &str);

	/// Sets an inline style property, e.g. `("opacity", "0")`.
	fn set_style(&self, property: &str, value: &str);

	/// Replaces the element's children with a text node.
	fn set_text(&self, text: &str);

	/// Replaces the element's children with parsed markup.
	fn set_inner_html(&self, html: &str);

	/// Enables or disables a form control.
	fn set_disabled(&self, disabled: bool);

	/// Returns the current value of a form field, or an empty string.
	fn value(&self) -> String;

	/// Returns the raw text content of the element and its descendants.
	fn text_content(&self) -> String;

	/// Returns the text as rendered, honoring layout and visibility.
	fn rendered_text(&self) -> String;

	/// Detaches the element from the page. No-op if already detached.
	fn remove(&self);

	/// Attaches a listener for the lifetime of the page.
	fn on(&self, event: PageEvent, handler: Handler);
}

/// Lookup and mutation capabilities of a rendered page.
pub trait Page: Clone + 'static {
	/// Element handle type.
	type Node: Node;

	/// Returns the path of the current URL.
	fn current_path(&self) -> String;

	/// Finds a navigation link.
	fn nav_link(&self, target: NavTarget) -> Option<Self::Node>;

	/// Returns every form on the page.
	fn forms(&self) -> Vec<Self::Node>;

	/// Finds the submit-type button inside `form`.
	fn submit_button(&self, form: &Self::Node) -> Option<Self::Node>;

	/// Returns every dismissible result notice.
	fn notices(&self) -> Vec<Self::Node>;

	/// Finds the textarea with the given `name`.
	fn textarea(&self, name: &str) -> Option<Self::Node>;

	/// Creates an empty block element at the end of `anchor`'s parent.
	///
	/// Returns `None` if `anchor` has no parent.
	fn append_to_parent(&self, anchor: &Self::Node) -> Option<Self::Node>;

	/// Returns the raw settings overrides embedded in the page, if any.
	fn settings_source(&self) -> Option<String>;

	/// Finds the page's table.
	fn table(&self) -> Option<Self::Node>;

	/// Returns the header cells of `table` in order.
	fn header_cells(&self, table: &Self::Node) -> Vec<Self::Node>;

	/// Finds the body section of `table`.
	fn table_body(&self, table: &Self::Node) -> Option<Self::Node>;

	/// Returns the rows inside `section` (a table or its body) in document order.
	fn rows(&self, section: &Self::Node) -> Vec<Self::Node>;

	/// Returns the cells of `row` in order.
	fn cells(&self, row: &Self::Node) -> Vec<Self::Node>;

	/// Detaches every child of `body` and re-attaches `rows` in the given order.
	fn replace_rows(&self, body: &Self::Node, rows: &[Self::Node]);

	/// Hands `document` to the user as a file download without navigating.
	fn download(&self, document: &CsvDocument) -> PageResult<()>;
}

/// Fire-and-forget scheduling of deferred work.
pub trait Timers: Clone + 'static {
	/// Runs `task` once after `delay`.
	fn set_timeout(&self, delay: Duration, task: Task);
}
