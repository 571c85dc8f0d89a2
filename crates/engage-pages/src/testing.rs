//! In-memory page and timers for exercising behaviors without a browser
//!
//! [`MemoryPage`] is a small element tree that implements [`Page`]. Fragments
//! are built with [`MemoryNode`]'s builder methods or the helpers at the
//! bottom of this module, then attached to the page body. Events are fired
//! explicitly with [`MemoryNode::click`], [`MemoryNode::submit`] and
//! [`MemoryNode::type_text`].
//!
//! [`ManualTimers`] only moves forward when [`ManualTimers::advance`] is
//! called, which makes timing properties checkable.
//!
//! ```ignore
//! use engage_pages::testing::{MemoryPage, table_fragment};
//!
//! let page = MemoryPage::new("/feedback")
//! 	.with(table_fragment(&["Name", "Actions"], &[&["b", "x"], &["a", "y"]]));
//! engage_pages::sort_table(&page, 0).unwrap();
//! ```

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use engage_tables::CsvDocument;

use crate::dom::{Handler, NavTarget, Node, Page, PageEvent, Task, Timers};
use crate::error::{PageError, PageResult};
use crate::settings::SETTINGS_ELEMENT_ID;

#[derive(Default)]
struct NodeData {
	tag: String,
	attributes: BTreeMap<String, String>,
	classes: Vec<String>,
	styles: BTreeMap<String, String>,
	text: String,
	inner_html: Option<String>,
	value: String,
	disabled: bool,
	hidden: bool,
	parent: Weak<RefCell<NodeData>>,
	children: Vec<MemoryNode>,
	listeners: Vec<(PageEvent, Handler)>,
}

/// An element of a [`MemoryPage`].
///
/// Clones share the same element; equality is identity.
#[derive(Clone)]
pub struct MemoryNode(Rc<RefCell<NodeData>>);

impl fmt::Debug for MemoryNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let data = self.0.borrow();
		f.debug_struct("MemoryNode")
			.field("tag", &data.tag)
			.field("attributes", &data.attributes)
			.field("classes", &data.classes)
			.field("children", &data.children.len())
			.finish()
	}
}

impl PartialEq for MemoryNode {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for MemoryNode {}

impl MemoryNode {
	/// Creates a detached element.
	pub fn element(tag: &str) -> Self {
		Self(Rc::new(RefCell::new(NodeData {
			tag: tag.to_ascii_lowercase(),
			..NodeData::default()
		})))
	}

	/// Sets the `id` attribute.
	pub fn with_id(self, id: &str) -> Self {
		self.with_attr("id", id)
	}

	/// Sets an attribute.
	pub fn with_attr(self, name: &str, value: &str) -> Self {
		self.0
			.borrow_mut()
			.attributes
			.insert(name.to_string(), value.to_string());
		self
	}

	/// Adds a class.
	pub fn with_class(self, class: &str) -> Self {
		self.add_class(class);
		self
	}

	/// Sets the element's own text.
	pub fn with_text(self, text: &str) -> Self {
		self.0.borrow_mut().text = text.to_string();
		self
	}

	/// Marks the element as not rendered (`display: none`).
	pub fn hidden(self) -> Self {
		self.0.borrow_mut().hidden = true;
		self
	}

	/// Appends `child` and returns `self`.
	pub fn with_child(self, child: MemoryNode) -> Self {
		self.append(&child);
		self
	}

	/// Appends `child`, detaching it from any previous parent.
	pub fn append(&self, child: &MemoryNode) {
		child.remove();
		child.0.borrow_mut().parent = Rc::downgrade(&self.0);
		self.0.borrow_mut().children.push(child.clone());
	}

	/// Returns the tag name.
	pub fn tag(&self) -> String {
		self.0.borrow().tag.clone()
	}

	/// Returns an attribute value.
	pub fn attr(&self, name: &str) -> Option<String> {
		self.0.borrow().attributes.get(name).cloned()
	}

	/// Returns whether the element has `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.0.borrow().classes.iter().any(|c| c == class)
	}

	/// Returns an inline style value.
	pub fn style(&self, property: &str) -> Option<String> {
		self.0.borrow().styles.get(property).cloned()
	}

	/// Returns the element's own text, excluding children.
	pub fn text(&self) -> String {
		self.0.borrow().text.clone()
	}

	/// Returns the markup last set with [`Node::set_inner_html`].
	pub fn inner_html(&self) -> Option<String> {
		self.0.borrow().inner_html.clone()
	}

	/// Returns whether the control is disabled.
	pub fn is_disabled(&self) -> bool {
		self.0.borrow().disabled
	}

	/// Returns the element's children.
	pub fn children(&self) -> Vec<MemoryNode> {
		self.0.borrow().children.clone()
	}

	/// Returns the parent element, if attached.
	pub fn parent(&self) -> Option<MemoryNode> {
		self.0.borrow().parent.upgrade().map(MemoryNode)
	}

	/// Returns whether the element has a parent.
	pub fn is_attached(&self) -> bool {
		self.parent().is_some()
	}

	/// Returns the number of listeners for `event`.
	pub fn listener_count(&self, event: PageEvent) -> usize {
		self.0
			.borrow()
			.listeners
			.iter()
			.filter(|(kind, _)| *kind == event)
			.count()
	}

	/// Sets the value of a form field without firing events.
	pub fn set_value(&self, value: &str) {
		self.0.borrow_mut().value = value.to_string();
	}

	/// Runs every listener registered for `event`.
	pub fn dispatch(&self, event: PageEvent) {
		let handlers: Vec<Handler> = self
			.0
			.borrow()
			.listeners
			.iter()
			.filter(|(kind, _)| *kind == event)
			.map(|(_, handler)| Rc::clone(handler))
			.collect();
		for handler in handlers {
			handler();
		}
	}

	/// Fires a click.
	pub fn click(&self) {
		self.dispatch(PageEvent::Click);
	}

	/// Fires a submit.
	pub fn submit(&self) {
		self.dispatch(PageEvent::Submit);
	}

	/// Replaces the field value and fires an input event.
	pub fn type_text(&self, value: &str) {
		self.set_value(value);
		self.dispatch(PageEvent::Input);
	}

	fn descendants(&self) -> Vec<MemoryNode> {
		let mut found = Vec::new();
		for child in self.children() {
			found.push(child.clone());
			found.extend(child.descendants());
		}
		found
	}

	fn find_all(&self, predicate: impl Fn(&MemoryNode) -> bool) -> Vec<MemoryNode> {
		self.descendants().into_iter().filter(|node| predicate(node)).collect()
	}

	fn find_first(&self, predicate: impl Fn(&MemoryNode) -> bool) -> Option<MemoryNode> {
		self.descendants().into_iter().find(|node| predicate(node))
	}

	fn detach_children(&self) {
		let children = std::mem::take(&mut self.0.borrow_mut().children);
		for child in children {
			child.0.borrow_mut().parent = Weak::new();
		}
	}
}

impl Node for MemoryNode {
	fn add_class(&self, class: &str) {
		let mut data = self.0.borrow_mut();
		if !data.classes.iter().any(|c| c == class) {
			data.classes.push(class.to_string());
		}
	}

	fn set_style(&self, property: &str, value: &str) {
		self.0
			.borrow_mut()
			.styles
			.insert(property.to_string(), value.to_string());
	}

	fn set_text(&self, text: &str) {
		self.detach_children();
		let mut data = self.0.borrow_mut();
		data.text = text.to_string();
		data.inner_html = None;
	}

	fn set_inner_html(&self, html: &str) {
		self.detach_children();
		let mut data = self.0.borrow_mut();
		data.text.clear();
		data.inner_html = Some(html.to_string());
	}

	fn set_disabled(&self, disabled: bool) {
		self.0.borrow_mut().disabled = disabled;
	}

	fn value(&self) -> String {
		self.0.borrow().value.clone()
	}

	fn text_content(&self) -> String {
		let mut text = self.text();
		for child in self.children() {
			text.push_str(&child.text_content());
		}
		text
	}

	fn rendered_text(&self) -> String {
		let mut text = self.text();
		for child in self.children() {
			if !child.0.borrow().hidden {
				text.push_str(&child.rendered_text());
			}
		}
		text
	}

	fn remove(&self) {
		let Some(parent) = self.parent() else {
			return;
		};
		parent
			.0
			.borrow_mut()
			.children
			.retain(|child| !Rc::ptr_eq(&child.0, &self.0));
		self.0.borrow_mut().parent = Weak::new();
	}

	fn on(&self, event: PageEvent, handler: Handler) {
		self.0.borrow_mut().listeners.push((event, handler));
	}
}

struct PageState {
	path: RefCell<String>,
	body: MemoryNode,
	downloads: RefCell<Vec<CsvDocument>>,
	fail_downloads: Cell<bool>,
}

/// An in-memory page rooted at a `body` element.
#[derive(Clone)]
pub struct MemoryPage {
	state: Rc<PageState>,
}

impl fmt::Debug for MemoryPage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryPage")
			.field("path", &self.state.path.borrow())
			.field("body", &self.state.body)
			.finish()
	}
}

impl MemoryPage {
	/// Creates an empty page at `path`.
	pub fn new(path: &str) -> Self {
		Self {
			state: Rc::new(PageState {
				path: RefCell::new(path.to_string()),
				body: MemoryNode::element("body"),
				downloads: RefCell::new(Vec::new()),
				fail_downloads: Cell::new(false),
			}),
		}
	}

	/// Appends `fragment` to the body and returns the page.
	pub fn with(self, fragment: MemoryNode) -> Self {
		self.state.body.append(&fragment);
		self
	}

	/// Embeds settings overrides in the page.
	pub fn with_settings(self, json: &str) -> Self {
		self.with(
			MemoryNode::element("script")
				.with_id(SETTINGS_ELEMENT_ID)
				.with_attr("type", "application/json")
				.with_text(json),
		)
	}

	/// Returns the body element.
	pub fn body(&self) -> MemoryNode {
		self.state.body.clone()
	}

	/// Finds an element by id.
	pub fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
		self.state
			.body
			.find_first(|node| node.attr("id").as_deref() == Some(id))
	}

	/// Returns every element with `class`.
	pub fn elements_with_class(&self, class: &str) -> Vec<MemoryNode> {
		self.state.body.find_all(|node| node.has_class(class))
	}

	/// Returns the documents handed to [`Page::download`] so far.
	pub fn downloads(&self) -> Vec<CsvDocument> {
		self.state.downloads.borrow().clone()
	}

	/// Makes every following download fail.
	pub fn fail_downloads(&self) {
		self.state.fail_downloads.set(true);
	}

	/// Returns the body rows' text of the page's table, row by row.
	pub fn body_text(&self) -> Vec<Vec<String>> {
		let Some(table) = self.table() else {
			return Vec::new();
		};
		let Some(body) = self.table_body(&table) else {
			return Vec::new();
		};
		self.rows(&body)
			.iter()
			.map(|row| self.cells(row).iter().map(Node::text_content).collect())
			.collect()
	}
}

impl Page for MemoryPage {
	type Node = MemoryNode;

	fn current_path(&self) -> String {
		self.state.path.borrow().clone()
	}

	fn nav_link(&self, target: NavTarget) -> Option<MemoryNode> {
		self.element_by_id(target.element_id())
	}

	fn forms(&self) -> Vec<MemoryNode> {
		self.state.body.find_all(|node| node.tag() == "form")
	}

	fn submit_button(&self, form: &MemoryNode) -> Option<MemoryNode> {
		form.find_first(|node| {
			node.tag() == "button" && node.attr("type").as_deref() == Some("submit")
		})
	}

	fn notices(&self) -> Vec<MemoryNode> {
		self.elements_with_class(crate::behaviors::NOTICE_CLASS)
	}

	fn textarea(&self, name: &str) -> Option<MemoryNode> {
		self.state.body.find_first(|node| {
			node.tag() == "textarea" && node.attr("name").as_deref() == Some(name)
		})
	}

	fn append_to_parent(&self, anchor: &MemoryNode) -> Option<MemoryNode> {
		let parent = anchor.parent()?;
		let block = MemoryNode::element("div");
		parent.append(&block);
		Some(block)
	}

	fn settings_source(&self) -> Option<String> {
		self.element_by_id(SETTINGS_ELEMENT_ID)
			.map(|node| node.text_content())
	}

	fn table(&self) -> Option<MemoryNode> {
		self.state.body.find_first(|node| node.tag() == "table")
	}

	fn header_cells(&self, table: &MemoryNode) -> Vec<MemoryNode> {
		table.find_all(|node| node.tag() == "th")
	}

	fn table_body(&self, table: &MemoryNode) -> Option<MemoryNode> {
		table.find_first(|node| node.tag() == "tbody")
	}

	fn rows(&self, section: &MemoryNode) -> Vec<MemoryNode> {
		section.find_all(|node| node.tag() == "tr")
	}

	fn cells(&self, row: &MemoryNode) -> Vec<MemoryNode> {
		row.children()
			.into_iter()
			.filter(|node| matches!(node.tag().as_str(), "td" | "th"))
			.collect()
	}

	fn replace_rows(&self, body: &MemoryNode, rows: &[MemoryNode]) {
		body.detach_children();
		for row in rows {
			body.append(row);
		}
	}

	fn download(&self, document: &CsvDocument) -> PageResult<()> {
		if self.state.fail_downloads.get() {
			return Err(PageError::Download("blocked by test page".to_string()));
		}
		self.state.downloads.borrow_mut().push(document.clone());
		Ok(())
	}
}

struct Scheduled {
	due: Duration,
	id: u64,
	task: Task,
}

#[derive(Default)]
struct TimerState {
	now: Duration,
	next_id: u64,
	queue: Vec<Scheduled>,
}

/// Timers driven by an explicit clock.
///
/// Tasks due at the same instant run in scheduling order. Tasks scheduled
/// by a running task are eligible within the same [`advance`](Self::advance).
#[derive(Clone, Default)]
pub struct ManualTimers {
	state: Rc<RefCell<TimerState>>,
}

impl fmt::Debug for ManualTimers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("ManualTimers")
			.field("now", &state.now)
			.field("pending", &state.queue.len())
			.finish()
	}
}

impl ManualTimers {
	/// Creates timers at time zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the elapsed virtual time.
	pub fn now(&self) -> Duration {
		self.state.borrow().now
	}

	/// Returns the number of tasks not yet run.
	pub fn pending(&self) -> usize {
		self.state.borrow().queue.len()
	}

	/// Moves the clock forward by `by`, running every task that falls due.
	pub fn advance(&self, by: Duration) {
		let target = self.now() + by;
		while let Some(task) = self.pop_due(target) {
			task();
		}
		self.state.borrow_mut().now = target;
	}

	fn pop_due(&self, target: Duration) -> Option<Task> {
		let mut state = self.state.borrow_mut();
		let position = state
			.queue
			.iter()
			.enumerate()
			.filter(|(_, scheduled)| scheduled.due <= target)
			.min_by_key(|(_, scheduled)| (scheduled.due, scheduled.id))
			.map(|(position, _)| position)?;
		let scheduled = state.queue.remove(position);
		state.now = scheduled.due;
		Some(scheduled.task)
	}
}

impl Timers for ManualTimers {
	fn set_timeout(&self, delay: Duration, task: Task) {
		let mut state = self.state.borrow_mut();
		let id = state.next_id;
		state.next_id += 1;
		let due = state.now + delay;
		state.queue.push(Scheduled { due, id, task });
	}
}

/// Builds a navigation link for `target`.
pub fn nav_link_fragment(target: NavTarget) -> MemoryNode {
	MemoryNode::element("a").with_id(target.element_id())
}

/// Builds a form, optionally with a submit button.
pub fn form_fragment(with_submit: bool) -> MemoryNode {
	let form = MemoryNode::element("form")
		.with_child(MemoryNode::element("input").with_attr("name", "parent_name"));
	if with_submit {
		form.with_child(
			MemoryNode::element("button")
				.with_attr("type", "submit")
				.with_text("Submit Feedback"),
		)
	} else {
		form
	}
}

/// Builds a result notice.
pub fn notice_fragment(text: &str) -> MemoryNode {
	MemoryNode::element("div")
		.with_class(crate::behaviors::NOTICE_CLASS)
		.with_text(text)
}

/// Builds a form group wrapping a textarea named `name`.
pub fn textarea_fragment(name: &str) -> MemoryNode {
	MemoryNode::element("div")
		.with_class("form-group")
		.with_child(MemoryNode::element("textarea").with_attr("name", name))
}

/// Builds a table with a header row and body rows.
pub fn table_fragment(header: &[&str], body: &[&[&str]]) -> MemoryNode {
	let header_row = header.iter().fold(MemoryNode::element("tr"), |row, text| {
		row.with_child(MemoryNode::element("th").with_text(text))
	});
	let tbody = body.iter().fold(MemoryNode::element("tbody"), |section, cells| {
		let row = cells.iter().fold(MemoryNode::element("tr"), |row, text| {
			row.with_child(MemoryNode::element("td").with_text(text))
		});
		section.with_child(row)
	});
	MemoryNode::element("table")
		.with_child(MemoryNode::element("thead").with_child(header_row))
		.with_child(tbody)
}
