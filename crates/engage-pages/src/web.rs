//! Browser implementation of the page capabilities
//!
//! [`WebPage`] wraps the live `document`; [`WebNode`] wraps an `Element`.
//! Listeners attached through [`Node::on`] stay registered for the lifetime
//! of the page, so their closures are released to the JS side with
//! `Closure::forget`.
//!
//! The `#[wasm_bindgen]` exports at the bottom are the script's public
//! surface: `start` runs on module load, while `sortTable` and
//! `exportTableToCSV` can be called from inline handlers.

use std::time::Duration;

use engage_tables::{CSV_MEDIA_TYPE, CsvDocument};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Blob, BlobPropertyBag, Document, Element, Event, HtmlElement, HtmlInputElement,
	HtmlTableRowElement, HtmlTextAreaElement, NodeList, Url, Window,
};

use crate::dom::{Handler, NavTarget, Node, Page, PageEvent, Task, Timers};
use crate::enhance::{enhance, load_settings};
use crate::error::{PageError, PageResult};
use crate::settings::SETTINGS_ELEMENT_ID;
use crate::{behaviors, info_log, warn_log};

/// An element on the live page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebNode(Element);

impl WebNode {
	/// Wraps an element.
	pub fn new(element: Element) -> Self {
		Self(element)
	}

	/// Returns the wrapped element.
	pub fn element(&self) -> &Element {
		&self.0
	}

	fn html(&self) -> Option<&HtmlElement> {
		self.0.dyn_ref::<HtmlElement>()
	}

	fn query_all(&self, selector: &str) -> Vec<WebNode> {
		collect_elements(self.0.query_selector_all(selector))
	}

	fn query(&self, selector: &str) -> Option<WebNode> {
		self.0.query_selector(selector).ok().flatten().map(WebNode)
	}
}

impl Node for WebNode {
	fn add_class(&self, class: &str) {
		let _ = self.0.class_list().add_1(class);
	}

	fn set_style(&self, property: &str, value: &str) {
		if let Some(html) = self.html() {
			let _ = html.style().set_property(property, value);
		}
	}

	fn set_text(&self, text: &str) {
		self.0.set_text_content(Some(text));
	}

	fn set_inner_html(&self, html: &str) {
		self.0.set_inner_html(html);
	}

	fn set_disabled(&self, disabled: bool) {
		if disabled {
			let _ = self.0.set_attribute("disabled", "");
		} else {
			let _ = self.0.remove_attribute("disabled");
		}
	}

	fn value(&self) -> String {
		if let Some(textarea) = self.0.dyn_ref::<HtmlTextAreaElement>() {
			textarea.value()
		} else if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
			input.value()
		} else {
			String::new()
		}
	}

	fn text_content(&self) -> String {
		self.0.text_content().unwrap_or_default()
	}

	fn rendered_text(&self) -> String {
		match self.html() {
			Some(html) => html.inner_text(),
			None => self.text_content(),
		}
	}

	fn remove(&self) {
		self.0.remove();
	}

	fn on(&self, event: PageEvent, handler: Handler) {
		let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
		let _ = self
			.0
			.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref());
		closure.forget();
	}
}

fn collect_elements(list: Result<NodeList, JsValue>) -> Vec<WebNode> {
	let Ok(list) = list else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|index| list.get(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.map(WebNode)
		.collect()
}

fn js_error(context: &str, value: JsValue) -> PageError {
	let detail = value
		.as_string()
		.unwrap_or_else(|| format!("{:?}", value));
	PageError::Download(format!("{context}: {detail}"))
}

/// The live browser page.
#[derive(Debug, Clone)]
pub struct WebPage {
	window: Window,
	document: Document,
}

impl WebPage {
	/// Returns the current page, or `None` outside a window context.
	pub fn current() -> Option<Self> {
		let window = web_sys::window()?;
		let document = window.document()?;
		Some(Self { window, document })
	}

	/// Returns whether the document is still parsing.
	pub fn is_loading(&self) -> bool {
		self.document.ready_state() == "loading"
	}

	/// Returns the wrapped document.
	pub fn document(&self) -> &Document {
		&self.document
	}

	fn query(&self, selector: &str) -> Option<WebNode> {
		self.document.query_selector(selector).ok().flatten().map(WebNode)
	}

	fn query_all(&self, selector: &str) -> Vec<WebNode> {
		collect_elements(self.document.query_selector_all(selector))
	}
}

impl Page for WebPage {
	type Node = WebNode;

	fn current_path(&self) -> String {
		self.window.location().pathname().unwrap_or_default()
	}

	fn nav_link(&self, target: NavTarget) -> Option<WebNode> {
		self.document
			.get_element_by_id(target.element_id())
			.map(WebNode)
	}

	fn forms(&self) -> Vec<WebNode> {
		self.query_all("form")
	}

	fn submit_button(&self, form: &WebNode) -> Option<WebNode> {
		form.query("button[type=\"submit\"]")
	}

	fn notices(&self) -> Vec<WebNode> {
		self.query_all(&format!(".{}", behaviors::NOTICE_CLASS))
	}

	fn textarea(&self, name: &str) -> Option<WebNode> {
		self.query(&format!("textarea[name=\"{name}\"]"))
	}

	fn append_to_parent(&self, anchor: &WebNode) -> Option<WebNode> {
		let parent = anchor.0.parent_node()?;
		let block = self.document.create_element("div").ok()?;
		parent.append_child(&block).ok()?;
		Some(WebNode(block))
	}

	fn settings_source(&self) -> Option<String> {
		self.document
			.get_element_by_id(SETTINGS_ELEMENT_ID)?
			.text_content()
	}

	fn table(&self) -> Option<WebNode> {
		self.query("table")
	}

	fn header_cells(&self, table: &WebNode) -> Vec<WebNode> {
		table.query_all("th")
	}

	fn table_body(&self, table: &WebNode) -> Option<WebNode> {
		table.query("tbody")
	}

	fn rows(&self, section: &WebNode) -> Vec<WebNode> {
		section.query_all("tr")
	}

	fn cells(&self, row: &WebNode) -> Vec<WebNode> {
		let Some(row) = row.0.dyn_ref::<HtmlTableRowElement>() else {
			return Vec::new();
		};
		let cells = row.cells();
		(0..cells.length())
			.filter_map(|index| cells.item(index))
			.map(WebNode)
			.collect()
	}

	fn replace_rows(&self, body: &WebNode, rows: &[WebNode]) {
		while let Some(child) = body.0.first_child() {
			if body.0.remove_child(&child).is_err() {
				break;
			}
		}
		for row in rows {
			let _ = body.0.append_child(&row.0);
		}
	}

	fn download(&self, document: &CsvDocument) -> PageResult<()> {
		self.download_with(document, &BrowserTimers)
	}
}

impl WebPage {
	/// Downloads `document`, releasing its object URL through `timers`.
	///
	/// The URL is revoked on a zero-delay timeout rather than right after the
	/// click; some engines cancel a download whose URL is revoked in the same
	/// task.
	pub fn download_with<T: Timers>(&self, document: &CsvDocument, timers: &T) -> PageResult<()> {
		let parts = js_sys::Array::of1(&JsValue::from_str(document.content()));
		let options = BlobPropertyBag::new();
		options.set_type(CSV_MEDIA_TYPE);
		let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
			.map_err(|err| js_error("blob", err))?;
		let url = Url::create_object_url_with_blob(&blob).map_err(|err| js_error("object url", err))?;

		let result = self.click_download_link(&url, document.filename());
		timers.set_timeout(
			Duration::ZERO,
			Box::new(move || {
				let _ = Url::revoke_object_url(&url);
			}),
		);
		result
	}

	fn click_download_link(&self, url: &str, filename: &str) -> PageResult<()> {
		let body = self
			.document
			.body()
			.ok_or_else(|| PageError::Download("document has no body".to_string()))?;
		let link = self
			.document
			.create_element("a")
			.map_err(|err| js_error("anchor", err))?
			.dyn_into::<HtmlElement>()
			.map_err(|_| PageError::Download("anchor is not an html element".to_string()))?;

		link.set_attribute("href", url)
			.map_err(|err| js_error("href", err))?;
		link.set_attribute("download", filename)
			.map_err(|err| js_error("download", err))?;
		let _ = link.style().set_property("visibility", "hidden");

		body.append_child(&link)
			.map_err(|err| js_error("append", err))?;
		link.click();
		let _ = body.remove_child(&link);
		Ok(())
	}
}

/// Timers backed by `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
	fn set_timeout(&self, delay: Duration, task: Task) {
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		gloo_timers::callback::Timeout::new(millis, task).forget();
	}
}

fn run(page: &WebPage) {
	let settings = load_settings(page);
	let report = enhance(page, &BrowserTimers, &settings);
	info_log!("engage-pages ready: {:?}", report);
}

/// Enhances the page once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let Some(page) = WebPage::current() else {
		return;
	};
	if !page.is_loading() {
		run(&page);
		return;
	}

	let ready = page.clone();
	let on_ready: Closure<dyn FnMut()> = Closure::once(move || run(&ready));
	let _ = page
		.document
		.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
	on_ready.forget();
}

/// Sorts the page's table by `column`. Does nothing if the page has no table.
#[wasm_bindgen(js_name = sortTable)]
pub fn sort_table(column: u32) {
	let Some(page) = WebPage::current() else {
		return;
	};
	if let Err(err) = behaviors::sort_table(&page, column as usize) {
		warn_log!("sortTable({}) skipped: {}", column, err);
	}
}

/// Downloads the page's table as CSV. Does nothing if the page has no table.
#[wasm_bindgen(js_name = exportTableToCSV)]
pub fn export_table_to_csv(filename: &str) {
	let Some(page) = WebPage::current() else {
		return;
	};
	if let Err(err) = behaviors::export_table_to_csv(&page, filename) {
		warn_log!("exportTableToCSV({}) skipped: {}", filename, err);
	}
}
