//! Browser tests for the web-sys page backend
//!
//! Run with `wasm-pack test --headless --chrome crates/engage-pages`.

#[cfg(target_arch = "wasm32")]
mod web_page_tests {
	use std::cell::RefCell;
	use std::rc::Rc;
	use std::time::Duration;

	use engage_pages::dom::{Task, Timers};
	use engage_pages::{Node, Page, WebPage, read_table, sort_table};
	use engage_tables::CsvDocument;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	const TABLE: &str = "<table id=\"feedback\">\
		<thead><tr><th>Parent</th><th>Score</th><th>Actions</th></tr></thead>\
		<tbody>\
		<tr><td>banana</td><td>10</td><td>View</td></tr>\
		<tr><td>Apple</td><td>9</td><td>View</td></tr>\
		<tr><td>cherry</td><td>2</td><td>View</td></tr>\
		</tbody></table>";

	/// Holds scheduled tasks until the test runs them.
	#[derive(Clone, Default)]
	struct HeldTimers {
		tasks: Rc<RefCell<Vec<(Duration, Task)>>>,
	}

	impl HeldTimers {
		fn delays(&self) -> Vec<Duration> {
			self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
		}

		fn run_all(&self) {
			let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
			for (_, task) in tasks {
				task();
			}
		}
	}

	impl Timers for HeldTimers {
		fn set_timeout(&self, delay: Duration, task: Task) {
			self.tasks.borrow_mut().push((delay, task));
		}
	}

	fn mount(markup: &str) -> WebPage {
		let page = WebPage::current().unwrap();
		let host = page.document().create_element("div").unwrap();
		host.set_id("fixture");
		host.set_inner_html(markup);
		page.document().body().unwrap().append_child(&host).unwrap();
		page
	}

	fn unmount(page: &WebPage) {
		if let Some(host) = page.document().get_element_by_id("fixture") {
			host.remove();
		}
	}

	#[wasm_bindgen_test]
	fn test_sort_reorders_rows() {
		let page = mount(TABLE);

		sort_table(&page, 1).unwrap();
		let snapshot = read_table(&page).unwrap();

		let scores: Vec<&str> = snapshot.body().iter().map(|row| row[1].as_str()).collect();
		assert_eq!(scores, vec!["2", "9", "10"]);
		assert_eq!(snapshot.header().unwrap()[0], "Parent");
		unmount(&page);
	}

	#[wasm_bindgen_test]
	fn test_header_cells_and_rows() {
		let page = mount(TABLE);

		let table = page.table().unwrap();
		assert_eq!(page.header_cells(&table).len(), 3);
		let body = page.table_body(&table).unwrap();
		let rows = page.rows(&body);
		assert_eq!(rows.len(), 3);
		assert_eq!(page.cells(&rows[0])[0].text_content(), "banana");
		unmount(&page);
	}

	#[wasm_bindgen_test]
	fn test_download_defers_object_url_release() {
		let page = WebPage::current().unwrap();
		let timers = HeldTimers::default();
		let document = CsvDocument::new("feedback.csv", "\"Name\"\n\"Ravi\"");

		page.download_with(&document, &timers).unwrap();

		assert_eq!(timers.delays(), vec![Duration::ZERO]);
		assert!(page.document().query_selector("a[download]").unwrap().is_none());
		timers.run_all();
		assert!(timers.delays().is_empty());
	}

	#[wasm_bindgen_test]
	fn test_sort_without_table_is_error() {
		let page = WebPage::current().unwrap();
		unmount(&page);

		assert!(sort_table(&page, 0).is_err());
	}
}
