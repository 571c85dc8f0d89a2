//! CSV export
//!
//! Every field is quoted regardless of content and embedded quotes are
//! doubled. Rows are joined with a single `\n` and the document carries no
//! trailing newline. Embedded newlines stay inside their quoted field.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Media type of exported documents.
pub const CSV_MEDIA_TYPE: &str = "text/csv;charset=utf-8;";

/// Encodes rows of cell text as CSV.
///
/// A row without cells becomes an empty line.
///
/// # Example
///
/// ```rust
/// use engage_tables::encode_csv;
///
/// let csv = encode_csv([["Name", "Score"], ["O'Brien, J.", "5"]]).unwrap();
/// assert_eq!(csv, "\"Name\",\"Score\"\n\"O'Brien, J.\",\"5\"");
/// ```
pub fn encode_csv<I, R, S>(rows: I) -> Result<String>
where
	I: IntoIterator<Item = R>,
	R: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut writer = WriterBuilder::new()
		.quote_style(QuoteStyle::Always)
		.terminator(Terminator::Any(b'\n'))
		.flexible(true)
		.from_writer(Vec::new());

	// Byte offset where each row ends in the writer's buffer.
	let mut row_ends = Vec::new();
	for row in rows {
		let fields: Vec<S> = row.into_iter().collect();
		// The csv writer renders an empty record as `""`; keep it a blank line.
		if !fields.is_empty() {
			writer.write_record(fields.iter().map(|field| field.as_ref().as_bytes()))?;
			writer.flush()?;
		}
		row_ends.push(writer.get_ref().len());
	}

	let bytes = writer.into_inner().map_err(|err| err.into_error())?;
	let text = String::from_utf8(bytes)?;

	let mut lines = Vec::with_capacity(row_ends.len());
	let mut start = 0;
	for end in row_ends {
		let line = &text[start..end];
		lines.push(line.strip_suffix('\n').unwrap_or(line));
		start = end;
	}
	Ok(lines.join("\n"))
}

/// An encoded CSV file ready to be handed to a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvDocument {
	filename: String,
	content: String,
}

impl CsvDocument {
	/// Creates a document from already-encoded CSV text.
	pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			filename: filename.into(),
			content: content.into(),
		}
	}

	/// Encodes `rows` and wraps the result under `filename`.
	pub fn from_rows<I, R, S>(filename: impl Into<String>, rows: I) -> Result<Self>
	where
		I: IntoIterator<Item = R>,
		R: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Ok(Self::new(filename, encode_csv(rows)?))
	}

	/// Returns the name the download is saved under.
	pub fn filename(&self) -> &str {
		&self.filename
	}

	/// Returns the CSV text.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Returns the UTF-8 payload.
	pub fn as_bytes(&self) -> &[u8] {
		self.content.as_bytes()
	}

	/// Returns the media type of the payload.
	pub fn media_type(&self) -> &'static str {
		CSV_MEDIA_TYPE
	}
}
