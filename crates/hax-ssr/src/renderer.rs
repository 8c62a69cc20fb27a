//! The HTML string renderer.

use std::fmt;

use hax_core::Node;

use crate::escape::html_escape;
use crate::options::RenderOptions;

/// Renders node trees into an owned HTML buffer.
///
/// Each [`render`](Self::render) call appends to the buffer. A renderer is
/// not meant to be shared across threads; independent renderers over
/// independent trees need no coordination.
///
/// ## Example
///
/// ```ignore
/// let mut renderer = HtmlRenderer::new();
/// renderer.render(&button().text("I'm a button"));
/// assert_eq!(renderer.as_str(), "<button>I&#39;m a button</button>");
///
/// renderer.reset();
/// renderer.render(&input().value("x"));
/// assert_eq!(renderer.as_str(), r#"<input value="x"/>"#);
/// ```
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
	buffer: String,
	options: RenderOptions,
}

impl Default for HtmlRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl HtmlRenderer {
	/// Creates a new renderer with default options.
	pub fn new() -> Self {
		Self::with_options(RenderOptions::default())
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self {
			buffer: String::with_capacity(options.initial_capacity),
			options,
		}
	}

	/// Creates a renderer with default options and a buffer of at least
	/// `capacity` bytes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self::with_options(RenderOptions::default().initial_capacity(capacity))
	}

	/// Returns the render options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders a tree and appends the HTML to the buffer.
	///
	/// Family wrappers are accepted directly through `AsRef<Node>`.
	pub fn render<N>(&mut self, node: &N)
	where
		N: AsRef<Node> + ?Sized,
	{
		let node = node.as_ref();
		let start = self.buffer.len();
		self.write_node(node);
		tracing::trace!(
			tag = node.tag_name(),
			bytes = self.buffer.len() - start,
			"rendered node tree"
		);
	}

	/// Returns the HTML rendered so far.
	pub fn as_str(&self) -> &str {
		&self.buffer
	}

	/// Consumes the renderer and returns the HTML.
	pub fn into_string(self) -> String {
		self.buffer
	}

	/// Returns the buffer length in bytes.
	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	/// Returns `true` if nothing has been rendered since the last reset.
	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	/// Clears the buffer, keeping its allocation.
	pub fn reset(&mut self) {
		tracing::debug!(discarded = self.buffer.len(), "resetting render buffer");
		self.buffer.clear();
	}

	fn write_node(&mut self, node: &Node) {
		self.write_open_tag(node);
		if node.is_void() {
			if node.has_suppressed_content() {
				tracing::debug!(
					tag = node.tag_name(),
					"suppressing children and text of void element"
				);
			}
			return;
		}
		self.write_body(node);
		self.write_close_tag(node);
	}

	fn write_open_tag(&mut self, node: &Node) {
		self.buffer.push('<');
		self.buffer.push_str(node.tag_name());
		self.write_attributes(node);

		if node.is_void() {
			self.buffer.push_str(self.options.void_style.terminator());
		} else {
			self.buffer.push('>');
		}
	}

	fn write_attributes(&mut self, node: &Node) {
		let classes = node.class_list();
		if !classes.is_empty() {
			self.buffer.push_str(" class=\"");
			for (i, class) in classes.iter().enumerate() {
				if i > 0 {
					self.buffer.push(' ');
				}
				self.buffer.push_str(&html_escape(class));
			}
			self.buffer.push('"');
		}

		let styles = node.styles();
		if !styles.is_empty() {
			self.buffer.push_str(" style=\"");
			for (property, value) in styles {
				self.buffer.push_str(&html_escape(property));
				self.buffer.push_str(": ");
				self.buffer.push_str(&html_escape(value));
				self.buffer.push(';');
			}
			self.buffer.push('"');
		}

		// Attribute names are emitted verbatim
		for (name, value) in node.attrs() {
			self.buffer.push(' ');
			self.buffer.push_str(name);
			self.buffer.push_str("=\"");
			self.buffer.push_str(&html_escape(value));
			self.buffer.push('"');
		}

		if let Some(id) = node.id_value().filter(|id| !id.is_empty()) {
			self.buffer.push_str(" id=\"");
			if self.options.escape_ids {
				self.buffer.push_str(&html_escape(id));
			} else {
				self.buffer.push_str(id);
			}
			self.buffer.push('"');
		}
	}

	fn write_body(&mut self, node: &Node) {
		for child in node.children() {
			self.write_node(child);
		}
		self.buffer.push_str(&html_escape(node.text_content()));
	}

	fn write_close_tag(&mut self, node: &Node) {
		self.buffer.push_str("</");
		self.buffer.push_str(node.tag_name());
		self.buffer.push('>');
	}
}

impl fmt::Display for HtmlRenderer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.buffer)
	}
}

/// Renders a tree with default options into a new string.
pub fn render_to_string<N>(node: &N) -> String
where
	N: AsRef<Node> + ?Sized,
{
	render_to_string_with(node, &RenderOptions::default())
}

/// Renders a tree with the given options into a new string.
pub fn render_to_string_with<N>(node: &N, options: &RenderOptions) -> String
where
	N: AsRef<Node> + ?Sized,
{
	let mut renderer = HtmlRenderer::with_options(options.clone());
	renderer.render(node);
	renderer.into_string()
}
