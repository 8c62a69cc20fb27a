//! The element tree.
//!
//! A [`Node`] is a single markup element. Nodes are built with a fluent API:
//! every mutator consumes the node and hands it back, so construction reads as
//! one chain and no part of the tree is ever copied.
//!
//! ## Example
//!
//! ```ignore
//! use hax_core::{Element, Node};
//!
//! let button = Node::new("button")
//!     .class("btn")
//!     .style("background-color", "green")
//!     .attr("type", "submit")
//!     .text("Save");
//!
//! assert!(button.has_class("btn"));
//! assert_eq!(button.attr_value("type"), Some("submit"));
//! ```

pub mod child;
pub mod family;
pub mod util;

pub use child::{IntoChild, IntoChildren};

use std::borrow::Cow;

use indexmap::{IndexMap, IndexSet};

use crate::error::TagNameError;
use util::{is_void_element, validate_tag_name};

/// Name/value storage for attributes and inline styles, iterated in insertion order.
pub type AttributeMap = IndexMap<String, String>;

/// Class names, iterated in insertion order. Duplicates collapse.
pub type ClassSet = IndexSet<String>;

/// A markup element in the tree.
///
/// The tag is fixed at construction. Everything else is changed through the
/// [`Element`] trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
	/// The tag name (e.g., "div", "input").
	tag: Cow<'static, str>,
	id: Option<String>,
	/// Text rendered after all children.
	text: String,
	attributes: AttributeMap,
	classes: ClassSet,
	styles: AttributeMap,
	children: Vec<Node>,
	/// Whether this is a void element (no body, no closing tag).
	is_void: bool,
}

impl Node {
	/// Creates a new node with empty decorations and no children.
	///
	/// # Panics
	///
	/// Panics if the tag name is empty or contains whitespace or markup
	/// delimiters. Use [`Node::try_new`] for tag names that are not literals.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self::try_new(tag).unwrap_or_else(|e| panic!("failed to create node: {e}"))
	}

	/// Creates a new node, validating the tag name.
	///
	/// # Errors
	///
	/// Returns [`TagNameError`] if the tag name is empty or contains a
	/// character that cannot appear in an open tag.
	pub fn try_new(tag: impl Into<Cow<'static, str>>) -> Result<Self, TagNameError> {
		let tag = tag.into();
		validate_tag_name(&tag)?;
		let is_void = is_void_element(&tag);
		Ok(Self {
			tag,
			id: None,
			text: String::new(),
			attributes: AttributeMap::new(),
			classes: ClassSet::new(),
			styles: AttributeMap::new(),
			children: Vec::new(),
			is_void,
		})
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the id, if one was set.
	pub fn id_value(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Returns the text payload.
	pub fn text_content(&self) -> &str {
		&self.text
	}

	/// Returns the generic attributes.
	pub fn attrs(&self) -> &AttributeMap {
		&self.attributes
	}

	/// Looks up a single attribute value.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	/// Returns the inline styles.
	pub fn styles(&self) -> &AttributeMap {
		&self.styles
	}

	/// Looks up a single style property.
	pub fn style_value(&self, property: &str) -> Option<&str> {
		self.styles.get(property).map(String::as_str)
	}

	/// Returns the class names.
	pub fn class_list(&self) -> &ClassSet {
		&self.classes
	}

	/// Returns `true` if the class is present.
	pub fn has_class(&self, name: &str) -> bool {
		self.classes.contains(name)
	}

	/// Returns the child nodes.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns `true` if the node holds content the serializer will drop.
	pub fn has_suppressed_content(&self) -> bool {
		self.is_void && (!self.children.is_empty() || !self.text.is_empty())
	}

	fn trace_void_content(&self) {
		if self.has_suppressed_content() {
			tracing::debug!(
				tag = %self.tag,
				children = self.children.len(),
				has_text = !self.text.is_empty(),
				"content set on a void element will not be rendered"
			);
		}
	}
}

impl AsRef<Node> for Node {
	fn as_ref(&self) -> &Node {
		self
	}
}

/// Chainable mutators shared by [`Node`] and the family wrappers.
///
/// Implementors only provide access to the underlying [`Node`]; every
/// mutator returns `Self`, so a wrapper such as [`Form`](family::Form) keeps
/// its own setters available after a generic call:
///
/// ```ignore
/// let form = Form::new().class("login").action("/login").method("POST");
/// ```
pub trait Element: Sized {
	/// Borrows the underlying node.
	fn node(&self) -> &Node;

	/// Mutably borrows the underlying node.
	fn node_mut(&mut self) -> &mut Node;

	/// Sets the id. The last write wins.
	fn id(mut self, id: impl Into<String>) -> Self {
		self.node_mut().id = Some(id.into());
		self
	}

	/// Sets the text payload, replacing any previous text.
	///
	/// Text is independent of children and renders after them.
	fn text(mut self, text: impl Into<String>) -> Self {
		let node = self.node_mut();
		node.text = text.into();
		node.trace_void_content();
		self
	}

	/// Replaces all children.
	///
	/// Absent children (`None`) are dropped. Calling this twice discards the
	/// first set.
	///
	/// ## Example
	///
	/// ```ignore
	/// div().body((
	///     h1().text("Title"),
	///     when(show_subtitle, h2().text("Subtitle")),
	///     form().action("/submit"),
	/// ))
	/// ```
	fn body(mut self, children: impl IntoChildren) -> Self {
		let node = self.node_mut();
		node.children.clear();
		children.push_children(&mut node.children);
		node.trace_void_content();
		self
	}

	/// Replaces all children from an iterator. Absent children are dropped.
	fn body_list<I>(mut self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: IntoChild,
	{
		let node = self.node_mut();
		node.children = children
			.into_iter()
			.filter_map(IntoChild::into_child)
			.collect();
		node.trace_void_content();
		self
	}

	/// Sets an attribute, replacing the value if the name is already present.
	fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.node_mut()
			.attributes
			.insert(name.into(), value.into());
		self
	}

	/// Removes an attribute. Does nothing if it was never set.
	fn remove_attr(mut self, name: &str) -> Self {
		self.node_mut().attributes.shift_remove(name);
		self
	}

	/// Sets an inline style property.
	fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.node_mut()
			.styles
			.insert(property.into(), value.into());
		self
	}

	/// Removes an inline style property. Does nothing if it was never set.
	fn remove_style(mut self, property: &str) -> Self {
		self.node_mut().styles.shift_remove(property);
		self
	}

	/// Adds a class name.
	fn class(mut self, name: impl Into<String>) -> Self {
		self.node_mut().classes.insert(name.into());
		self
	}

	/// Adds several class names.
	fn classes<I>(mut self, names: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.node_mut()
			.classes
			.extend(names.into_iter().map(Into::into));
		self
	}

	/// Removes a class name. Does nothing if it is absent.
	fn remove_class(mut self, name: &str) -> Self {
		self.node_mut().classes.shift_remove(name);
		self
	}

	/// Removes several class names.
	fn remove_classes<I>(mut self, names: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let classes = &mut self.node_mut().classes;
		for name in names {
			classes.shift_remove(name.as_ref());
		}
		self
	}

	/// Sets the `for` attribute (e.g. on `<label>` and `<output>`).
	fn html_for(self, value: impl Into<String>) -> Self {
		self.attr("for", value)
	}
}

impl Element for Node {
	fn node(&self) -> &Node {
		self
	}

	fn node_mut(&mut self) -> &mut Node {
		self
	}
}
