//! Family wrappers.
//!
//! A family wrapper owns a [`Node`] with a fixed tag and adds setters for
//! attributes that tag commonly carries. The setters write to the same
//! attribute map as [`Element::attr`]; the serializer never sees the wrapper.

use super::{Element, IntoChild, IntoChildren, Node};

/// Macro for defining a family wrapper over a fixed tag
macro_rules! define_family {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq)]
		pub struct $name(Node);

		impl $name {
			#[doc = concat!("Creates an empty `<", $tag, ">` element.")]
			pub fn new() -> Self {
				Self(Node::new($tag))
			}

			/// Unwraps the generic node.
			pub fn into_node(self) -> Node {
				self.0
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}

		impl Element for $name {
			fn node(&self) -> &Node {
				&self.0
			}

			fn node_mut(&mut self) -> &mut Node {
				&mut self.0
			}
		}

		impl AsRef<Node> for $name {
			fn as_ref(&self) -> &Node {
				&self.0
			}
		}

		impl From<$name> for Node {
			fn from(value: $name) -> Self {
				value.0
			}
		}

		impl IntoChild for $name {
			fn into_child(self) -> Option<Node> {
				Some(self.0)
			}
		}

		impl IntoChildren for $name {
			fn push_children(self, out: &mut Vec<Node>) {
				out.push(self.0);
			}
		}
	};
}

define_family!(
	/// An `<a>` element.
	Anchor,
	"a"
);

define_family!(
	/// An `<input>` element. Void: it never renders children or text.
	Input,
	"input"
);

define_family!(
	/// A `<textarea>` element.
	TextArea,
	"textarea"
);

define_family!(
	/// A `<form>` element.
	Form,
	"form"
);

impl Anchor {
	/// Sets the `href` attribute.
	pub fn href(self, url: impl Into<String>) -> Self {
		self.attr("href", url)
	}

	/// Sets the `target` attribute (e.g. `_blank`).
	pub fn target(self, target: impl Into<String>) -> Self {
		self.attr("target", target)
	}
}

impl Input {
	/// Sets the `value` attribute.
	pub fn value(self, value: impl Into<String>) -> Self {
		self.attr("value", value)
	}

	/// Sets the `placeholder` attribute.
	pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
		self.attr("placeholder", placeholder)
	}

	/// Sets the `type` attribute.
	pub fn input_type(self, kind: impl Into<String>) -> Self {
		self.attr("type", kind)
	}

	/// Sets the `name` attribute.
	pub fn name(self, name: impl Into<String>) -> Self {
		self.attr("name", name)
	}
}

impl TextArea {
	/// Sets the `value` attribute.
	pub fn value(self, value: impl Into<String>) -> Self {
		self.attr("value", value)
	}

	/// Sets the `placeholder` attribute.
	pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
		self.attr("placeholder", placeholder)
	}

	/// Sets the `name` attribute.
	pub fn name(self, name: impl Into<String>) -> Self {
		self.attr("name", name)
	}
}

impl Form {
	/// Sets the `action` attribute, the endpoint the form submits to.
	pub fn action(self, endpoint: impl Into<String>) -> Self {
		self.attr("action", endpoint)
	}

	/// Sets the `method` attribute (e.g. `GET`, `POST`).
	pub fn method(self, method: impl Into<String>) -> Self {
		self.attr("method", method)
	}
}
