//! # hax
//!
//! A programmatic HTML document builder for server-side Rust.
//!
//! Build an in-memory tree of elements with a fluent API, then serialize it
//! to an escaped HTML string. No template language is involved: the tree is
//! ordinary Rust values.
//!
//! ## Core Principles
//!
//! - **One node type**: every element is a [`Node`]; family wrappers such as
//!   [`Form`] only add typed setters over the same attribute map
//! - **Chaining by move**: mutators consume and return the node, so trees are
//!   built in place without copies
//! - **Absence is a value**: `Option<Node>` children are dropped, which is how
//!   [`when`] and [`show`] express conditional rendering
//! - **Deterministic output**: classes, styles and attributes render in
//!   insertion order
//!
//! ## Feature Flags
//!
//! - `builder` - Element constructors and conditional helpers
//! - `ssr` - The HTML serializer
//! - `full` (default) - Everything
//!
//! With default features disabled only the node model is built.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use hax::prelude::*;
//!
//! let page = div().id("container").body((
//!     h1().class("title").text("Demo"),
//!     form()
//!         .action("/endpoint/to/backend")
//!         .method("GET")
//!         .body((
//!             label().text("Name").html_for("name-input"),
//!             input().placeholder("Nombre").id("name-input"),
//!         )),
//! ));
//!
//! let html = render_to_string(&page);
//! ```

#[cfg(feature = "builder")]
pub mod builder;
pub mod core;
#[cfg(feature = "ssr")]
pub mod ssr;

// Re-export the node model
pub use hax_core::{
	Anchor, AttributeMap, ClassSet, Element, Form, Input, IntoChild, IntoChildren, Node,
	TagNameError, TextArea, VOID_ELEMENTS, is_void_element,
};

// Re-export conditionals
#[cfg(feature = "builder")]
pub use hax_builder::{each, element, show, try_element, when};

// Re-export the serializer
#[cfg(feature = "ssr")]
pub use hax_ssr::{
	HtmlRenderer, OptionsError, RenderOptions, VoidTagStyle, html_escape, render_to_string,
	render_to_string_with,
};

/// Prelude module for convenient imports
///
/// Brings the [`Element`] trait into scope (required for chaining) together
/// with every element constructor and the serializer entry points.
pub mod prelude {
	pub use crate::{Anchor, Element, Form, Input, IntoChild, IntoChildren, Node, TextArea};

	#[cfg(feature = "builder")]
	pub use hax_builder::builder::*;
	#[cfg(feature = "builder")]
	pub use hax_builder::{each, show, when};

	#[cfg(feature = "ssr")]
	pub use hax_ssr::{HtmlRenderer, RenderOptions, VoidTagStyle, render_to_string};
}
