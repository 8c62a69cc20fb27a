//! String serializer for hax node trees.
//!
//! [`HtmlRenderer`] walks a [`Node`](hax_core::Node) depth-first and appends
//! HTML to an internal buffer. Output is deterministic: classes, styles and
//! attributes are emitted in insertion order, in the fixed section order
//! class, style, generic attributes, id.
//!
//! ## Example
//!
//! ```ignore
//! use hax_builder::{div, h1};
//! use hax_core::Element;
//! use hax_ssr::HtmlRenderer;
//!
//! let tree = div().id("container").body(h1().class("title").text("Demo"));
//!
//! let mut renderer = HtmlRenderer::new();
//! renderer.render(&tree);
//! assert_eq!(
//!     renderer.as_str(),
//!     r#"<div id="container"><h1 class="title">Demo</h1></div>"#
//! );
//! ```
//!
//! A renderer accumulates output across calls. Call
//! [`HtmlRenderer::reset`] between unrelated documents.

pub mod error;
pub mod escape;
pub mod options;
pub mod renderer;

pub use error::OptionsError;
pub use escape::html_escape;
pub use options::{RenderOptions, VoidTagStyle};
pub use renderer::{HtmlRenderer, render_to_string, render_to_string_with};
