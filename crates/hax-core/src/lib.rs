//! Node model for the hax HTML builder.
//!
//! This crate owns the in-memory element tree that client code assembles
//! before handing it to a serializer. It has no knowledge of output formats.
//!
//! ## Overview
//!
//! - [`Node`]: a tagged element with an id, text, attributes, inline styles,
//!   classes and ordered children
//! - [`Element`]: the chainable mutator surface shared by [`Node`] and every
//!   family wrapper
//! - [`Anchor`], [`Input`], [`TextArea`], [`Form`]: family wrappers adding
//!   tag-specific setters over the same attribute map
//! - [`IntoChild`] / [`IntoChildren`]: conversions used by `body` and
//!   `body_list`, where `None` is an absent child and is dropped
//!
//! ## Example
//!
//! ```ignore
//! use hax_core::{Element, Node};
//!
//! let node = Node::new("div")
//!     .id("container")
//!     .class("wrapper")
//!     .body(Node::new("h1").text("Demo"));
//!
//! assert_eq!(node.children().len(), 1);
//! ```

pub mod error;
pub mod node;

pub use error::TagNameError;
pub use node::family::{Anchor, Form, Input, TextArea};
pub use node::util::{VOID_ELEMENTS, is_void_element};
pub use node::{AttributeMap, ClassSet, Element, IntoChild, IntoChildren, Node};
