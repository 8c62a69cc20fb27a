//! Node model module.
//!
//! This module provides access to [`Node`](hax_core::Node), the
//! [`Element`](hax_core::Element) mutator trait, the family wrappers and the
//! void-element table.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hax::core::{Element, Node};
//!
//! let node = Node::new("section").class("intro");
//! ```

pub use hax_core::*;
