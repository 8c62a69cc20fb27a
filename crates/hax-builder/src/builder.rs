//! HTML element constructors.
//!
//! Every constructor returns a fresh node with its tag already set. Tags that
//! have a family wrapper (`a`, `input`, `textarea`, `form`) return the wrapper
//! instead of a plain [`Node`](hax_core::Node).
//!
//! The catalog is open: anything missing can be built with [`element`] or by
//! adding another `define_element!` entry.

pub mod html;

pub use html::*;
