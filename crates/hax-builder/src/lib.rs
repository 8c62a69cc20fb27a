//! Element constructors and conditional helpers for the hax HTML builder.
//!
//! - [`builder`]: one zero-argument factory per HTML tag, plus [`element`]
//!   for tags outside the catalog
//! - [`control`]: [`when`], [`show`] and [`each`], which produce children
//!   that may be absent
//!
//! ## Example
//!
//! ```ignore
//! use hax_builder::{div, h1, when};
//! use hax_core::Element;
//!
//! let page = div()
//!     .id("container")
//!     .body((h1().class("title").text("Demo"), when(logged_in, div())));
//! ```

pub mod builder;
pub mod control;

pub use builder::*;
pub use control::{each, show, when};
