//! Element constructors and conditional helpers module.
//!
//! # Examples
//!
//! ```rust,ignore
//! use hax::builder::{div, li, ul, when};
//!
//! let list = ul().body_list(items.iter().map(|item| li().text(item)));
//! let banner = when(show_banner, div().class("banner"));
//! ```

// Re-export all hax-builder functionality
pub use hax_builder::*;
