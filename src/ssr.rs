//! HTML serializer module.
//!
//! # Examples
//!
//! ```rust,ignore
//! use hax::ssr::{HtmlRenderer, RenderOptions};
//!
//! let mut renderer = HtmlRenderer::with_options(RenderOptions::new().raw_ids());
//! renderer.render(&page);
//! let html = renderer.into_string();
//! ```

pub use hax_ssr::*;
