//! Render configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Default initial buffer capacity for a fresh renderer.
const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// How void elements close their open tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoidTagStyle {
	/// `<br/>`
	#[default]
	Compact,
	/// `<br />`
	Spaced,
}

impl VoidTagStyle {
	/// Returns the text that closes a void element's open tag.
	pub fn terminator(self) -> &'static str {
		match self {
			VoidTagStyle::Compact => "/>",
			VoidTagStyle::Spaced => " />",
		}
	}
}

/// Options for [`HtmlRenderer`](crate::HtmlRenderer).
///
/// Every field has a default, so a configuration file only needs the keys it
/// changes:
///
/// ```toml
/// escape_ids = false
/// void_style = "spaced"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Whether the id value is HTML-escaped like every other value.
	///
	/// Set to `false` to emit ids verbatim.
	pub escape_ids: bool,
	/// How void elements are closed.
	pub void_style: VoidTagStyle,
	/// Initial capacity of the output buffer.
	pub initial_capacity: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			escape_ids: true,
			void_style: VoidTagStyle::Compact,
			initial_capacity: DEFAULT_INITIAL_CAPACITY,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Emits id values without escaping.
	pub fn raw_ids(mut self) -> Self {
		self.escape_ids = false;
		self
	}

	/// Sets whether id values are escaped.
	pub fn escape_ids(mut self, escape: bool) -> Self {
		self.escape_ids = escape;
		self
	}

	/// Sets how void elements are closed.
	pub fn void_style(mut self, style: VoidTagStyle) -> Self {
		self.void_style = style;
		self
	}

	/// Sets the initial buffer capacity.
	pub fn initial_capacity(mut self, capacity: usize) -> Self {
		self.initial_capacity = capacity;
		self
	}

	/// Parses options from a TOML document.
	pub fn from_toml_str(contents: &str) -> Result<Self, OptionsError> {
		Ok(toml::from_str(contents)?)
	}

	/// Parses options from a JSON document.
	pub fn from_json_str(contents: &str) -> Result<Self, OptionsError> {
		Ok(serde_json::from_str(contents)?)
	}

	/// Loads options from a `.toml` or `.json` file.
	///
	/// # Errors
	///
	/// Returns [`OptionsError::Io`] if the file cannot be read,
	/// [`OptionsError::UnsupportedFormat`] for any other extension, or the
	/// matching parse error.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents),
			Some("json") => Self::from_json_str(&contents),
			_ => Err(OptionsError::UnsupportedFormat(
				"Supported formats: .toml, .json".to_string(),
			)),
		}
	}
}
