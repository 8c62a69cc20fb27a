//! Errors raised while loading render options.

use std::path::PathBuf;

/// Errors returned by the [`RenderOptions`](crate::RenderOptions) loaders.
///
/// Rendering itself never fails; only configuration loading does.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
	#[error("Failed to read {}: {}", .path.display(), .source)]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}
