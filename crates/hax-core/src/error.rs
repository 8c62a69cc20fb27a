//! Error types for node construction.

/// Errors returned by [`Node::try_new`](crate::Node::try_new).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagNameError {
	#[error("Tag name cannot be empty")]
	Empty,

	#[error("Tag name '{tag}' contains invalid character: '{ch}'")]
	InvalidCharacter { tag: String, ch: char },
}
