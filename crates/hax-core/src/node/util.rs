//! Tag-name helpers shared by the node model and the serializer.

use crate::error::TagNameError;

/// Elements that never carry content and are serialized self-closing.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Returns `true` if `tag` names a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Characters that would break the open tag if they appeared in a tag name.
const FORBIDDEN_TAG_CHARS: &[char] = &['<', '>', '/', '"', '\'', '='];

/// Checks that a tag name can be emitted verbatim between `<` and `>`.
pub(crate) fn validate_tag_name(tag: &str) -> Result<(), TagNameError> {
	if tag.is_empty() {
		return Err(TagNameError::Empty);
	}

	if let Some(ch) = tag
		.chars()
		.find(|c| c.is_whitespace() || FORBIDDEN_TAG_CHARS.contains(c))
	{
		return Err(TagNameError::InvalidCharacter {
			tag: tag.to_string(),
			ch,
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("area")]
	#[case("base")]
	#[case("br")]
	#[case("col")]
	#[case("embed")]
	#[case("hr")]
	#[case("img")]
	#[case("input")]
	#[case("link")]
	#[case("meta")]
	#[case("param")]
	#[case("source")]
	#[case("track")]
	#[case("wbr")]
	fn test_void_elements(#[case] tag: &str) {
		assert!(is_void_element(tag));
	}

	#[rstest]
	#[case("div")]
	#[case("textarea")]
	#[case("output")]
	#[case("INPUT")]
	fn test_non_void_elements(#[case] tag: &str) {
		assert!(!is_void_element(tag));
	}

	#[rstest]
	fn test_validate_tag_name() {
		assert!(validate_tag_name("div").is_ok());
		assert!(validate_tag_name("my-widget").is_ok());
		assert_eq!(validate_tag_name(""), Err(TagNameError::Empty));
		assert_eq!(
			validate_tag_name("di v"),
			Err(TagNameError::InvalidCharacter {
				tag: "di v".to_string(),
				ch: ' ',
			})
		);
		assert!(matches!(
			validate_tag_name("a>b"),
			Err(TagNameError::InvalidCharacter { ch: '>', .. })
		));
	}
}
