//! HTML escaping for text content and attribute values.

use std::borrow::Cow;

/// Escapes a value for use in text content or a double-quoted attribute.
///
/// Quotes use numeric references (`&#34;`, `&#39;`) rather than named ones,
/// the table used by Go's `html.EscapeString`, so output stays byte-for-byte
/// comparable with documents produced by that escaper. `&`, `<` and `>` map
/// to `&amp;`, `&lt;` and `&gt;`.
///
/// The input is borrowed back unchanged when it holds none of those five
/// characters.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&#34;"),
				'\'' => escaped.push_str("&#39;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_html_escape_no_special_chars() {
		assert!(matches!(html_escape("Hello World"), Cow::Borrowed("Hello World")));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("I'm a button", "I&#39;m a button")]
	#[case("\"quoted\"", "&#34;quoted&#34;")]
	#[case("&amp;", "&amp;amp;")]
	#[case("ñandú <3", "ñandú &lt;3")]
	fn test_html_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}
}
