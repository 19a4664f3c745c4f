//! HTML escaping.
//!
//! Escaping is applied once, when a [`Node`](crate::Node) is constructed.
//! Rendering never escapes again, so a stored string is always emitted as-is.

use std::borrow::Cow;

const SPECIAL_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&#34;`
/// - `'` → `&#39;`
///
/// The output is safe both as element text and inside a double-quoted
/// attribute value. Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Example
///
/// ```
/// use sanity_html::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("<a href=\"x\">"), "&lt;a href=&#34;x&#34;&gt;");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
	if !needs_escape(s) {
		return Cow::Borrowed(s);
	}

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
}

/// Escapes a string that is about to be stored in a node.
///
/// Static strings with nothing to escape stay borrowed, and owned strings
/// with nothing to escape are reused without reallocating.
pub(crate) fn escape_stored(s: Cow<'static, str>) -> Cow<'static, str> {
	match s {
		Cow::Borrowed(s) => escape(s),
		Cow::Owned(s) if needs_escape(&s) => Cow::Owned(escape(&s).into_owned()),
		owned => owned,
	}
}

fn needs_escape(s: &str) -> bool {
	s.contains(SPECIAL_CHARS)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_no_special_chars() {
		assert_eq!(escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("\"quoted\"", "&#34;quoted&#34;")]
	#[case("it's", "it&#39;s")]
	#[case("<script>alert('x')</script>", "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;")]
	fn test_escape_special_chars(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape(input), expected);
	}

	#[rstest]
	fn test_escape_reescapes_entities() {
		// Input is always text, entities included.
		assert_eq!(escape("&amp;"), "&amp;amp;");
	}

	#[rstest]
	fn test_escape_keeps_multibyte_chars() {
		assert_eq!(escape("日本語 <b>"), "日本語 &lt;b&gt;");
	}

	#[rstest]
	fn test_escape_stored_borrowed_stays_borrowed() {
		let stored = escape_stored(Cow::Borrowed("static"));
		assert!(matches!(stored, Cow::Borrowed("static")));
	}

	#[rstest]
	fn test_escape_stored_owned_escaped() {
		let stored = escape_stored(Cow::Owned("a<b".to_string()));
		assert_eq!(stored, "a&lt;b");
	}

	#[rstest]
	fn test_escape_stored_owned_untouched() {
		let stored = escape_stored(Cow::Owned("plain".to_string()));
		assert!(matches!(stored, Cow::Owned(ref s) if s == "plain"));
	}
}
