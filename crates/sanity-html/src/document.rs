//! Full documents.

use crate::node::Node;

impl Node {
	/// Creates a full HTML document: the `<!DOCTYPE html>` preamble followed
	/// by an `<html>` element wrapping `children`.
	///
	/// ```
	/// use sanity_html::Node;
	///
	/// let doc = Node::document([
	///     Node::attribute("lang", "en"),
	///     Node::text("Hello World!"),
	/// ]);
	/// assert_eq!(
	///     doc.render_to_string(),
	///     r#"<!DOCTYPE html><html lang="en">Hello World!</html>"#,
	/// );
	/// ```
	pub fn document(children: impl IntoIterator<Item = Node>) -> Self {
		Node::combine([
			Node::void_tag("!DOCTYPE", [Node::bool_attribute("html")]),
			Node::tag("html", children),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document() {
		assert_eq!(
			Node::document([]).render_to_string(),
			"<!DOCTYPE html><html></html>"
		);
	}

	#[rstest]
	fn test_document_with_lang_and_text() {
		let doc = Node::document([Node::attribute("lang", "en"), Node::text("Hello World!")]);
		assert_eq!(
			doc.render_to_string(),
			r#"<!DOCTYPE html><html lang="en">Hello World!</html>"#
		);
	}

	#[rstest]
	fn test_document_head_and_body() {
		let doc = Node::document([
			Node::tag("head", [Node::tag("title", [Node::text("Sanity News")])]),
			Node::attribute("lang", "en"),
			Node::tag("body", []),
		]);
		assert_eq!(
			doc.render_to_string(),
			concat!(
				"<!DOCTYPE html>",
				r#"<html lang="en">"#,
				"<head><title>Sanity News</title></head>",
				"<body></body>",
				"</html>",
			)
		);
	}
}
