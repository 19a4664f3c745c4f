//! Void elements, rendered as an opening tag only.

use sanity_html::Node;

macro_rules! define_void_tags {
	($($name:ident => $tag:literal),* $(,)?) => {
		$(
			#[doc = concat!("Creates a `<", $tag, ">` void element. Only attribute children are rendered.")]
			pub fn $name(children: impl IntoIterator<Item = Node>) -> Node {
				Node::void_tag($tag, children)
			}
		)*
	};
}

define_void_tags! {
	area => "area",
	base => "base",
	basefont => "basefont",
	br => "br",
	col => "col",
	embed => "embed",
	hr => "hr",
	img => "img",
	input => "input",
	link => "link",
	meta => "meta",
	param => "param",
	source => "source",
	track => "track",
	wbr => "wbr",
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use sanity_attr::{alt, src};
	use sanity_html::NodeKind;

	#[rstest]
	#[case(br([]), "br")]
	#[case(img([]), "img")]
	#[case(wbr([]), "wbr")]
	#[case(input([]), "input")]
	fn test_void_tag_names(#[case] node: Node, #[case] name: &str) {
		assert_eq!(node.kind(), NodeKind::VoidTag);
		assert_eq!(node.name(), Some(name));
	}

	#[rstest]
	fn test_img_renders_attributes_only() {
		let node = img([src("/logo.png"), alt("Logo"), Node::text("ignored")]);
		assert_eq!(node.render_to_string(), r#"<img src="/logo.png" alt="Logo">"#);
	}
}
