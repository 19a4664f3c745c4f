//! Attributes with a value.

use std::borrow::Cow;

use sanity_html::Node;

/// Defines one constructor per valued attribute.
macro_rules! define_attributes {
	($($name:ident => $attr:literal),* $(,)?) => {
		$(
			#[doc = concat!("Creates the `", $attr, "` attribute.")]
			pub fn $name(value: impl Into<Cow<'static, str>>) -> Node {
				Node::attribute($attr, value)
			}
		)*
	};
}

define_attributes! {
	abbr => "abbr",
	accept => "accept",
	accept_charset => "accept-charset",
	accesskey => "accesskey",
	action => "action",
	allow => "allow",
	alt => "alt",
	r#as => "as",
	autocapitalize => "autocapitalize",
	autocomplete => "autocomplete",
	blocking => "blocking",
	charset => "charset",
	cite => "cite",
	class => "class",
	color => "color",
	cols => "cols",
	colspan => "colspan",
	content => "content",
	contenteditable => "contenteditable",
	coords => "coords",
	crossorigin => "crossorigin",
	data => "data",
	datetime => "datetime",
	decoding => "decoding",
	dir => "dir",
	dirname => "dirname",
	draggable => "draggable",
	enctype => "enctype",
	enterkeyhint => "enterkeyhint",
	fetchpriority => "fetchpriority",
	r#for => "for",
	form => "form",
	formaction => "formaction",
	formenctype => "formenctype",
	formmethod => "formmethod",
	formtarget => "formtarget",
	headers => "headers",
	height => "height",
	high => "high",
	href => "href",
	hreflang => "hreflang",
	http_equiv => "http-equiv",
	id => "id",
	imagesizes => "imagesizes",
	imagesrcset => "imagesrcset",
	inputmode => "inputmode",
	integrity => "integrity",
	is => "is",
	itemid => "itemid",
	itemprop => "itemprop",
	itemref => "itemref",
	itemtype => "itemtype",
	kind => "kind",
	label => "label",
	lang => "lang",
	list => "list",
	loading => "loading",
	low => "low",
	max => "max",
	maxlength => "maxlength",
	media => "media",
	method => "method",
	min => "min",
	minlength => "minlength",
	name => "name",
	nonce => "nonce",
	optimum => "optimum",
	pattern => "pattern",
	ping => "ping",
	placeholder => "placeholder",
	popover => "popover",
	popovertarget => "popovertarget",
	popovertargetaction => "popovertargetaction",
	poster => "poster",
	preload => "preload",
	referrerpolicy => "referrerpolicy",
	rel => "rel",
	rows => "rows",
	rowspan => "rowspan",
	sandbox => "sandbox",
	scope => "scope",
	shape => "shape",
	size => "size",
	sizes => "sizes",
	slot => "slot",
	span => "span",
	spellcheck => "spellcheck",
	src => "src",
	srcdoc => "srcdoc",
	srclang => "srclang",
	srcset => "srcset",
	start => "start",
	step => "step",
	style => "style",
	tabindex => "tabindex",
	target => "target",
	title => "title",
	translate => "translate",
	r#type => "type",
	usemap => "usemap",
	value => "value",
	width => "width",
	wrap => "wrap",
}

/// Creates an attribute with any name.
///
/// For attributes this crate has no function for, such as `aria-*` or
/// framework-specific attributes.
///
/// ```
/// let node = sanity_attr::custom("aria-label", "Close");
/// assert_eq!(node.name(), Some("aria-label"));
/// ```
pub fn custom(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Node {
	Node::attribute(name, value)
}

/// Creates a `data-{key}` attribute.
pub fn data_attr(key: impl AsRef<str>, value: impl Into<Cow<'static, str>>) -> Node {
	Node::attribute(format!("data-{}", key.as_ref()), value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use sanity_html::NodeKind;

	#[rstest]
	#[case(id("main"), "id", "main")]
	#[case(class("a b"), "class", "a b")]
	#[case(r#type("text"), "type", "text")]
	#[case(r#for("email"), "for", "email")]
	#[case(r#as("style"), "as", "style")]
	#[case(http_equiv("refresh"), "http-equiv", "refresh")]
	#[case(accept_charset("utf-8"), "accept-charset", "utf-8")]
	#[case(href("/a?b=1&c=2"), "href", "/a?b=1&amp;c=2")]
	fn test_attribute_names(#[case] node: Node, #[case] name: &str, #[case] value: &str) {
		assert_eq!(node.kind(), NodeKind::Attribute);
		assert_eq!(node.name(), Some(name));
		assert_eq!(node.value(), Some(value));
	}

	#[rstest]
	fn test_owned_value() {
		let node = title(format!("Page {}", 2));
		assert_eq!(node.value(), Some("Page 2"));
	}

	#[rstest]
	fn test_custom() {
		let node = custom("hx-get", "/items");
		assert_eq!(node.name(), Some("hx-get"));
		assert_eq!(node.value(), Some("/items"));
	}

	#[rstest]
	#[case("id", "data-id")]
	#[case("user-name", "data-user-name")]
	fn test_data_attr(#[case] key: &str, #[case] expected: &str) {
		let node = data_attr(key, "1");
		assert_eq!(node.name(), Some(expected));
		assert_eq!(node.value(), Some("1"));
	}

	#[rstest]
	fn test_data_attr_key_is_escaped() {
		assert_eq!(data_attr("<x>", "1").name(), Some("data-&lt;x&gt;"));
	}
}
