//! Boolean attributes, rendered by name alone.

use sanity_html::Node;

macro_rules! define_bool_attributes {
	($($name:ident => $attr:literal),* $(,)?) => {
		$(
			#[doc = concat!("Creates the `", $attr, "` boolean attribute.")]
			pub fn $name() -> Node {
				Node::bool_attribute($attr)
			}
		)*
	};
}

define_bool_attributes! {
	allowfullscreen => "allowfullscreen",
	r#async => "async",
	autofocus => "autofocus",
	autoplay => "autoplay",
	checked => "checked",
	controls => "controls",
	default => "default",
	defer => "defer",
	disabled => "disabled",
	formnovalidate => "formnovalidate",
	hidden => "hidden",
	inert => "inert",
	ismap => "ismap",
	itemscope => "itemscope",
	r#loop => "loop",
	multiple => "multiple",
	muted => "muted",
	nomodule => "nomodule",
	novalidate => "novalidate",
	open => "open",
	playsinline => "playsinline",
	readonly => "readonly",
	required => "required",
	reversed => "reversed",
	selected => "selected",
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use sanity_html::NodeKind;

	#[rstest]
	#[case(r#async(), "async")]
	#[case(r#loop(), "loop")]
	#[case(default(), "default")]
	#[case(disabled(), "disabled")]
	#[case(selected(), "selected")]
	fn test_bool_attribute_names(#[case] node: Node, #[case] name: &str) {
		assert_eq!(node.kind(), NodeKind::BoolAttribute);
		assert_eq!(node.name(), Some(name));
		assert_eq!(node.value(), None);
	}

	#[rstest]
	fn test_renders_without_value() {
		let node = Node::tag("button", [disabled(), Node::text("Go")]);
		assert_eq!(node.render_to_string(), "<button disabled>Go</button>");
	}
}
