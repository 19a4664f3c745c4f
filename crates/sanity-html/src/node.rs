//! The node model.
//!
//! [`Node`] is the single value type of the library. It is a tagged union
//! over seven kinds (see [`NodeKind`]) and is immutable once constructed.
//!
//! Elements take one ordered child list that mixes attributes and content.
//! Which children are attributes and which are content is never stored; it
//! is decided by the traversal visiting the list (see [`crate::visitor`]).
//!
//! ## Example
//!
//! ```
//! use sanity_html::Node;
//!
//! let view = Node::tag("p", [
//!     Node::attribute("id", "foo-bar"),
//!     Node::tag("span", []),
//! ]);
//!
//! assert_eq!(view.render_to_string(), r#"<p id="foo-bar"><span></span></p>"#);
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::escape::escape_stored;

/// Child list shared by `Tag`, `VoidTag` and `Many`.
///
/// Children live in a single allocation and are shared on clone.
pub(crate) type Children = Arc<[Node]>;

/// The kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// Renders as nothing.
	Empty,
	/// A `name="value"` attribute.
	Attribute,
	/// A valueless attribute such as `disabled`.
	BoolAttribute,
	/// An element with an opening and a closing tag.
	Tag,
	/// An element without a closing tag or content, such as `<img>`.
	VoidTag,
	/// Text content, escaped or raw.
	Text,
	/// A transparent group of nodes.
	Many,
}

/// A renderable fragment of an HTML document.
///
/// Nodes are immutable and may be freely cloned and shared across threads.
/// Cloning is cheap: child lists are reference counted.
///
/// The default node is empty and renders to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
	pub(crate) repr: Repr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Repr {
	#[default]
	Empty,
	Attribute {
		name: Cow<'static, str>,
		value: Cow<'static, str>,
	},
	BoolAttribute {
		name: Cow<'static, str>,
	},
	Tag {
		name: Cow<'static, str>,
		children: Children,
	},
	VoidTag {
		name: Cow<'static, str>,
		children: Children,
	},
	Text {
		content: Cow<'static, str>,
		raw: bool,
	},
	Many(Children),
}

impl Node {
	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Creates an element that has a closing tag, like `<div>` or `<button>`.
	///
	/// `name` is used verbatim and must be a valid tag name. `children` may
	/// mix attributes and content in any order: attributes are rendered
	/// inside the opening tag, content between the opening and closing tags.
	pub fn tag(
		name: impl Into<Cow<'static, str>>,
		children: impl IntoIterator<Item = Node>,
	) -> Self {
		Self {
			repr: Repr::Tag {
				name: name.into(),
				children: children.into_iter().collect(),
			},
		}
	}

	/// Creates an element that has no closing tag, like `<img>` or `<input>`.
	///
	/// Only attribute children are rendered. Content children are accepted
	/// but never rendered.
	pub fn void_tag(
		name: impl Into<Cow<'static, str>>,
		children: impl IntoIterator<Item = Node>,
	) -> Self {
		Self {
			repr: Repr::VoidTag {
				name: name.into(),
				children: children.into_iter().collect(),
			},
		}
	}

	/// Creates an attribute with a value, like `id="some-id"`.
	///
	/// Both the name and the value are escaped.
	pub fn attribute(
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			repr: Repr::Attribute {
				name: escape_stored(name.into()),
				value: escape_stored(value.into()),
			},
		}
	}

	/// Creates an attribute without a value, like `disabled` in
	/// `<button disabled>Submit</button>`.
	///
	/// The name is escaped.
	pub fn bool_attribute(name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			repr: Repr::BoolAttribute {
				name: escape_stored(name.into()),
			},
		}
	}

	/// Creates text content. HTML in the content is escaped.
	///
	/// ```
	/// use sanity_html::Node;
	///
	/// assert_eq!(Node::text("<b>").render_to_string(), "&lt;b&gt;");
	/// ```
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self {
			repr: Repr::Text {
				content: escape_stored(content.into()),
				raw: false,
			},
		}
	}

	/// Creates text content that is emitted without escaping.
	///
	/// The caller is responsible for the content being safe HTML.
	pub fn raw_text(content: impl Into<Cow<'static, str>>) -> Self {
		Self {
			repr: Repr::Text {
				content: content.into(),
				raw: true,
			},
		}
	}

	/// Combines nodes into a single node without adding a wrapping element.
	///
	/// ```
	/// use sanity_html::Node;
	///
	/// let both = Node::combine([
	///     Node::tag("div", [Node::text("hello")]),
	///     Node::tag("div", [Node::text("world")]),
	/// ]);
	/// assert_eq!(both.render_to_string(), "<div>hello</div><div>world</div>");
	/// ```
	pub fn combine(nodes: impl IntoIterator<Item = Node>) -> Self {
		Self {
			repr: Repr::Many(nodes.into_iter().collect()),
		}
	}

	/// Applies `view` to each item and combines the results in input order.
	///
	/// All items are visited immediately. An empty input renders as nothing
	/// and never calls `view`. An absent collection can be passed as
	/// `option.into_iter().flatten()`.
	///
	/// ```
	/// use sanity_html::Node;
	///
	/// let fruits = ["apple", "bannana", "orange"];
	/// let list = Node::tag("ul", [Node::for_each(fruits, |fruit| {
	///     Node::tag("li", [Node::text(fruit)])
	/// })]);
	/// assert_eq!(
	///     list.render_to_string(),
	///     "<ul><li>apple</li><li>bannana</li><li>orange</li></ul>",
	/// );
	/// ```
	pub fn for_each<I, F, N>(items: I, mut view: F) -> Self
	where
		I: IntoIterator,
		F: FnMut(I::Item) -> N,
		N: IntoNode,
	{
		Self::combine(items.into_iter().map(|item| view(item).into_node()))
	}

	/// Returns the kind of this node.
	pub fn kind(&self) -> NodeKind {
		match &self.repr {
			Repr::Empty => NodeKind::Empty,
			Repr::Attribute { .. } => NodeKind::Attribute,
			Repr::BoolAttribute { .. } => NodeKind::BoolAttribute,
			Repr::Tag { .. } => NodeKind::Tag,
			Repr::VoidTag { .. } => NodeKind::VoidTag,
			Repr::Text { .. } => NodeKind::Text,
			Repr::Many(_) => NodeKind::Many,
		}
	}

	/// Returns the tag or attribute name, as stored.
	pub fn name(&self) -> Option<&str> {
		match &self.repr {
			Repr::Attribute { name, .. }
			| Repr::BoolAttribute { name }
			| Repr::Tag { name, .. }
			| Repr::VoidTag { name, .. } => Some(name.as_ref()),
			_ => None,
		}
	}

	/// Returns the attribute value or text content, as stored.
	///
	/// Escaped content is returned in its escaped form.
	pub fn value(&self) -> Option<&str> {
		match &self.repr {
			Repr::Attribute { value, .. } => Some(value.as_ref()),
			Repr::Text { content, .. } => Some(content.as_ref()),
			_ => None,
		}
	}

	/// Returns the child list of a `Tag`, `VoidTag` or `Many` node.
	///
	/// Every other kind has no children.
	pub fn children(&self) -> &[Node] {
		match &self.repr {
			Repr::Tag { children, .. } | Repr::VoidTag { children, .. } | Repr::Many(children) => {
				&children[..]
			}
			_ => &[],
		}
	}

	/// Returns `true` for text created with [`Node::raw_text`].
	pub fn is_raw(&self) -> bool {
		matches!(self.repr, Repr::Text { raw: true, .. })
	}

	/// Returns `true` if this node renders as nothing in every context.
	pub fn is_empty(&self) -> bool {
		match &self.repr {
			Repr::Empty => true,
			Repr::Many(children) => children.iter().all(Node::is_empty),
			_ => false,
		}
	}
}

/// Trait for types that can be converted into a [`Node`].
///
/// Strings convert to escaped text, `Option` and `()` convert to an empty
/// node when absent, and collections and tuples convert to a group.
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::text(self)
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::text(self.clone())
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::text(self)
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::text(self)
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::empty()
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::empty(),
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::combine(self.into_iter().map(IntoNode::into_node))
	}
}

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::combine([self.0.into_node(), self.1.into_node()])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::combine([self.0.into_node(), self.1.into_node(), self.2.into_node()])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode, D: IntoNode> IntoNode for (A, B, C, D) {
	fn into_node(self) -> Node {
		Node::combine([
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
			self.3.into_node(),
		])
	}
}

impl From<Vec<Node>> for Node {
	fn from(nodes: Vec<Node>) -> Self {
		Node::combine(nodes)
	}
}

impl FromIterator<Node> for Node {
	fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
		Node::combine(iter)
	}
}
