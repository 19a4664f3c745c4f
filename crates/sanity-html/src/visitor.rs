//! Walking a node tree.
//!
//! A tag's child list serves as both its attribute list and its content.
//! Traversal has two modes that give the same list different meanings:
//!
//! - **as content** ([`Node::visit`], [`Node::visit_children`]): tags, void
//!   tags and text are reported to a [`ContentVisitor`]; attributes are
//!   skipped.
//! - **as attributes** ([`Node::visit_attributes`]): attributes and boolean
//!   attributes are reported to an [`AttributeVisitor`]; everything else is
//!   skipped.
//!
//! `Many` nodes are transparent in both modes: their children are visited in
//! the same mode. Empty nodes are skipped in both.
//!
//! The renderer in [`crate::render`] is one visitor implementation. Callers
//! can write their own, for example to collect the text of a tree:
//!
//! ```
//! use sanity_html::{ContentVisitor, Node};
//!
//! #[derive(Default)]
//! struct TextCollector(String);
//!
//! impl ContentVisitor for TextCollector {
//!     fn tag(&mut self, _name: &str, node: &Node) {
//!         node.visit_children(self);
//!     }
//!     fn void_tag(&mut self, _name: &str, _node: &Node) {}
//!     fn content(&mut self, content: &str) {
//!         self.0.push_str(content);
//!     }
//! }
//!
//! let page = Node::tag("p", [
//!     Node::attribute("class", "intro"),
//!     Node::text("Hello, "),
//!     Node::tag("b", [Node::text("world")]),
//! ]);
//! let mut collector = TextCollector::default();
//! page.visit(&mut collector);
//! assert_eq!(collector.0, "Hello, world");
//! ```

use crate::node::{Node, Repr};

/// Receives the content-kind nodes of a tree.
///
/// Implementations of [`tag`](Self::tag) and [`void_tag`](Self::void_tag)
/// decide whether and how to descend, typically through
/// [`Node::visit_attributes`] and [`Node::visit_children`].
pub trait ContentVisitor {
	/// Called for an element with a closing tag.
	fn tag(&mut self, name: &str, node: &Node);

	/// Called for an element without a closing tag.
	fn void_tag(&mut self, name: &str, node: &Node);

	/// Called for text, escaped or raw, as stored.
	fn content(&mut self, content: &str);
}

/// Receives the attribute-kind nodes of a child list.
pub trait AttributeVisitor {
	/// Called for each attribute. `value` is `None` for boolean attributes.
	fn attribute(&mut self, name: &str, value: Option<&str>);
}

impl Node {
	/// Visits this node as content.
	pub fn visit<V>(&self, visitor: &mut V)
	where
		V: ContentVisitor + ?Sized,
	{
		self.visit_as_content(visitor);
	}

	/// Visits this node's children as attributes, in order.
	///
	/// Meant to be called from [`ContentVisitor::tag`] and
	/// [`ContentVisitor::void_tag`].
	pub fn visit_attributes<V>(&self, visitor: &mut V)
	where
		V: AttributeVisitor + ?Sized,
	{
		for child in self.children() {
			child.visit_as_attribute(visitor);
		}
	}

	/// Visits this node's children as content, in order.
	///
	/// Meant to be called from [`ContentVisitor::tag`].
	pub fn visit_children<V>(&self, visitor: &mut V)
	where
		V: ContentVisitor + ?Sized,
	{
		for child in self.children() {
			child.visit_as_content(visitor);
		}
	}

	pub(crate) fn visit_as_attribute<V>(&self, visitor: &mut V)
	where
		V: AttributeVisitor + ?Sized,
	{
		match &self.repr {
			Repr::Attribute { name, value } => visitor.attribute(name, Some(value.as_ref())),
			Repr::BoolAttribute { name } => visitor.attribute(name, None),
			Repr::Many(children) => {
				for child in children.iter() {
					child.visit_as_attribute(visitor);
				}
			}
			Repr::Empty | Repr::Tag { .. } | Repr::VoidTag { .. } | Repr::Text { .. } => {}
		}
	}

	pub(crate) fn visit_as_content<V>(&self, visitor: &mut V)
	where
		V: ContentVisitor + ?Sized,
	{
		match &self.repr {
			Repr::Tag { name, .. } => visitor.tag(name, self),
			Repr::VoidTag { name, .. } => visitor.void_tag(name, self),
			Repr::Text { content, .. } => visitor.content(content),
			Repr::Many(children) => {
				for child in children.iter() {
					child.visit_as_content(visitor);
				}
			}
			Repr::Empty | Repr::Attribute { .. } | Repr::BoolAttribute { .. } => {}
		}
	}

	/// Returns `true` for attributes, boolean attributes, and groups
	/// containing at least one of them at any depth.
	pub fn is_attribute_kind(&self) -> bool {
		let mut probe = Probe::default();
		self.visit_as_attribute(&mut probe);
		probe.found
	}

	/// Returns `true` for tags, void tags, text, and groups containing at
	/// least one of them at any depth.
	pub fn is_content_kind(&self) -> bool {
		let mut probe = Probe::default();
		self.visit_as_content(&mut probe);
		probe.found
	}
}

/// Records whether a traversal reported anything.
#[derive(Default)]
struct Probe {
	found: bool,
}

impl AttributeVisitor for Probe {
	fn attribute(&mut self, _name: &str, _value: Option<&str>) {
		self.found = true;
	}
}

impl ContentVisitor for Probe {
	fn tag(&mut self, _name: &str, _node: &Node) {
		self.found = true;
	}

	fn void_tag(&mut self, _name: &str, _node: &Node) {
		self.found = true;
	}

	fn content(&mut self, _content: &str) {
		self.found = true;
	}
}
