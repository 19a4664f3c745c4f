//! # Sanity HTML
//!
//! Core node model and renderer for building HTML with function calls
//! instead of templates.
//!
//! ## Overview
//!
//! Every fragment of a document is a [`Node`]: an element, a void element,
//! an attribute, a boolean attribute, text, or a group of other nodes.
//! Elements take one ordered list of children that mixes attributes and
//! content; attributes render inside the opening tag and content between
//! the tags, each in the order given.
//!
//! Strings are escaped when a node is built. Rendering is a pure tree walk
//! that cannot fail, and nodes are immutable, so the same tree can be
//! rendered any number of times from any number of threads.
//!
//! The `sanity-attr` and `sanity-tag` crates provide one constructor per
//! attribute and per element on top of this crate.
//!
//! ## Example
//!
//! ```
//! use sanity_html::Node;
//!
//! let fruits = vec!["orange", "bannana", "apple"];
//! let page = Node::document([
//!     Node::attribute("lang", "en"),
//!     Node::tag("body", [
//!         Node::tag("ul", [
//!             Node::attribute("class", "fruits"),
//!             Node::for_each(fruits, |fruit| Node::tag("li", [Node::text(fruit)])),
//!         ]),
//!     ]),
//! ]);
//!
//! assert_eq!(
//!     page.to_string(),
//!     concat!(
//!         r#"<!DOCTYPE html><html lang="en"><body><ul class="fruits">"#,
//!         "<li>orange</li><li>bannana</li><li>apple</li>",
//!         "</ul></body></html>",
//!     ),
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`RenderOptions`].

mod document;
pub mod error;
pub mod escape;
pub mod node;
pub mod render;
pub mod visitor;

pub use error::{RenderError, RenderResult};
pub use escape::escape;
pub use node::{IntoNode, Node, NodeKind};
pub use render::{RenderOptions, Renderer};
pub use visitor::{AttributeVisitor, ContentVisitor};
