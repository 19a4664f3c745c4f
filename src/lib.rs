//! # Sanity
//!
//! Build HTML documents with plain function calls instead of templates.
//!
//! Views are ordinary Rust functions that return a [`Node`]. Elements take
//! one child list that mixes attributes and content, strings are escaped as
//! nodes are built, and a finished tree can be rendered any number of times
//! from any thread.
//!
//! ## Crates
//!
//! - [`html`]: the node model, visitors and renderer
//! - [`attr`]: one constructor per HTML attribute (feature `attr`)
//! - [`tag`]: one constructor per HTML element (feature `tag`)
//!
//! ## Feature Flags
//!
//! - `full` (default) - `attr` and `tag`
//! - `attr` - attribute constructors
//! - `tag` - element constructors
//! - `serde` - `Serialize`/`Deserialize` for [`RenderOptions`]
//!
//! ## Quick Example
//!
//! ```
//! use sanity::prelude::*;
//!
//! struct Article {
//!     title: String,
//!     link: String,
//! }
//!
//! fn article_list(articles: &[Article]) -> Node {
//!     tag::ul([
//!         attr::class("articles"),
//!         Node::for_each(articles, |article| {
//!             tag::li([tag::a([
//!                 attr::href(article.link.clone()),
//!                 Node::text(article.title.clone()),
//!             ])])
//!         }),
//!     ])
//! }
//!
//! let articles = vec![Article {
//!     title: "Hello & welcome".to_string(),
//!     link: "/hello".to_string(),
//! }];
//!
//! assert_eq!(
//!     article_list(&articles).render_to_string(),
//!     r#"<ul class="articles"><li><a href="/hello">Hello &amp; welcome</a></li></ul>"#,
//! );
//! ```

pub use sanity_html as html;

#[cfg(feature = "attr")]
pub use sanity_attr as attr;

#[cfg(feature = "tag")]
pub use sanity_tag as tag;

pub use sanity_html::{
	AttributeVisitor, ContentVisitor, IntoNode, Node, NodeKind, RenderError, RenderOptions,
	RenderResult, Renderer, escape,
};

/// Commonly used items.
///
/// Element and attribute constructors stay behind their module names
/// (`tag::div`, `attr::class`) since several names exist in both.
pub mod prelude {
	pub use crate::{IntoNode, Node, RenderOptions, Renderer};

	#[cfg(feature = "attr")]
	pub use crate::attr;

	#[cfg(feature = "tag")]
	pub use crate::tag;
}
