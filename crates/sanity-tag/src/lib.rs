//! # Sanity Tag
//!
//! One function per standard HTML element, each returning a
//! [`Node`](sanity_html::Node).
//!
//! Elements take a single child list that mixes attributes and content.
//! Void elements (`br`, `img`, `input`, ...) take attributes only; content
//! passed to them is accepted and never rendered.
//!
//! ## Example
//!
//! ```
//! use sanity_attr::{class, href};
//! use sanity_html::Node;
//! use sanity_tag::{a, br, li, ul};
//!
//! let nav = ul([
//!     class("nav"),
//!     li([a([href("/"), Node::text("Home")])]),
//!     li([a([href("/about"), Node::text("About")]), br([])]),
//! ]);
//!
//! assert_eq!(
//!     nav.render_to_string(),
//!     concat!(
//!         r#"<ul class="nav">"#,
//!         r#"<li><a href="/">Home</a></li>"#,
//!         r#"<li><a href="/about">About</a><br></li>"#,
//!         "</ul>",
//!     ),
//! );
//! ```

mod tags;
mod void_tags;

pub use tags::*;
pub use void_tags::*;
