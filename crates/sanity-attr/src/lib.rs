//! # Sanity Attr
//!
//! One function per standard HTML attribute, each returning a
//! [`Node`](sanity_html::Node) that can be placed in any element's child list.
//!
//! Attribute names that are Rust keywords use raw identifiers (`r#type`,
//! `r#for`, `r#as`, `r#async`, `r#loop`) and hyphenated names use
//! underscores (`http_equiv`, `accept_charset`). Anything not covered here
//! can be built with [`custom`] or [`data_attr`].
//!
//! ## Example
//!
//! ```
//! use sanity_html::Node;
//!
//! let input = Node::void_tag("input", [
//!     sanity_attr::r#type("checkbox"),
//!     sanity_attr::name("subscribe"),
//!     sanity_attr::checked(),
//!     sanity_attr::data_attr("source", "footer"),
//! ]);
//!
//! assert_eq!(
//!     input.render_to_string(),
//!     r#"<input type="checkbox" name="subscribe" checked data-source="footer">"#,
//! );
//! ```

mod attributes;
mod bool_attributes;

pub use attributes::*;
pub use bool_attributes::*;
