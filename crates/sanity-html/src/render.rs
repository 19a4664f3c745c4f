//! Rendering node trees to HTML.
//!
//! [`Renderer`] walks a tree with the visitors from [`crate::visitor`]:
//!
//! - a `Tag` writes `<name`, its children as attributes, `>`, its children
//!   as content, then `</name>`;
//! - a `VoidTag` writes `<name`, its children as attributes, then `>`;
//! - text is written as stored;
//! - an attribute writes ` name="value"` and a boolean attribute ` name`.
//!
//! Rendering is a pure function of the tree, so the same node always renders
//! to the same bytes and may be rendered from several threads at once.

use std::fmt;
use std::io;

use crate::error::{RenderError, RenderResult};
use crate::node::Node;
use crate::visitor::{AttributeVisitor, ContentVisitor};

/// Options for rendering.
///
/// Options never change the rendered output.
///
/// # Example
///
/// ```
/// use sanity_html::RenderOptions;
///
/// let options = RenderOptions::new()
///     .with_initial_capacity(16 * 1024)
///     .report_dropped(true);
/// assert_eq!(options.initial_capacity, 16 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
	/// Bytes reserved up front for the output buffer.
	pub initial_capacity: usize,
	/// Emit a `tracing` warning for nodes that can never be rendered: content
	/// inside a void tag and attributes at the root of a render.
	pub report_dropped: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			initial_capacity: 1024,
			report_dropped: false,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the initial output buffer capacity.
	pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
		self.initial_capacity = capacity;
		self
	}

	/// Enables or disables reporting of dropped nodes.
	pub fn report_dropped(mut self, enable: bool) -> Self {
		self.report_dropped = enable;
		self
	}
}

/// Renders node trees to HTML.
///
/// A renderer holds only its options and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	options: RenderOptions,
}

impl Renderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Returns the renderer options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders a node to HTML bytes.
	pub fn render(&self, node: &Node) -> Vec<u8> {
		self.render_to_string(node).into_bytes()
	}

	/// Renders a node to an HTML string.
	pub fn render_to_string(&self, node: &Node) -> String {
		let mut output = String::with_capacity(self.options.initial_capacity);
		// Writing to a String never fails.
		let _ = self.render_into(node, &mut output);
		tracing::trace!(bytes = output.len(), "rendered node tree");
		output
	}

	/// Renders a node and writes the HTML to `writer`.
	///
	/// Returns the number of bytes written.
	pub fn write_to<W: io::Write>(&self, node: &Node, mut writer: W) -> RenderResult<usize> {
		let html = self.render_to_string(node);
		writer.write_all(html.as_bytes()).map_err(|e| {
			tracing::debug!(error = %e, "failed to write rendered HTML");
			RenderError::from(e)
		})?;
		Ok(html.len())
	}

	/// Renders a node directly into a `fmt::Write` sink.
	pub fn write_fmt_to<W>(&self, node: &Node, out: &mut W) -> RenderResult<()>
	where
		W: fmt::Write + ?Sized,
	{
		self.render_into(node, out).map_err(|e| {
			tracing::debug!("failed to format rendered HTML");
			RenderError::from(e)
		})
	}

	fn render_into<W>(&self, node: &Node, out: &mut W) -> fmt::Result
	where
		W: fmt::Write + ?Sized,
	{
		if self.options.report_dropped {
			report_root_attributes(node);
		}
		let mut visitor = RenderVisitor {
			out,
			status: Ok(()),
			report_dropped: self.options.report_dropped,
		};
		node.visit(&mut visitor);
		visitor.status
	}
}

impl Node {
	/// Renders the node and all of its children to HTML bytes.
	///
	/// Writing the bytes to an `io::Write` is slightly cheaper than going
	/// through a `String`.
	pub fn render(&self) -> Vec<u8> {
		Renderer::new().render(self)
	}

	/// Renders the node and all of its children to an HTML string.
	pub fn render_to_string(&self) -> String {
		Renderer::new().render_to_string(self)
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Renderer::new().render_into(self, f)
	}
}

/// Writes HTML for the nodes it visits. Stops writing after the first sink
/// error and keeps that error.
struct RenderVisitor<'a, W: fmt::Write + ?Sized> {
	out: &'a mut W,
	status: fmt::Result,
	report_dropped: bool,
}

impl<W: fmt::Write + ?Sized> RenderVisitor<'_, W> {
	fn write(&mut self, s: &str) {
		if self.status.is_ok() {
			self.status = self.out.write_str(s);
		}
	}
}

impl<W: fmt::Write + ?Sized> ContentVisitor for RenderVisitor<'_, W> {
	fn tag(&mut self, name: &str, node: &Node) {
		self.write("<");
		self.write(name);
		node.visit_attributes(self);
		self.write(">");
		node.visit_children(self);
		self.write("</");
		self.write(name);
		self.write(">");
	}

	fn void_tag(&mut self, name: &str, node: &Node) {
		self.write("<");
		self.write(name);
		node.visit_attributes(self);
		self.write(">");
		if self.report_dropped {
			report_void_content(name, node);
		}
	}

	fn content(&mut self, content: &str) {
		self.write(content);
	}
}

impl<W: fmt::Write + ?Sized> AttributeVisitor for RenderVisitor<'_, W> {
	fn attribute(&mut self, name: &str, value: Option<&str>) {
		self.write(" ");
		self.write(name);
		if let Some(value) = value {
			self.write("=\"");
			self.write(value);
			self.write("\"");
		}
	}
}

fn report_root_attributes(node: &Node) {
	if node.is_attribute_kind() {
		tracing::warn!(
			kind = ?node.kind(),
			"attributes at the root of a render are dropped"
		);
	}
}

fn report_void_content(name: &str, node: &Node) {
	let dropped = node
		.children()
		.iter()
		.filter(|child| child.is_content_kind())
		.count();
	if dropped > 0 {
		tracing::warn!(
			tag = name,
			dropped,
			"content inside a void tag is dropped"
		);
	}
}
