//! Tests for the dropped-node warnings enabled by `RenderOptions::report_dropped`.

use std::fmt;
use std::sync::{Arc, Mutex};

use rstest::*;
use sanity_html::{Node, RenderOptions, Renderer};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// A tracing layer that captures events as `[LEVEL] field=value ...` lines.
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

struct FieldRecorder {
	line: String,
}

impl tracing::field::Visit for FieldRecorder {
	fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
		self.line.push_str(&format!(" {}={:?}", field.name(), value));
	}
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		let mut recorder = FieldRecorder {
			line: format!("[{}]", event.metadata().level()),
		};
		event.record(&mut recorder);
		self.logs.lock().unwrap().push(recorder.line);
	}
}

#[fixture]
fn logs() -> Arc<Mutex<Vec<String>>> {
	Arc::new(Mutex::new(Vec::new()))
}

fn warnings(logs: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
	logs.lock()
		.unwrap()
		.iter()
		.filter(|line| line.starts_with("[WARN]"))
		.cloned()
		.collect()
}

#[rstest]
fn test_void_content_is_reported(logs: Arc<Mutex<Vec<String>>>) {
	// Arrange
	let _guard = tracing_subscriber::registry()
		.with(LogCapture { logs: logs.clone() })
		.set_default();
	let renderer = Renderer::with_options(RenderOptions::new().report_dropped(true));
	let node = Node::void_tag(
		"input",
		[Node::attribute("type", "text"), Node::text("lost"), Node::tag("b", [])],
	);

	// Act
	let html = renderer.render_to_string(&node);

	// Assert
	assert_eq!(html, r#"<input type="text">"#);
	let captured = warnings(&logs);
	assert_eq!(captured.len(), 1, "got: {captured:?}");
	assert!(captured[0].contains("content inside a void tag is dropped"));
	assert!(captured[0].contains("tag=\"input\""));
	assert!(captured[0].contains("dropped=2"));
}

#[rstest]
fn test_root_attribute_is_reported(logs: Arc<Mutex<Vec<String>>>) {
	// Arrange
	let _guard = tracing_subscriber::registry()
		.with(LogCapture { logs: logs.clone() })
		.set_default();
	let renderer = Renderer::with_options(RenderOptions::new().report_dropped(true));
	let node = Node::combine([Node::bool_attribute("hidden"), Node::text("shown")]);

	// Act
	let html = renderer.render_to_string(&node);

	// Assert
	assert_eq!(html, "shown");
	let captured = warnings(&logs);
	assert_eq!(captured.len(), 1, "got: {captured:?}");
	assert!(captured[0].contains("attributes at the root of a render are dropped"));
}

#[rstest]
fn test_nothing_reported_by_default(logs: Arc<Mutex<Vec<String>>>) {
	// Arrange
	let _guard = tracing_subscriber::registry()
		.with(LogCapture { logs: logs.clone() })
		.set_default();
	let node = Node::combine([
		Node::attribute("id", "dropped"),
		Node::void_tag("br", [Node::text("dropped")]),
	]);

	// Act
	let html = Renderer::new().render_to_string(&node);

	// Assert
	assert_eq!(html, "<br>");
	assert!(warnings(&logs).is_empty());
}

#[rstest]
fn test_well_formed_tree_reports_nothing(logs: Arc<Mutex<Vec<String>>>) {
	// Arrange
	let _guard = tracing_subscriber::registry()
		.with(LogCapture { logs: logs.clone() })
		.set_default();
	let renderer = Renderer::with_options(RenderOptions::new().report_dropped(true));
	let node = Node::document([
		Node::attribute("lang", "en"),
		Node::tag("body", [Node::void_tag("img", [Node::attribute("src", "/a.png")])]),
	]);

	// Act
	renderer.render_to_string(&node);

	// Assert
	assert!(warnings(&logs).is_empty());
}
