//! Server Rendering Integration Tests
//!
//! Exercises the public API of reinhardt-markup-core the way an application
//! would: building whole documents out of nested calls.
//!
//! Test Categories:
//! 1. Document Assembly - nested elements, fragments and factory helpers
//! 2. Escape Handling - XSS prevention across nesting levels
//! 3. Attribute Handling - ordering, booleans and validation failures
//! 4. Configuration - builders loaded from JSON
//! 5. Edge Cases - deep nesting and large sibling lists

use reinhardt_markup_core::prelude::*;
use reinhardt_markup_core::{ServerEvent, unescape_html};
use rstest::{fixture, rstest};

#[fixture]
fn builder() -> ServerBuilder {
	ServerBuilder::default()
}

fn attrs() -> Attributes<ServerEvent> {
	Attributes::new()
}

// ============================================================================
// Document Assembly
// ============================================================================

#[rstest]
fn test_user_card_document(builder: ServerBuilder) {
	let name = builder.h2(attrs().set("class", "name"), "Alice").unwrap();
	let email = builder
		.a(attrs().set("href", "mailto:alice@example.com"), "alice@example.com")
		.unwrap();
	let role: Option<&'static str> = None;
	let card = builder
		.div(attrs().set("class", "card"), (name, email, role))
		.unwrap();

	assert_eq!(
		card,
		"<div class=\"card\"><h2 class=\"name\">Alice</h2>\
		 <a href=\"mailto:alice@example.com\">alice@example.com</a></div>"
	);
}

#[rstest]
fn test_list_from_iterator(builder: ServerBuilder) {
	let items: Vec<Html> = ["one", "two", "three"]
		.into_iter()
		.map(|label| builder.li(attrs(), label))
		.collect::<Result<_>>()
		.unwrap();
	let list = builder.ul(attrs(), items).unwrap();
	assert_eq!(list, "<ul><li>one</li><li>two</li><li>three</li></ul>");
}

#[rstest]
fn test_fragment_of_siblings(builder: ServerBuilder) {
	let meta = builder.meta(attrs().set("charset", "utf-8")).unwrap();
	let link = builder
		.link(attrs().set("rel", "stylesheet").set("href", "/main.css"))
		.unwrap();
	let head = builder.create_fragment((meta, link)).unwrap();
	assert_eq!(
		head,
		"<meta charset=\"utf-8\"><link rel=\"stylesheet\" href=\"/main.css\">"
	);
}

// ============================================================================
// Escape Handling
// ============================================================================

#[rstest]
fn test_user_input_escaped_once_across_levels(builder: ServerBuilder) {
	let comment = "<img src=x onerror=alert(1)> & 'quotes'";
	let inner = builder.p(attrs(), comment.to_string()).unwrap();
	let outer = builder.div(attrs(), builder.div(attrs(), inner).unwrap()).unwrap();

	assert_eq!(
		outer,
		"<div><div><p>&lt;img src=x onerror=alert(1)&gt; &amp; &#039;quotes&#039;</p></div></div>"
	);
	assert!(!outer.as_str().contains("&amp;lt;"));
}

#[rstest]
fn test_escaped_text_survives_fragment(builder: ServerBuilder) {
	let text = builder.create_text("a & b", true);
	let fragment = builder.create_fragment(text).unwrap();
	assert_eq!(fragment, "a &amp; b");
	assert_eq!(unescape_html(fragment.as_str()), "a & b");
}

#[rstest]
fn test_inline_script_left_intact(builder: ServerBuilder) {
	let script = builder
		.script(attrs().set("type", "module"), "if (1 < 2 && x) { go(\"now\"); }")
		.unwrap();
	assert_eq!(
		script,
		"<script type=\"module\">if (1 < 2 && x) { go(\"now\"); }</script>"
	);
}

// ============================================================================
// Attribute Handling
// ============================================================================

#[rstest]
fn test_form_controls(builder: ServerBuilder) {
	let input = builder
		.input(
			attrs()
				.set("type", "email")
				.set("name", "email")
				.set("required", true)
				.set("readonly", false)
				.set("placeholder", "you@example.com"),
		)
		.unwrap();
	let button = builder
		.button(attrs().set("type", "submit").on("onclick", |_| {}), "Send")
		.unwrap();
	let form = builder
		.form(attrs().set("method", "post"), (input, button))
		.unwrap();

	assert_eq!(
		form,
		"<form method=\"post\"><input type=\"email\" name=\"email\" required \
		 placeholder=\"you@example.com\"><button type=\"submit\">Send</button></form>"
	);
}

#[rstest]
#[case("srcdoc", "javascript:alert(1)")]
#[case("srcdoc", "DATA:TEXT/HTML,<script>")]
#[case("formaction", "  javascript:void(0)")]
fn test_unsafe_values_abort_whole_call(
	builder: ServerBuilder,
	#[case] name: &'static str,
	#[case] value: &'static str,
) {
	let result = builder.create_element(
		"iframe",
		attrs().set("title", "embedded").set(name, value),
		RenderOptions::default(),
		"fallback",
	);
	assert!(matches!(
		result,
		Err(MarkupError::UnsafeAttributeValue { name: ref rejected, .. }) if rejected == name
	));
}

#[rstest]
fn test_invalid_attribute_name_error_message(builder: ServerBuilder) {
	let err = builder
		.span(attrs().set("bad name", "x"), ())
		.unwrap_err();
	assert_eq!(err.to_string(), "invalid attribute name: \"bad name\"");
}

// ============================================================================
// Configuration
// ============================================================================

#[rstest]
fn test_builder_from_json_config() {
	let config = BuilderConfig::from_json(
		r#"{
			"default_escape": false,
			"custom_void_tags": ["x-divider"],
			"strict_void_children": true
		}"#,
	)
	.unwrap();
	let builder = ServerBuilder::new(config);

	assert_eq!(builder.div(attrs(), "<b>").unwrap(), "<div><b></div>");
	assert_eq!(
		builder
			.create_element("x-divider", attrs(), RenderOptions::default(), ())
			.unwrap(),
		"<x-divider>"
	);
	assert_eq!(
		builder.create_element("X-Divider", attrs(), RenderOptions::default(), "child"),
		Err(MarkupError::InvalidChildForVoidTag {
			tag: "X-Divider".to_string()
		})
	);
}

#[rstest]
fn test_config_accessor(builder: ServerBuilder) {
	assert_eq!(builder.config(), &BuilderConfig::default());
	assert_eq!(builder.mode(), RenderMode::Server);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[rstest]
fn test_deeply_nested_sequences(builder: ServerBuilder) {
	let mut children: Content<Html> = Content::text("core");
	for _ in 0..5_000 {
		children = Content::Sequence(vec![children]);
	}
	assert_eq!(builder.span(attrs(), children).unwrap(), "<span>core</span>");
}

#[rstest]
fn test_many_siblings(builder: ServerBuilder) {
	let items: Vec<u32> = (0..1_000).collect();
	let html = builder.p(attrs(), items).unwrap();
	assert!(html.as_str().starts_with("<p>0123"));
	assert!(html.as_str().ends_with("999</p>"));
}
