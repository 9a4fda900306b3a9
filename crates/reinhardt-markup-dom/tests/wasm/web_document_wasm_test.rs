//! Browser DOM tests for the web-sys host document
//!
//! Run with `wasm-pack test --headless --chrome crates/reinhardt-markup-dom`.

#[cfg(target_arch = "wasm32")]
mod wasm_web_document_tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use reinhardt_markup_core::prelude::*;
	use reinhardt_markup_dom::{ClientBuilder, WebDocument};
	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn builder() -> ClientBuilder<WebDocument> {
		ClientBuilder::for_window(BuilderConfig::default()).unwrap()
	}

	fn outer_html(node: &reinhardt_markup_dom::WebNode) -> String {
		node.as_node()
			.dyn_ref::<web_sys::Element>()
			.map(|element| element.outer_html())
			.unwrap_or_default()
	}

	#[wasm_bindgen_test]
	fn test_element_with_boolean_attributes() {
		let builder = builder();
		let input = builder
			.input(
				Attributes::new()
					.set("type", "checkbox")
					.set("checked", true)
					.set("disabled", false),
			)
			.unwrap();
		assert_eq!(outer_html(&input), "<input type=\"checkbox\" checked=\"\">");
	}

	#[wasm_bindgen_test]
	fn test_text_is_inserted_as_text() {
		let builder = builder();
		let div = builder.div(Attributes::new(), "a<b").unwrap();
		assert_eq!(div.as_node().text_content().as_deref(), Some("a<b"));
		assert_eq!(outer_html(&div), "<div>a&lt;b</div>");
	}

	#[wasm_bindgen_test]
	fn test_listener_receives_dispatched_event() {
		let builder = builder();
		let clicks = Rc::new(Cell::new(0));
		let counter = Rc::clone(&clicks);
		let button = builder
			.button(
				Attributes::new().on("onclick", move |_| counter.set(counter.get() + 1)),
				"Go",
			)
			.unwrap();

		let event = web_sys::Event::new("click").unwrap();
		button.as_node().dispatch_event(&event).unwrap();
		assert_eq!(clicks.get(), 1);
	}

	#[wasm_bindgen_test]
	fn test_fragment_children_move_into_parent() {
		let builder = builder();
		let fragment = builder.create_fragment(("a", "b")).unwrap();
		let p = builder.p(Attributes::new(), fragment.clone()).unwrap();
		assert_eq!(outer_html(&p), "<p>ab</p>");
		assert_eq!(fragment.as_node().child_nodes().length(), 0);
	}

	#[wasm_bindgen_test]
	fn test_unsafe_attribute_rejected_before_mount() {
		let builder = builder();
		let result = builder.create_element(
			"iframe",
			Attributes::new().set("srcdoc", "javascript:alert(1)"),
			RenderOptions::default(),
			(),
		);
		assert!(matches!(result, Err(MarkupError::UnsafeAttributeValue { .. })));
	}
}
