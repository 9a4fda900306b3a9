//! Browser host document backed by `web-sys`.

use std::borrow::Cow;

use reinhardt_markup_core::{BuilderConfig, Content, EventListener, IntoContent, MountError, NodeText};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::client::ClientBuilder;
use crate::host::HostDocument;

/// Handle to a browser DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebNode(web_sys::Node);

impl WebNode {
	/// Returns the underlying DOM node.
	pub fn as_node(&self) -> &web_sys::Node {
		&self.0
	}

	/// Consumes the handle and returns the underlying DOM node.
	pub fn into_node(self) -> web_sys::Node {
		self.0
	}
}

impl From<web_sys::Node> for WebNode {
	fn from(node: web_sys::Node) -> Self {
		Self(node)
	}
}

impl NodeText for WebNode {
	fn text_content(&self) -> Cow<'_, str> {
		Cow::Owned(self.0.text_content().unwrap_or_default())
	}
}

impl IntoContent<WebNode> for WebNode {
	fn into_content(self) -> Content<WebNode> {
		Content::Node(self)
	}
}

/// Host document wrapping the browser's `Document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
	document: web_sys::Document,
}

impl WebDocument {
	/// Uses the document of the current window.
	pub fn from_window() -> Result<Self, MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		Ok(Self { document })
	}

	/// Wraps an existing document.
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// Returns the wrapped document.
	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}
}

impl HostDocument for WebDocument {
	type Node = WebNode;
	type Event = web_sys::Event;

	fn create_element(&self, tag: &str) -> Result<WebNode, MountError> {
		let element = self
			.document
			.create_element(tag)
			.map_err(|_| MountError::CreateElementFailed {
				tag: tag.to_string(),
			})?;
		Ok(WebNode(element.into()))
	}

	fn create_text_node(&self, text: &str) -> WebNode {
		WebNode(self.document.create_text_node(text).into())
	}

	fn create_document_fragment(&self) -> WebNode {
		WebNode(self.document.create_document_fragment().into())
	}

	fn set_attribute(&self, element: &WebNode, name: &str, value: &str) -> Result<(), MountError> {
		let failed = || MountError::SetAttributeFailed {
			name: name.to_string(),
		};
		element
			.0
			.dyn_ref::<web_sys::Element>()
			.ok_or_else(failed)?
			.set_attribute(name, value)
			.map_err(|_| failed())
	}

	fn add_event_listener(
		&self,
		element: &WebNode,
		event: &str,
		listener: EventListener<web_sys::Event>,
	) -> Result<(), MountError> {
		let closure = Closure::wrap(
			Box::new(move |event: web_sys::Event| listener(event)) as Box<dyn FnMut(web_sys::Event)>
		);
		element
			.0
			.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
			.map_err(|_| MountError::AddListenerFailed {
				event: event.to_string(),
			})?;
		// The listener lives as long as the node
		closure.forget();
		Ok(())
	}

	fn append_child(&self, parent: &WebNode, child: &WebNode) -> Result<(), MountError> {
		parent
			.0
			.append_child(&child.0)
			.map(|_| ())
			.map_err(|_| MountError::AppendChildFailed)
	}
}

impl ClientBuilder<WebDocument> {
	/// Creates a builder rendering into the current window's document.
	pub fn for_window(config: BuilderConfig) -> Result<Self, MountError> {
		Ok(Self::new(WebDocument::from_window()?, config))
	}
}
