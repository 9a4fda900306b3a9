//! An in-memory host document.
//!
//! Works on every target, which makes it the host of choice for tests and
//! headless rendering. Nodes can be serialized back to markup with
//! [`MemoryNode::outer_html`] and listeners fired with
//! [`MemoryNode::dispatch`].

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use reinhardt_markup_core::{
	Content, EventListener, IntoContent, MountError, NodeText, escape_html, is_valid_attribute_name,
	is_void_tag,
};

use crate::host::HostDocument;

// Text inside these elements is serialized without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Event delivered to listeners on a [`MemoryNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEvent {
	name: String,
}

impl MemoryEvent {
	/// Returns the event name, for example `click`.
	pub fn name(&self) -> &str {
		&self.name
	}
}

struct AttributeEntry {
	name: String,
	value: String,
	// Set by presence alone, serialized without `=""`
	name_only: bool,
}

enum NodeKind {
	Element {
		tag: String,
		attributes: Vec<AttributeEntry>,
		listeners: Vec<(String, EventListener<MemoryEvent>)>,
	},
	Text(String),
	Fragment,
}

struct NodeData {
	kind: NodeKind,
	children: Vec<MemoryNode>,
}

/// Shared handle to an in-memory node.
#[derive(Clone)]
pub struct MemoryNode {
	inner: Rc<RefCell<NodeData>>,
}

impl MemoryNode {
	fn new(kind: NodeKind) -> Self {
		Self {
			inner: Rc::new(RefCell::new(NodeData {
				kind,
				children: Vec::new(),
			})),
		}
	}

	/// Returns the tag name of an element node.
	pub fn tag(&self) -> Option<String> {
		match &self.inner.borrow().kind {
			NodeKind::Element { tag, .. } => Some(tag.clone()),
			_ => None,
		}
	}

	/// Returns `true` for text nodes.
	pub fn is_text(&self) -> bool {
		matches!(self.inner.borrow().kind, NodeKind::Text(_))
	}

	/// Returns `true` for document fragments.
	pub fn is_fragment(&self) -> bool {
		matches!(self.inner.borrow().kind, NodeKind::Fragment)
	}

	/// Returns `true` if both handles refer to the same node.
	pub fn same_node(&self, other: &MemoryNode) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	/// Returns an attribute value of an element node.
	pub fn attribute(&self, name: &str) -> Option<String> {
		match &self.inner.borrow().kind {
			NodeKind::Element { attributes, .. } => attributes
				.iter()
				.find(|entry| entry.name == name)
				.map(|entry| entry.value.clone()),
			_ => None,
		}
	}

	/// Returns all attributes in the order they were first set.
	///
	/// Name-only attributes report an empty value.
	pub fn attributes(&self) -> Vec<(String, String)> {
		match &self.inner.borrow().kind {
			NodeKind::Element { attributes, .. } => attributes
				.iter()
				.map(|entry| (entry.name.clone(), entry.value.clone()))
				.collect(),
			_ => Vec::new(),
		}
	}

	/// Returns handles to the child nodes.
	pub fn children(&self) -> Vec<MemoryNode> {
		self.inner.borrow().children.clone()
	}

	/// Returns the event names of registered listeners, in registration order.
	pub fn listener_events(&self) -> Vec<String> {
		match &self.inner.borrow().kind {
			NodeKind::Element { listeners, .. } => {
				listeners.iter().map(|(event, _)| event.clone()).collect()
			}
			_ => Vec::new(),
		}
	}

	/// Invokes every listener registered for `event` on this node.
	///
	/// Returns the number of listeners invoked. Events do not bubble.
	pub fn dispatch(&self, event: &str) -> usize {
		// Listeners may touch this node, so no borrow is held while they run
		let matching: Vec<EventListener<MemoryEvent>> = match &self.inner.borrow().kind {
			NodeKind::Element { listeners, .. } => listeners
				.iter()
				.filter(|(name, _)| name == event)
				.map(|(_, listener)| Arc::clone(listener))
				.collect(),
			_ => Vec::new(),
		};

		tracing::trace!(event, listeners = matching.len(), "dispatching event");
		for listener in &matching {
			listener(MemoryEvent {
				name: event.to_string(),
			});
		}
		matching.len()
	}

	/// Concatenated text of this node and its descendants.
	pub fn text(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		let data = self.inner.borrow();
		if let NodeKind::Text(text) = &data.kind {
			out.push_str(text);
		}
		for child in &data.children {
			child.collect_text(out);
		}
	}

	/// Serializes this node and its descendants to HTML.
	///
	/// Text and attribute values are escaped; a fragment serializes as its
	/// children. Attributes set through
	/// [`HostDocument::set_boolean_attribute`] are written name-only, all
	/// others with their value, even when it is empty.
	pub fn outer_html(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out, false);
		out
	}

	fn write_html(&self, out: &mut String, raw_text: bool) {
		let data = self.inner.borrow();
		match &data.kind {
			NodeKind::Text(text) if raw_text => out.push_str(text),
			NodeKind::Text(text) => out.push_str(&escape_html(text.as_str())),
			NodeKind::Fragment => {
				for child in &data.children {
					child.write_html(out, raw_text);
				}
			}
			NodeKind::Element {
				tag, attributes, ..
			} => {
				out.push('<');
				out.push_str(tag);
				for entry in attributes {
					out.push(' ');
					out.push_str(&entry.name);
					if !entry.name_only {
						out.push_str("=\"");
						out.push_str(&escape_html(entry.value.as_str()));
						out.push('"');
					}
				}
				out.push('>');
				if is_void_tag(tag) {
					return;
				}
				let raw_children = RAW_TEXT_ELEMENTS
					.iter()
					.any(|raw| raw.eq_ignore_ascii_case(tag));
				for child in &data.children {
					child.write_html(out, raw_children);
				}
				out.push_str("</");
				out.push_str(tag);
				out.push('>');
			}
		}
	}
}

impl MemoryNode {
	fn store_attribute(&self, name: &str, value: &str, name_only: bool) -> Result<(), MountError> {
		let failed = || MountError::SetAttributeFailed {
			name: name.to_string(),
		};
		if !is_valid_attribute_name(name) {
			return Err(failed());
		}
		let mut data = self.inner.borrow_mut();
		let NodeKind::Element { attributes, .. } = &mut data.kind else {
			return Err(failed());
		};
		match attributes.iter_mut().find(|entry| entry.name == name) {
			Some(entry) => {
				entry.value = value.to_string();
				entry.name_only = name_only;
			}
			None => attributes.push(AttributeEntry {
				name: name.to_string(),
				value: value.to_string(),
				name_only,
			}),
		}
		Ok(())
	}
}

impl fmt::Debug for MemoryNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("MemoryNode").field(&self.outer_html()).finish()
	}
}

impl NodeText for MemoryNode {
	fn text_content(&self) -> Cow<'_, str> {
		Cow::Owned(self.text())
	}
}

impl IntoContent<MemoryNode> for MemoryNode {
	fn into_content(self) -> Content<MemoryNode> {
		Content::Node(self)
	}
}

/// Host document backed by reference-counted in-memory nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryDocument;

impl MemoryDocument {
	/// Creates a document.
	pub fn new() -> Self {
		Self
	}
}

impl HostDocument for MemoryDocument {
	type Node = MemoryNode;
	type Event = MemoryEvent;

	fn create_element(&self, tag: &str) -> Result<MemoryNode, MountError> {
		// Element names follow the same character rules as attribute names
		if !is_valid_attribute_name(tag) {
			return Err(MountError::CreateElementFailed {
				tag: tag.to_string(),
			});
		}
		Ok(MemoryNode::new(NodeKind::Element {
			tag: tag.to_string(),
			attributes: Vec::new(),
			listeners: Vec::new(),
		}))
	}

	fn create_text_node(&self, text: &str) -> MemoryNode {
		MemoryNode::new(NodeKind::Text(text.to_string()))
	}

	fn create_document_fragment(&self) -> MemoryNode {
		MemoryNode::new(NodeKind::Fragment)
	}

	fn set_attribute(&self, element: &MemoryNode, name: &str, value: &str) -> Result<(), MountError> {
		element.store_attribute(name, value, false)
	}

	fn set_boolean_attribute(&self, element: &MemoryNode, name: &str) -> Result<(), MountError> {
		element.store_attribute(name, "", true)
	}

	fn add_event_listener(
		&self,
		element: &MemoryNode,
		event: &str,
		listener: EventListener<MemoryEvent>,
	) -> Result<(), MountError> {
		let mut data = element.inner.borrow_mut();
		let NodeKind::Element { listeners, .. } = &mut data.kind else {
			return Err(MountError::AddListenerFailed {
				event: event.to_string(),
			});
		};
		listeners.push((event.to_string(), listener));
		Ok(())
	}

	fn append_child(&self, parent: &MemoryNode, child: &MemoryNode) -> Result<(), MountError> {
		if parent.same_node(child) || parent.is_text() {
			return Err(MountError::AppendChildFailed);
		}

		let moved = if child.is_fragment() {
			std::mem::take(&mut child.inner.borrow_mut().children)
		} else {
			vec![child.clone()]
		};
		parent.inner.borrow_mut().children.extend(moved);
		Ok(())
	}
}
