//! The host document seam.

use reinhardt_markup_core::{EventListener, IntoContent, MountError, NodeText};

/// Node creation and mutation primitives provided by a host document.
///
/// [`ClientBuilder`](crate::ClientBuilder) drives these in a fixed order:
/// create the element, apply attributes and listeners, then append
/// children. Implementations pass values through unchanged; text and
/// attribute values arrive unescaped, and the host is responsible for
/// encoding them.
pub trait HostDocument {
	/// Handle to a host node. Cloning yields another handle to the same node.
	type Node: Clone + NodeText + IntoContent<Self::Node>;
	/// Event type delivered to listeners.
	type Event: 'static;

	/// Creates an element named `tag`.
	fn create_element(&self, tag: &str) -> Result<Self::Node, MountError>;

	/// Creates a text node holding `text` verbatim.
	fn create_text_node(&self, text: &str) -> Self::Node;

	/// Creates an empty document fragment.
	fn create_document_fragment(&self) -> Self::Node;

	/// Sets an attribute on an element node.
	fn set_attribute(&self, element: &Self::Node, name: &str, value: &str) -> Result<(), MountError>;

	/// Sets an attribute that is active by presence alone.
	///
	/// Defaults to [`set_attribute`](Self::set_attribute) with an empty
	/// value, which is how browsers store such attributes.
	fn set_boolean_attribute(&self, element: &Self::Node, name: &str) -> Result<(), MountError> {
		self.set_attribute(element, name, "")
	}

	/// Registers `listener` for `event` on an element node.
	fn add_event_listener(
		&self,
		element: &Self::Node,
		event: &str,
		listener: EventListener<Self::Event>,
	) -> Result<(), MountError>;

	/// Appends `child` to `parent`.
	///
	/// Appending a fragment moves the fragment's children instead.
	fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), MountError>;
}
