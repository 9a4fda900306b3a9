//! Client-side rendering into a host document.

use reinhardt_markup_core::{
	AttrRendering, Attribute, Attributes, BuilderConfig, Content, EscapeContext, IntoContent,
	MarkupBuilder, RenderMode, RenderOptions, Result, check_void_children, flatten,
	listener_event_name, resolve_text,
};

use crate::host::HostDocument;

/// Builder that produces live host nodes.
///
/// Text reaches the host verbatim through its text-node primitive, so body
/// content is never escaped here and `escape_content` has no effect.
///
/// ## Example
///
/// ```
/// use reinhardt_markup_dom::{ClientBuilder, MemoryDocument};
/// use reinhardt_markup_core::prelude::*;
///
/// let builder = ClientBuilder::new(MemoryDocument::new(), BuilderConfig::default());
/// let button = builder
///     .button(Attributes::new().set("type", "button").on("onclick", |_| {}), "a < b")
///     .unwrap();
///
/// assert_eq!(button.listener_events(), ["click"]);
/// assert_eq!(button.outer_html(), "<button type=\"button\">a &lt; b</button>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder<D> {
	document: D,
	config: BuilderConfig,
}

impl<D: HostDocument> ClientBuilder<D> {
	/// Creates a builder rendering into `document`.
	pub fn new(document: D, config: BuilderConfig) -> Self {
		Self { document, config }
	}

	/// Returns the host document.
	pub fn document(&self) -> &D {
		&self.document
	}

	fn apply_attributes(
		&self,
		element: &D::Node,
		attributes: Attributes<D::Event>,
		validated: bool,
	) -> Result<()> {
		for (name, attribute) in attributes {
			match attribute {
				Attribute::Listener(listener) => {
					let event = listener_event_name(&name);
					tracing::trace!(event = %event, "attaching listener");
					self.document.add_event_listener(element, &event, listener)?;
				}
				Attribute::Static(_) if !validated && name.is_empty() => {}
				Attribute::Static(value) => match value.rendering(&name) {
					AttrRendering::Omit => {}
					AttrRendering::NameOnly => self.document.set_boolean_attribute(element, &name)?,
					AttrRendering::Valued(value) => {
						self.document.set_attribute(element, &name, &value)?
					}
				},
			}
		}
		Ok(())
	}

	fn append_children(&self, parent: &D::Node, children: Vec<Content<D::Node>>) -> Result<()> {
		let context = EscapeContext::verbatim();
		for child in children {
			match child {
				Content::Node(node) => self.document.append_child(parent, &node)?,
				leaf => {
					let text = resolve_text(&leaf, &context);
					// No empty text nodes
					if text.is_empty() {
						continue;
					}
					let node = self.document.create_text_node(&text);
					self.document.append_child(parent, &node)?;
				}
			}
		}
		Ok(())
	}
}

impl<D: HostDocument> MarkupBuilder for ClientBuilder<D> {
	type Node = D::Node;
	type Text = D::Node;
	type Event = D::Event;

	fn mode(&self) -> RenderMode {
		RenderMode::Client
	}

	fn config(&self) -> &BuilderConfig {
		&self.config
	}

	fn create_element(
		&self,
		tag: &str,
		attributes: Attributes<D::Event>,
		options: RenderOptions,
		children: impl IntoContent<D::Node>,
	) -> Result<D::Node> {
		let _span = tracing::trace_span!("create_element", tag, mode = "client").entered();

		let validate = options.should_validate(&self.config);
		if validate {
			attributes.validate()?;
		}

		let children = flatten(children.into_content());
		let void = self.config.is_void(tag);
		if void {
			check_void_children(&self.config, tag, &children)?;
		}

		let element = self.document.create_element(tag)?;
		self.apply_attributes(&element, attributes, validate)?;
		if !void {
			self.append_children(&element, children)?;
		}
		Ok(element)
	}

	fn create_text(&self, text: &str, _escape: bool) -> D::Node {
		self.document.create_text_node(text)
	}

	fn create_fragment(&self, children: impl IntoContent<D::Node>) -> Result<D::Node> {
		let fragment = self.document.create_document_fragment();
		self.append_children(&fragment, flatten(children.into_content()))?;
		Ok(fragment)
	}
}
