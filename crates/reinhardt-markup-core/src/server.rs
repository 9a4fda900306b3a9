//! Server-side string rendering.
//!
//! Output is byte-exact: `<tag attr="val" flag>content</tag>` for normal
//! elements and `<tag attr="val">` for void elements, with no added
//! whitespace.

use std::borrow::Cow;
use std::fmt;

use crate::attributes::{AttrRendering, Attribute, Attributes, ServerEvent, validate_attribute};
use crate::builder::{MarkupBuilder, RenderMode, check_void_children};
use crate::classify::{EscapeContext, resolve_text};
use crate::config::{BuilderConfig, RenderOptions};
use crate::content::{Content, IntoContent, NodeText, Text, flatten};
use crate::error::Result;
use crate::escape::escape_html;

/// Rendered HTML markup.
///
/// Everything inside is already escaped, so passing an `Html` value as a
/// child of another element embeds it verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
	pub(crate) fn new(markup: String) -> Self {
		Self(markup)
	}

	/// Returns the markup.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the value and returns the markup.
	pub fn into_string(self) -> String {
		self.0
	}

	/// Returns the markup length in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the markup is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Html {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Html {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Html> for String {
	fn from(html: Html) -> Self {
		html.0
	}
}

impl PartialEq<str> for Html {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Html {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl NodeText for Html {
	fn text_content(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.0)
	}
}

impl IntoContent<Html> for Html {
	fn into_content(self) -> Content<Html> {
		Content::Node(self)
	}
}

/// Builder that renders markup strings.
///
/// ## Example
///
/// ```
/// use reinhardt_markup_core::{Attributes, BuilderConfig, MarkupBuilder, RenderOptions, ServerBuilder};
///
/// let builder = ServerBuilder::new(BuilderConfig::default());
/// let html = builder
///     .create_element(
///         "input",
///         Attributes::new().set("type", "checkbox").set("checked", true).set("disabled", false),
///         RenderOptions::default(),
///         (),
///     )
///     .unwrap();
/// assert_eq!(html, "<input type=\"checkbox\" checked>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServerBuilder {
	config: BuilderConfig,
}

impl ServerBuilder {
	/// Creates a builder with the given configuration.
	pub fn new(config: BuilderConfig) -> Self {
		Self { config }
	}

	fn write_attributes(
		&self,
		out: &mut String,
		attributes: &Attributes<ServerEvent>,
		validate: bool,
	) -> Result<()> {
		for (name, attribute) in attributes.iter() {
			let value = match attribute {
				// Event bindings have no meaning in markup
				Attribute::Listener(_) => continue,
				Attribute::Static(value) => value,
			};

			if validate {
				validate_attribute(name, value)?;
			} else if name.is_empty() {
				continue;
			}

			match value.rendering(name) {
				AttrRendering::Omit => {}
				AttrRendering::NameOnly => {
					out.push(' ');
					out.push_str(name);
				}
				AttrRendering::Valued(value) => {
					out.push(' ');
					out.push_str(name);
					out.push_str("=\"");
					out.push_str(&escape_html(&*value));
					out.push('"');
				}
			}
		}
		Ok(())
	}
}

impl MarkupBuilder for ServerBuilder {
	type Node = Html;
	type Text = Text;
	type Event = ServerEvent;

	fn mode(&self) -> RenderMode {
		RenderMode::Server
	}

	fn config(&self) -> &BuilderConfig {
		&self.config
	}

	fn create_element(
		&self,
		tag: &str,
		attributes: Attributes<ServerEvent>,
		options: RenderOptions,
		children: impl IntoContent<Html>,
	) -> Result<Html> {
		let _span = tracing::trace_span!("create_element", tag, mode = "server").entered();

		let mut out = String::with_capacity(tag.len() * 2 + 5);
		out.push('<');
		out.push_str(tag);
		self.write_attributes(&mut out, &attributes, options.should_validate(&self.config))?;
		out.push('>');

		let children = flatten(children.into_content());
		if self.config.is_void(tag) {
			check_void_children(&self.config, tag, &children)?;
			return Ok(Html::new(out));
		}

		let context = EscapeContext::for_tag(tag, options.escape_content, self.config.default_escape);
		for child in &children {
			out.push_str(&resolve_text(child, &context));
		}
		out.push_str("</");
		out.push_str(tag);
		out.push('>');
		Ok(Html::new(out))
	}

	fn create_text(&self, text: &str, escape: bool) -> Text {
		if escape {
			Text::escape(text)
		} else {
			Text::plain(text.to_string())
		}
	}

	fn create_fragment(&self, children: impl IntoContent<Html>) -> Result<Html> {
		let context = EscapeContext::untagged(None, self.config.default_escape);
		let out: String = flatten(children.into_content())
			.iter()
			.map(|child| resolve_text(child, &context))
			.collect();
		Ok(Html::new(out))
	}
}
