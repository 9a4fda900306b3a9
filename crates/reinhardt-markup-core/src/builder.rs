//! The shared builder capability.
//!
//! Server and client rendering are two implementations of [`MarkupBuilder`],
//! chosen once when the builder is constructed. Code written against the
//! trait renders in either mode.

use std::fmt;

use crate::attributes::Attributes;
use crate::config::{BuilderConfig, RenderOptions};
use crate::content::{Content, IntoContent};
use crate::error::{MarkupError, Result};

/// Output mode of a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
	/// Produces HTML markup strings.
	Server,
	/// Produces live host DOM nodes.
	Client,
}

impl RenderMode {
	/// Returns `true` for [`RenderMode::Server`].
	pub fn is_server(self) -> bool {
		self == RenderMode::Server
	}
}

impl fmt::Display for RenderMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RenderMode::Server => f.write_str("server"),
			RenderMode::Client => f.write_str("client"),
		}
	}
}

/// Element, text and fragment construction.
pub trait MarkupBuilder {
	/// Output of element and fragment construction. Nodes nest as children
	/// of later calls.
	type Node: IntoContent<Self::Node>;
	/// Output of text construction.
	type Text: IntoContent<Self::Node>;
	/// Event type received by listeners.
	type Event: 'static;

	/// Returns the builder's fixed mode.
	fn mode(&self) -> RenderMode;

	/// Returns the configuration captured at construction.
	fn config(&self) -> &BuilderConfig;

	/// Builds one element.
	///
	/// Fails before producing any output if an attribute is rejected.
	fn create_element(
		&self,
		tag: &str,
		attributes: Attributes<Self::Event>,
		options: RenderOptions,
		children: impl IntoContent<Self::Node>,
	) -> Result<Self::Node>;

	/// Builds a text value, escaping it first when `escape` is set.
	fn create_text(&self, text: &str, escape: bool) -> Self::Text;

	/// Renders children without a wrapping element.
	fn create_fragment(&self, children: impl IntoContent<Self::Node>) -> Result<Self::Node>;

	/// Returns `true` when this builder renders markup strings.
	fn is_server(&self) -> bool {
		self.mode().is_server()
	}
}

/// Applies the void-element rule to flattened children.
///
/// Returns `Ok(())` when the children may be discarded, or the strict-mode
/// error when discarding is not allowed.
pub fn check_void_children<N>(
	config: &BuilderConfig,
	tag: &str,
	children: &[Content<N>],
) -> Result<()> {
	if children.iter().all(Content::is_blank) {
		return Ok(());
	}
	if config.strict_void_children {
		return Err(MarkupError::InvalidChildForVoidTag {
			tag: tag.to_string(),
		});
	}
	tracing::warn!(tag, discarded = children.len(), "ignoring children of void element");
	Ok(())
}
