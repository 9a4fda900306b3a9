//! Content classification: deciding whether a leaf is escaped.
//!
//! ## Decision Order
//!
//! The first matching rule wins:
//!
//! 1. Empty content resolves to an empty string.
//! 2. [`Text::Escaped`] and [`Text::Raw`] are returned verbatim.
//! 3. A per-call escape override is honored exactly.
//! 4. Content of a raw-content tag (`script`, `style`, `pre`, ...) is not escaped.
//! 5. Otherwise the builder's default applies.
//!
//! Numbers and builder nodes never carry markup-special characters that need
//! escaping here, so they are stringified directly.

use std::borrow::Cow;

use crate::content::{Content, NodeText, Text};
use crate::escape::escape_html;
use crate::tags::is_raw_content_tag;

/// Escaping context for the children of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeContext<'a> {
	tag: Option<&'a str>,
	escape_override: Option<bool>,
	default_escape: bool,
}

impl<'a> EscapeContext<'a> {
	/// Creates the context for the body of `tag`.
	pub fn for_tag(tag: &'a str, escape_override: Option<bool>, default_escape: bool) -> Self {
		Self {
			tag: Some(tag),
			escape_override,
			default_escape,
		}
	}

	/// Creates a context with no enclosing tag (fragments).
	pub fn untagged(escape_override: Option<bool>, default_escape: bool) -> Self {
		Self {
			tag: None,
			escape_override,
			default_escape,
		}
	}

	/// A context that never escapes.
	///
	/// Used when text ends up in a host text node, which is already
	/// injection-safe.
	pub fn verbatim() -> Self {
		Self::untagged(Some(false), false)
	}

	/// Returns the enclosing tag, if any.
	pub fn tag(&self) -> Option<&'a str> {
		self.tag
	}

	/// Returns whether plain text in this context is escaped.
	pub fn should_escape(&self) -> bool {
		if let Some(explicit) = self.escape_override {
			return explicit;
		}
		if self.tag.is_some_and(is_raw_content_tag) {
			return false;
		}
		self.default_escape
	}
}

/// Resolves one content item to its final text.
///
/// Sequences are resolved by concatenating their flattened leaves with the
/// same context.
pub fn resolve_text<'c, N: NodeText>(item: &'c Content<N>, context: &EscapeContext<'_>) -> Cow<'c, str> {
	match item {
		Content::Empty => Cow::Borrowed(""),
		Content::Text(text) => resolve_plain_or_verbatim(text, context),
		Content::Number(number) => Cow::Owned(number.to_string()),
		Content::Node(node) => node.text_content(),
		Content::Sequence(items) => {
			let mut out = String::new();
			for item in items {
				out.push_str(&resolve_text(item, context));
			}
			Cow::Owned(out)
		}
	}
}

fn resolve_plain_or_verbatim<'c>(text: &'c Text, context: &EscapeContext<'_>) -> Cow<'c, str> {
	match text {
		Text::Escaped(s) | Text::Raw(s) => Cow::Borrowed(s.as_ref()),
		Text::Plain(s) if context.should_escape() => escape_html(&**s),
		Text::Plain(s) => Cow::Borrowed(s.as_ref()),
	}
}
