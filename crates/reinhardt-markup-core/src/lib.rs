//! Reinhardt Markup Core - escaping, attributes and server rendering
//!
//! The building blocks shared by every markup builder:
//!
//! - [`escape`]: HTML entity escaping and its inverse
//! - [`content`]: the child content model and iterative flattening
//! - [`classify`]: deciding whether a piece of text is escaped
//! - [`attributes`]: attribute entries, validation and serialization rules
//! - [`builder`]: the [`MarkupBuilder`] capability trait
//! - [`server`]: the string-rendering [`ServerBuilder`]
//! - [`factory`]: per-tag shortcuts via [`ElementFactory`]
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup_core::prelude::*;
//!
//! let builder = ServerBuilder::default();
//! let script = builder.script(Attributes::new(), "if (a < b) {}").unwrap();
//! let body = builder.div(Attributes::new(), ("a < b", script)).unwrap();
//! assert_eq!(body, "<div>a &lt; b<script>if (a < b) {}</script></div>");
//! ```
//!
//! The client-side builder lives in `reinhardt-markup-dom` and implements the
//! same trait, so rendering code can be written once against
//! [`MarkupBuilder`].

#![warn(missing_docs)]

pub mod attributes;
pub mod builder;
pub mod classify;
pub mod config;
pub mod content;
pub mod error;
pub mod escape;
pub mod factory;
pub mod server;
pub mod tags;

pub use attributes::{
	AttrRendering, AttrValue, Attribute, Attributes, EventListener, ServerEvent,
	is_valid_attribute_name, listener_event_name, validate_attribute,
};
pub use builder::{MarkupBuilder, RenderMode, check_void_children};
pub use classify::{EscapeContext, resolve_text};
pub use config::{BuilderConfig, RenderOptions};
pub use content::{Content, IntoContent, NodeText, Number, Text, flatten};
pub use error::{MarkupError, MountError, Result};
pub use escape::{escape_html, unescape_html};
pub use factory::ElementFactory;
pub use server::{Html, ServerBuilder};
pub use tags::{is_boolean_attribute, is_raw_content_tag, is_void_tag};

/// Commonly used items.
pub mod prelude {
	pub use crate::attributes::{AttrValue, Attributes};
	pub use crate::builder::{MarkupBuilder, RenderMode};
	pub use crate::config::{BuilderConfig, RenderOptions};
	pub use crate::content::{Content, IntoContent, Text};
	pub use crate::error::{MarkupError, Result};
	pub use crate::factory::ElementFactory;
	pub use crate::server::{Html, ServerBuilder};
}
