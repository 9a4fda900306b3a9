//! # Reinhardt Markup
//!
//! Dual-mode HTML construction for Reinhardt.
//!
//! One call shape builds either an escaped markup string (server rendering) or
//! a live DOM node (client rendering). The mode is chosen by the builder type,
//! so the same view code renders in both places when written against
//! [`MarkupBuilder`].
//!
//! ## Feature Flags
//!
//! - `dom` (default) - client-side builder, in-memory host document, and the
//!   `web-sys` host document on wasm32
//!
//! ## Modules
//!
//! - [`core`]: escaping, content model, attribute validation, server builder
//! - [`dom`]: client builder and host documents
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup::prelude::*;
//!
//! fn greeting<B: MarkupBuilder>(builder: &B, name: &'static str) -> Result<B::Node> {
//!     let strong = builder.create_element("strong", Attributes::new(), RenderOptions::default(), name)?;
//!     builder.p(Attributes::new().set("class", "greeting"), ("Hello, ", strong))
//! }
//!
//! let html = greeting(&ServerBuilder::default(), "<admin>").unwrap();
//! assert_eq!(html, "<p class=\"greeting\">Hello, <strong>&lt;admin&gt;</strong></p>");
//!
//! let client = ClientBuilder::new(MemoryDocument::new(), BuilderConfig::default());
//! let node = greeting(&client, "<admin>").unwrap();
//! assert_eq!(node.outer_html(), html.as_str());
//! ```

pub mod core;
#[cfg(feature = "dom")]
pub mod dom;

pub use reinhardt_markup_core::{
	AttrValue, Attribute, Attributes, BuilderConfig, Content, ElementFactory, Html, IntoContent,
	MarkupBuilder, MarkupError, MountError, RenderMode, RenderOptions, Result, ServerBuilder,
	ServerEvent, Text, escape_html, flatten, unescape_html,
};

#[cfg(feature = "dom")]
pub use reinhardt_markup_dom::{ClientBuilder, HostDocument, MemoryDocument, MemoryNode};

/// Commonly used items from every member crate.
pub mod prelude {
	pub use reinhardt_markup_core::prelude::*;

	#[cfg(feature = "dom")]
	pub use reinhardt_markup_dom::{ClientBuilder, HostDocument, MemoryDocument};
}
