//! Reinhardt Markup DOM - client-side node construction
//!
//! [`ClientBuilder`] implements the same
//! [`MarkupBuilder`](reinhardt_markup_core::MarkupBuilder) trait as the
//! server builder, but produces live nodes in a [`HostDocument`]:
//!
//! - [`MemoryDocument`]: reference-counted in-memory nodes, available on
//!   every target
//! - `WebDocument`: the browser DOM through `web-sys` (wasm32 only)
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup_core::prelude::*;
//! use reinhardt_markup_dom::{ClientBuilder, MemoryDocument};
//!
//! let builder = ClientBuilder::new(MemoryDocument::new(), BuilderConfig::default());
//! let list = builder
//!     .ul(Attributes::new(), [builder.li(Attributes::new(), "one").unwrap()])
//!     .unwrap();
//! assert_eq!(list.outer_html(), "<ul><li>one</li></ul>");
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod host;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use client::ClientBuilder;
pub use host::HostDocument;
pub use memory::{MemoryDocument, MemoryEvent, MemoryNode};
#[cfg(target_arch = "wasm32")]
pub use web::{WebDocument, WebNode};
