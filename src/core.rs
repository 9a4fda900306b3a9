//! Escaping, attribute validation and server-side string rendering
//!
//! This module provides access to reinhardt-markup-core.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_markup::core::{ServerBuilder, escape_html};
//! use reinhardt_markup::core::prelude::*;
//!
//! assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
//!
//! let builder = ServerBuilder::default();
//! let html = builder.create_text("<b>", true);
//! assert_eq!(html.as_str(), "&lt;b&gt;");
//! ```

// Re-export all reinhardt-markup-core functionality
pub use reinhardt_markup_core::*;
