//! Client-side node construction
//!
//! This module provides access to reinhardt-markup-dom: the
//! [`ClientBuilder`], the [`HostDocument`] seam it renders through, an
//! in-memory host for tests and headless use, and the browser host on
//! wasm32.

// Re-export all reinhardt-markup-dom functionality
pub use reinhardt_markup_dom::*;
