//! Per-tag shortcuts for [`MarkupBuilder::create_element`].
//!
//! ```
//! use reinhardt_markup_core::prelude::*;
//!
//! let builder = ServerBuilder::default();
//! let item = builder.li(Attributes::new(), "One").unwrap();
//! let list = builder.ul(Attributes::new().set("class", "menu"), item).unwrap();
//! assert_eq!(list, "<ul class=\"menu\"><li>One</li></ul>");
//! ```

use crate::attributes::Attributes;
use crate::builder::MarkupBuilder;
use crate::config::RenderOptions;
use crate::content::IntoContent;
use crate::error::Result;

macro_rules! element_methods {
	(
		container: [$($container:ident),* $(,)?],
		void: [$($void:ident),* $(,)?] $(,)?
	) => {
		/// One method per common HTML tag, available on every builder.
		///
		/// Each method uses default [`RenderOptions`]. Call
		/// [`MarkupBuilder::create_element`] directly to override escaping or
		/// validation for a single element.
		pub trait ElementFactory: MarkupBuilder {
			$(
				#[doc = concat!("Creates a `<", stringify!($container), ">` element.")]
				fn $container(
					&self,
					attributes: Attributes<Self::Event>,
					children: impl IntoContent<Self::Node>,
				) -> Result<Self::Node> {
					self.create_element(stringify!($container), attributes, RenderOptions::default(), children)
				}
			)*
			$(
				#[doc = concat!("Creates a void `<", stringify!($void), ">` element.")]
				fn $void(&self, attributes: Attributes<Self::Event>) -> Result<Self::Node> {
					self.create_element(stringify!($void), attributes, RenderOptions::default(), ())
				}
			)*
		}
	};
}

element_methods! {
	container: [
		div, span, p, a, ul, ol, li, h1, h2, h3, button, form, label, script, style, pre, code,
		textarea, select, option, table, tr, td, th,
	],
	void: [input, img, br, hr, meta, link],
}

impl<B: MarkupBuilder> ElementFactory for B {}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attributes::ServerEvent;
	use crate::server::ServerBuilder;
	use rstest::{fixture, rstest};

	#[fixture]
	fn builder() -> ServerBuilder {
		ServerBuilder::default()
	}

	fn none() -> Attributes<ServerEvent> {
		Attributes::new()
	}

	#[rstest]
	fn test_container_shortcuts(builder: ServerBuilder) {
		let heading = builder.h1(none(), "Title").unwrap();
		let para = builder.p(none().set("class", "lead"), "x < y").unwrap();
		let page = builder.div(none(), (heading, para)).unwrap();
		assert_eq!(
			page,
			"<div><h1>Title</h1><p class=\"lead\">x &lt; y</p></div>"
		);
	}

	#[rstest]
	fn test_void_shortcuts(builder: ServerBuilder) {
		assert_eq!(builder.br(none()).unwrap(), "<br>");
		assert_eq!(
			builder.meta(none().set("charset", "utf-8")).unwrap(),
			"<meta charset=\"utf-8\">"
		);
	}

	#[rstest]
	fn test_raw_content_shortcuts_keep_tag_rules(builder: ServerBuilder) {
		assert_eq!(builder.style(none(), "a > b {}").unwrap(), "<style>a > b {}</style>");
		assert_eq!(builder.code(none(), "<T>").unwrap(), "<code><T></code>");
	}

	#[rstest]
	fn test_table_structure(builder: ServerBuilder) {
		let header = builder.th(none(), "Name").unwrap();
		let cell = builder.td(none(), 42_i32).unwrap();
		let rows = [builder.tr(none(), header).unwrap(), builder.tr(none(), cell).unwrap()];
		let table = builder.table(none(), rows).unwrap();
		assert_eq!(
			table,
			"<table><tr><th>Name</th></tr><tr><td>42</td></tr></table>"
		);
	}
}
