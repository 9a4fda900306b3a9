//! HTML escaping.
//!
//! Escaped characters, in replacement order:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#039;`

use std::borrow::Cow;

const ENTITIES: &[(&str, char)] = &[
	("&amp;", '&'),
	("&lt;", '<'),
	("&gt;", '>'),
	("&quot;", '"'),
	("&#039;", '\''),
];

/// Escapes HTML special characters.
///
/// Accepts either a string or an `Option`; `None` yields an empty string.
/// Returns a borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use reinhardt_markup_core::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#039;x&#039;&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// assert_eq!(escape_html(None), "");
/// ```
pub fn escape_html<'a>(value: impl Into<Option<&'a str>>) -> Cow<'a, str> {
	let Some(s) = value.into() else {
		return Cow::Borrowed("");
	};
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 16);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Reverses [`escape_html`].
///
/// Only the five entities produced by [`escape_html`] are decoded; any other
/// `&` sequence is left untouched.
///
/// # Examples
///
/// ```
/// use reinhardt_markup_core::unescape_html;
///
/// assert_eq!(unescape_html("&lt;b&gt; &amp;lt;"), "<b> &lt;");
/// assert_eq!(unescape_html("&nbsp;"), "&nbsp;");
/// ```
pub fn unescape_html(s: &str) -> Cow<'_, str> {
	if !s.contains('&') {
		return Cow::Borrowed(s);
	}

	let mut out = String::with_capacity(s.len());
	let mut rest = s;
	while let Some(pos) = rest.find('&') {
		out.push_str(&rest[..pos]);
		rest = &rest[pos..];
		match ENTITIES
			.iter()
			.find(|(entity, _)| rest.starts_with(entity))
		{
			Some((entity, c)) => {
				out.push(*c);
				rest = &rest[entity.len()..];
			}
			None => {
				out.push('&');
				rest = &rest[1..];
			}
		}
	}
	out.push_str(rest);
	Cow::Owned(out)
}
