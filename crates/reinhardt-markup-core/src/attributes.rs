//! Attribute model and validation.
//!
//! Each attribute entry is either a static value or an event listener. The
//! two never mix: server rendering drops listeners, client rendering attaches
//! them, and neither can serialize a callable by accident.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::content::Number;
use crate::error::{MarkupError, Result};
use crate::tags::{is_boolean_attribute, is_url_sensitive_attribute};

/// Event listener attached under an attribute key.
pub type EventListener<E> = Arc<dyn Fn(E) + 'static>;

/// Event type passed to listeners registered on a server builder.
///
/// Server output never invokes listeners; this type only keeps attribute maps
/// for server and client builders shaped the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerEvent;

/// A static attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// A string value.
	Str(Cow<'static, str>),
	/// A numeric value.
	Number(Number),
	/// `true` renders name-only, `false` omits the attribute.
	Bool(bool),
	/// Omits the attribute.
	Absent,
}

/// How a static attribute is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrRendering<'a> {
	/// The attribute is not written.
	Omit,
	/// The attribute is written by name alone.
	NameOnly,
	/// The attribute is written with this (unescaped) value.
	Valued(Cow<'a, str>),
}

impl AttrValue {
	/// Decides how this value renders under `name`.
	pub fn rendering(&self, name: &str) -> AttrRendering<'_> {
		match self {
			AttrValue::Absent | AttrValue::Bool(false) => AttrRendering::Omit,
			AttrValue::Bool(true) => AttrRendering::NameOnly,
			_ if is_boolean_attribute(name) => AttrRendering::NameOnly,
			AttrValue::Str(s) => AttrRendering::Valued(Cow::Borrowed(s.as_ref())),
			AttrValue::Number(n) => AttrRendering::Valued(Cow::Owned(n.to_string())),
		}
	}
}

impl From<&'static str> for AttrValue {
	fn from(value: &'static str) -> Self {
		AttrValue::Str(Cow::Borrowed(value))
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Str(Cow::Owned(value))
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Str(Cow::Owned(value.clone()))
	}
}

impl From<Cow<'static, str>> for AttrValue {
	fn from(value: Cow<'static, str>) -> Self {
		AttrValue::Str(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<Number> for AttrValue {
	fn from(value: Number) -> Self {
		AttrValue::Number(value)
	}
}

macro_rules! number_attr_value {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Number(Number::from(value))
				}
			}
		)*
	};
}

number_attr_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Absent, Into::into)
	}
}

/// One attribute entry.
pub enum Attribute<E> {
	/// A static value.
	Static(AttrValue),
	/// An event listener.
	Listener(EventListener<E>),
}

impl<E> Clone for Attribute<E> {
	fn clone(&self) -> Self {
		match self {
			Attribute::Static(value) => Attribute::Static(value.clone()),
			Attribute::Listener(listener) => Attribute::Listener(Arc::clone(listener)),
		}
	}
}

impl<E> fmt::Debug for Attribute<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Attribute::Static(value) => f.debug_tuple("Static").field(value).finish(),
			Attribute::Listener(_) => f.debug_tuple("Listener").field(&"<closure>").finish(),
		}
	}
}

/// Insertion-ordered attribute map.
///
/// Setting an existing key replaces its entry in place, keeping the
/// original position.
///
/// ## Example
///
/// ```
/// use reinhardt_markup_core::{Attributes, ServerEvent};
///
/// let attrs: Attributes<ServerEvent> = Attributes::new()
///     .set("type", "checkbox")
///     .set("checked", true)
///     .set("disabled", false)
///     .on("onchange", |_| {});
/// assert_eq!(attrs.len(), 4);
/// ```
pub struct Attributes<E> {
	entries: Vec<(Cow<'static, str>, Attribute<E>)>,
}

impl<E> Default for Attributes<E> {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
		}
	}
}

impl<E> Clone for Attributes<E> {
	fn clone(&self) -> Self {
		Self {
			entries: self.entries.clone(),
		}
	}
}

impl<E> fmt::Debug for Attributes<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.entries.iter().map(|(k, v)| (k, v)))
			.finish()
	}
}

impl<E> Attributes<E> {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a static attribute.
	pub fn set(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, Attribute::Static(value.into()));
		self
	}

	/// Registers an event listener under `key` (for example `onclick`).
	pub fn on<F>(mut self, key: impl Into<Cow<'static, str>>, listener: F) -> Self
	where
		F: Fn(E) + 'static,
	{
		self.insert(key, Attribute::Listener(Arc::new(listener)));
		self
	}

	/// Inserts an entry, replacing any entry with the same key in place.
	pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, attribute: Attribute<E>) {
		let name = name.into();
		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some((_, slot)) => *slot = attribute,
			None => self.entries.push((name, attribute)),
		}
	}

	/// Returns the entry for `name`.
	pub fn get(&self, name: &str) -> Option<&Attribute<E>> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, attribute)| attribute)
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Attribute<E>)> {
		self.entries
			.iter()
			.map(|(key, attribute)| (key.as_ref(), attribute))
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Validates every static entry, failing on the first rejected one.
	///
	/// Listeners are not validated.
	pub fn validate(&self) -> Result<()> {
		for (name, attribute) in self.iter() {
			if let Attribute::Static(value) = attribute {
				validate_attribute(name, value)?;
			}
		}
		Ok(())
	}
}

impl<E> IntoIterator for Attributes<E> {
	type Item = (Cow<'static, str>, Attribute<E>);
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

static UNSAFE_VALUE_PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();

fn unsafe_value_patterns() -> &'static [(&'static str, Regex)] {
	UNSAFE_VALUE_PATTERNS.get_or_init(|| {
		vec![
			// JavaScript protocol
			(
				"javascript:",
				Regex::new(r"(?i)javascript:").expect("static pattern"),
			),
			// HTML data URI
			(
				"data:text/html",
				Regex::new(r"(?i)data:text/html").expect("static pattern"),
			),
		]
	})
}

/// Returns `true` if `name` can be written as an HTML attribute name.
///
/// Names must be non-empty and free of whitespace, control characters,
/// quotes, `<`, `>`, `/` and `=`.
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
		})
}

/// Validates one attribute.
///
/// This is a coarse static blocklist for `srcdoc` and `formaction`, not a URL
/// parser: it can reject legitimate values and miss obfuscated ones.
pub fn validate_attribute(name: &str, value: &AttrValue) -> Result<()> {
	if !is_valid_attribute_name(name) {
		tracing::debug!(attribute = name, "rejected invalid attribute name");
		return Err(MarkupError::InvalidAttributeName {
			name: name.to_string(),
		});
	}

	if let AttrValue::Str(value) = value {
		if is_url_sensitive_attribute(name) {
			if let Some(&(pattern, _)) = unsafe_value_patterns()
				.iter()
				.find(|(_, regex)| regex.is_match(value))
			{
				tracing::debug!(attribute = name, pattern, "rejected unsafe attribute value");
				return Err(MarkupError::UnsafeAttributeValue {
					name: name.to_string(),
					pattern,
				});
			}
		}
	}

	Ok(())
}

/// Derives the DOM event name for a listener key.
///
/// A leading `on` (any case) is stripped and the rest lowercased, so
/// `onclick` and `onClick` both map to `click`. Standard DOM event names
/// are all lowercase, which makes camel-cased handler keys work.
///
/// Keys without the prefix, and the bare key `on`, are used as-is. Register
/// mixed-case events under their exact name without the prefix:
/// `DOMContentLoaded` stays `DOMContentLoaded`, while `onDOMContentLoaded`
/// becomes `domcontentloaded`.
pub fn listener_event_name(key: &str) -> Cow<'_, str> {
	match key.get(..2) {
		Some(prefix) if prefix.eq_ignore_ascii_case("on") && key.len() > 2 => {
			Cow::Owned(key[2..].to_ascii_lowercase())
		}
		_ => Cow::Borrowed(key),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(AttrValue::Absent, AttrRendering::Omit)]
	#[case(AttrValue::Bool(false), AttrRendering::Omit)]
	#[case(AttrValue::Bool(true), AttrRendering::NameOnly)]
	#[case(AttrValue::from("x"), AttrRendering::Valued("x".into()))]
	#[case(AttrValue::from(3_i32), AttrRendering::Valued("3".into()))]
	fn test_rendering_of_regular_attribute(
		#[case] value: AttrValue,
		#[case] expected: AttrRendering<'static>,
	) {
		assert_eq!(value.rendering("data-x"), expected);
	}

	#[rstest]
	fn test_boolean_attribute_renders_name_only_for_any_present_value() {
		assert_eq!(AttrValue::from("checked").rendering("checked"), AttrRendering::NameOnly);
		assert_eq!(AttrValue::from("false").rendering("disabled"), AttrRendering::NameOnly);
		assert_eq!(AttrValue::from(false).rendering("disabled"), AttrRendering::Omit);
		assert_eq!(AttrValue::from(None::<&'static str>).rendering("required"), AttrRendering::Omit);
	}

	#[rstest]
	fn test_insert_replaces_in_place() {
		let attrs: Attributes<ServerEvent> = Attributes::new()
			.set("a", "1")
			.set("b", "2")
			.set("a", "3");
		let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["a", "b"]);
		assert!(matches!(attrs.get("a"), Some(Attribute::Static(AttrValue::Str(v))) if v == "3"));
	}

	#[rstest]
	#[case("")]
	#[case("on click")]
	#[case("a\"b")]
	#[case("x=y")]
	#[case("<script>")]
	#[case("a/b")]
	fn test_invalid_attribute_names(#[case] name: &str) {
		let result = validate_attribute(name, &AttrValue::from("v"));
		assert_eq!(
			result,
			Err(MarkupError::InvalidAttributeName {
				name: name.to_string()
			})
		);
	}

	#[rstest]
	#[case("srcdoc", "javascript:alert(1)", "javascript:")]
	#[case("formaction", "JavaScript:void(0)", "javascript:")]
	#[case("srcdoc", "data:text/html;base64,PHNjcmlwdD4=", "data:text/html")]
	#[case("SRCDOC", "x javascript: y", "javascript:")]
	fn test_unsafe_values_rejected(
		#[case] name: &str,
		#[case] value: &'static str,
		#[case] pattern: &'static str,
	) {
		assert_eq!(
			validate_attribute(name, &AttrValue::from(value)),
			Err(MarkupError::UnsafeAttributeValue {
				name: name.to_string(),
				pattern,
			})
		);
	}

	#[rstest]
	#[case("href", "javascript:alert(1)")]
	#[case("srcdoc", "<p>hello</p>")]
	#[case("formaction", "/submit")]
	fn test_safe_values_accepted(#[case] name: &str, #[case] value: &'static str) {
		assert_eq!(validate_attribute(name, &AttrValue::from(value)), Ok(()));
	}

	#[rstest]
	fn test_non_string_values_skip_pattern_check() {
		assert_eq!(validate_attribute("srcdoc", &AttrValue::Bool(true)), Ok(()));
	}

	#[rstest]
	fn test_validate_skips_listeners() {
		let attrs: Attributes<ServerEvent> = Attributes::new().on("", |_| {});
		assert_eq!(attrs.validate(), Ok(()));
	}

	#[rstest]
	#[case("onclick", "click")]
	#[case("onClick", "click")]
	#[case("ONINPUT", "input")]
	#[case("click", "click")]
	#[case("on", "on")]
	#[case("mouseenter", "mouseenter")]
	#[case("onMouseEnter", "mouseenter")]
	#[case("onDOMContentLoaded", "domcontentloaded")]
	#[case("DOMContentLoaded", "DOMContentLoaded")]
	#[case("myCustomEvent", "myCustomEvent")]
	fn test_listener_event_name(#[case] key: &str, #[case] expected: &str) {
		assert_eq!(listener_event_name(key), expected);
	}
}
