//! Renderable content.
//!
//! [`Content`] is the child value accepted by every builder. It is generic
//! over the builder's node type `N` so the same content pipeline serves both
//! server (`N = Html`) and client (`N = host node`) rendering.

use std::borrow::Cow;
use std::fmt;

/// A text value tagged with its escaping state.
///
/// The tag travels with the value through flattening, so a string that was
/// escaped once is never escaped again downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Text {
	/// Ordinary text. Escaped or not according to the render call.
	Plain(Cow<'static, str>),
	/// Text that has already been escaped. Emitted verbatim.
	Escaped(Cow<'static, str>),
	/// Markup supplied by a trusted caller. Emitted verbatim.
	Raw(Cow<'static, str>),
}

impl Text {
	/// Creates plain text.
	pub fn plain(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Plain(text.into())
	}

	/// Marks `text` as already escaped without touching it.
	pub fn escaped(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Escaped(text.into())
	}

	/// Creates trusted raw markup.
	///
	/// The string is inserted into server output as-is. Never pass
	/// user-controlled input here.
	pub fn raw(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(text.into())
	}

	/// Escapes `text` and marks the result as escaped.
	pub fn escape(text: &str) -> Self {
		Self::Escaped(Cow::Owned(crate::escape_html(text).into_owned()))
	}

	/// Returns the stored text.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Plain(s) | Self::Escaped(s) | Self::Raw(s) => s,
		}
	}

	/// Returns `true` if this text must be emitted without further escaping.
	pub fn is_verbatim(&self) -> bool {
		matches!(self, Self::Escaped(_) | Self::Raw(_))
	}

	/// Consumes the value and returns the stored text.
	pub fn into_string(self) -> String {
		match self {
			Self::Plain(s) | Self::Escaped(s) | Self::Raw(s) => s.into_owned(),
		}
	}
}

impl fmt::Display for Text {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A numeric leaf. Stringified without escaping.
///
/// Floats print their shortest round-trip form at their own precision, so
/// `0.1_f32` renders as `0.1`. Magnitudes of `1e21` and above, or below
/// `1e-6`, use exponent notation (`1e+21`, `1e-7`). Non-finite values
/// render as `Infinity`, `-Infinity` and `NaN`, and negative zero as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Signed integer.
	Int(i64),
	/// Unsigned integer.
	UInt(u64),
	/// Single-precision floating point.
	F32(f32),
	/// Double-precision floating point.
	Float(f64),
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(n) => write!(f, "{n}"),
			Self::UInt(n) => write!(f, "{n}"),
			Self::F32(n) => write_float(f, *n),
			Self::Float(n) => write_float(f, *n),
		}
	}
}

fn write_float<T>(f: &mut fmt::Formatter<'_>, value: T) -> fmt::Result
where
	T: fmt::Display + fmt::LowerExp + Copy + Into<f64>,
{
	let wide: f64 = value.into();
	if wide.is_nan() {
		return f.write_str("NaN");
	}
	if wide.is_infinite() {
		return f.write_str(if wide > 0.0 { "Infinity" } else { "-Infinity" });
	}
	if wide == 0.0 {
		return f.write_str("0");
	}

	let magnitude = wide.abs();
	if !(1e-6..1e21).contains(&magnitude) {
		let exponent = format!("{value:e}");
		return match exponent.split_once('e') {
			Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
			_ => f.write_str(&exponent),
		};
	}
	write!(f, "{value}")
}

macro_rules! number_from {
	($variant:ident as $target:ty: $($ty:ty),*) => {
		$(
			impl From<$ty> for Number {
				fn from(value: $ty) -> Self {
					Number::$variant(<$target>::from(value))
				}
			}
		)*
	};
}

number_from!(Int as i64: i8, i16, i32, i64);
number_from!(UInt as u64: u8, u16, u32, u64);
number_from!(Float as f64: f64);

impl From<f32> for Number {
	fn from(value: f32) -> Self {
		Number::F32(value)
	}
}

impl From<isize> for Number {
	fn from(value: isize) -> Self {
		Number::Int(value as i64)
	}
}

impl From<usize> for Number {
	fn from(value: usize) -> Self {
		Number::UInt(value as u64)
	}
}

/// Renderable child content.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<N> {
	/// Renders nothing.
	Empty,
	/// A text leaf.
	Text(Text),
	/// A numeric leaf.
	Number(Number),
	/// A node produced by the builder (server markup or host DOM node).
	Node(N),
	/// An ordered sequence, arbitrarily nested.
	Sequence(Vec<Content<N>>),
}

impl<N> Default for Content<N> {
	fn default() -> Self {
		Self::Empty
	}
}

impl<N> Content<N> {
	/// Creates plain text content.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(Text::plain(text))
	}

	/// Creates a sequence from anything convertible to content.
	pub fn sequence(items: impl IntoIterator<Item = impl IntoContent<N>>) -> Self {
		Self::Sequence(items.into_iter().map(IntoContent::into_content).collect())
	}

	/// Coerces any displayable value to plain text.
	pub fn display(value: impl fmt::Display) -> Self {
		Self::Text(Text::Plain(Cow::Owned(value.to_string())))
	}

	/// Returns `true` for [`Content::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Returns `true` if this leaf would produce no output at all.
	///
	/// Sequences are considered blank when every item is blank.
	pub fn is_blank(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Text(text) => text.as_str().is_empty(),
			Self::Sequence(items) => items.iter().all(Content::is_blank),
			Self::Number(_) | Self::Node(_) => false,
		}
	}
}

/// Flattens nested sequences into one ordered list of leaves.
///
/// The result never contains [`Content::Sequence`]. Relative order is
/// preserved, and nesting depth is not limited by the call stack.
pub fn flatten<N>(content: Content<N>) -> Vec<Content<N>> {
	let mut leaves = Vec::new();
	let mut stack = match content {
		Content::Sequence(items) => vec![items.into_iter()],
		leaf => return vec![leaf],
	};

	while let Some(top) = stack.last_mut() {
		match top.next() {
			Some(Content::Sequence(items)) => stack.push(items.into_iter()),
			Some(leaf) => leaves.push(leaf),
			None => {
				stack.pop();
			}
		}
	}
	leaves
}

/// Text view of a builder node, used when a node is resolved as text.
pub trait NodeText {
	/// Returns the node's textual representation.
	fn text_content(&self) -> Cow<'_, str>;
}

/// Types that can be used as child content.
///
/// Implemented for strings, numbers, [`Text`], [`Content`], `Option`, `Vec`,
/// arrays, tuples, and `()`. Builder node types implement it for their own
/// node type.
pub trait IntoContent<N> {
	/// Converts self into content.
	fn into_content(self) -> Content<N>;
}

impl<N> IntoContent<N> for Content<N> {
	fn into_content(self) -> Content<N> {
		self
	}
}

impl<N> IntoContent<N> for Text {
	fn into_content(self) -> Content<N> {
		Content::Text(self)
	}
}

impl<N> IntoContent<N> for Number {
	fn into_content(self) -> Content<N> {
		Content::Number(self)
	}
}

impl<N> IntoContent<N> for String {
	fn into_content(self) -> Content<N> {
		Content::Text(Text::Plain(Cow::Owned(self)))
	}
}

impl<N> IntoContent<N> for &String {
	fn into_content(self) -> Content<N> {
		Content::Text(Text::Plain(Cow::Owned(self.clone())))
	}
}

impl<N> IntoContent<N> for &'static str {
	fn into_content(self) -> Content<N> {
		Content::Text(Text::Plain(Cow::Borrowed(self)))
	}
}

impl<N> IntoContent<N> for Cow<'static, str> {
	fn into_content(self) -> Content<N> {
		Content::Text(Text::Plain(self))
	}
}

macro_rules! number_into_content {
	($($ty:ty),*) => {
		$(
			impl<N> IntoContent<N> for $ty {
				fn into_content(self) -> Content<N> {
					Content::Number(Number::from(self))
				}
			}
		)*
	};
}

number_into_content!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<N, T: IntoContent<N>> IntoContent<N> for Option<T> {
	fn into_content(self) -> Content<N> {
		match self {
			Some(value) => value.into_content(),
			None => Content::Empty,
		}
	}
}

impl<N, T: IntoContent<N>> IntoContent<N> for Vec<T> {
	fn into_content(self) -> Content<N> {
		Content::Sequence(self.into_iter().map(IntoContent::into_content).collect())
	}
}

impl<N, T: IntoContent<N>, const LEN: usize> IntoContent<N> for [T; LEN] {
	fn into_content(self) -> Content<N> {
		Content::Sequence(self.into_iter().map(IntoContent::into_content).collect())
	}
}

impl<N> IntoContent<N> for () {
	fn into_content(self) -> Content<N> {
		Content::Empty
	}
}

// Tuples act as variadic child lists

macro_rules! tuple_into_content {
	($($name:ident),+) => {
		impl<N, $($name: IntoContent<N>),+> IntoContent<N> for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_content(self) -> Content<N> {
				let ($($name,)+) = self;
				Content::Sequence(vec![$($name.into_content()),+])
			}
		}
	};
}

tuple_into_content!(A);
tuple_into_content!(A, B);
tuple_into_content!(A, B, C);
tuple_into_content!(A, B, C, D);
tuple_into_content!(A, B, C, D, E);
tuple_into_content!(A, B, C, D, E, F);
tuple_into_content!(A, B, C, D, E, F, G);
tuple_into_content!(A, B, C, D, E, F, G, H);
