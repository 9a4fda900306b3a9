//! Fixed tag and attribute sets.
//!
//! All lookups are ASCII case-insensitive, matching how HTML treats tag and
//! attribute names.

/// Standard void elements. These never receive a closing tag or children.
pub const VOID_TAGS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Elements whose body is not HTML, so their content is not escaped unless
/// a render call asks for it explicitly.
pub const RAW_CONTENT_TAGS: &[&str] = &[
	"script", "style", "pre", "code", "textarea", "noscript", "xmp",
];

/// HTML boolean attributes.
///
/// Presence alone activates these, so any value that is not omitted is
/// rendered name-only:
/// - `<button disabled>` is disabled
/// - `<button disabled="false">` is STILL disabled
/// - `<button>` is NOT disabled (attribute absent)
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Attributes whose string values are checked against the unsafe pattern
/// blocklist.
pub const URL_SENSITIVE_ATTRS: &[&str] = &["srcdoc", "formaction"];

fn contains_ignore_case(set: &[&str], name: &str) -> bool {
	set.iter().any(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Returns `true` if `tag` is one of the standard void elements.
pub fn is_void_tag(tag: &str) -> bool {
	contains_ignore_case(VOID_TAGS, tag)
}

/// Returns `true` if `tag` holds raw (non-HTML) content by default.
pub fn is_raw_content_tag(tag: &str) -> bool {
	contains_ignore_case(RAW_CONTENT_TAGS, tag)
}

/// Returns `true` if `name` is an HTML boolean attribute.
pub fn is_boolean_attribute(name: &str) -> bool {
	contains_ignore_case(BOOLEAN_ATTRS, name)
}

pub(crate) fn is_url_sensitive_attribute(name: &str) -> bool {
	contains_ignore_case(URL_SENSITIVE_ATTRS, name)
}
