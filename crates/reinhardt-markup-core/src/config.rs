//! Builder configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::tags::is_void_tag;

/// Configuration captured by a builder at construction.
///
/// Builders own a copy and never change it afterwards. Every field has a
/// default, so partial documents deserialize cleanly:
///
/// ```
/// use reinhardt_markup_core::BuilderConfig;
///
/// let config = BuilderConfig::from_json(r#"{ "custom_void_tags": ["my-icon"] }"#).unwrap();
/// assert!(config.default_escape);
/// assert!(config.is_void("my-icon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
	/// Whether plain text is escaped when neither the call nor the tag decides.
	pub default_escape: bool,
	/// Whether attributes are validated.
	pub validate_attributes: bool,
	/// Extra tags treated as void, in addition to the standard set.
	pub custom_void_tags: BTreeSet<String>,
	/// Reject children passed to void elements instead of discarding them.
	pub strict_void_children: bool,
}

impl Default for BuilderConfig {
	fn default() -> Self {
		Self {
			default_escape: true,
			validate_attributes: true,
			custom_void_tags: BTreeSet::new(),
			strict_void_children: false,
		}
	}
}

impl BuilderConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a configuration from JSON.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Sets the default escaping behavior.
	pub fn default_escape(mut self, escape: bool) -> Self {
		self.default_escape = escape;
		self
	}

	/// Enables or disables attribute validation.
	pub fn validate_attributes(mut self, validate: bool) -> Self {
		self.validate_attributes = validate;
		self
	}

	/// Adds a custom void tag. Names are stored lowercase.
	pub fn void_tag(mut self, tag: impl Into<String>) -> Self {
		self.custom_void_tags.insert(tag.into().to_ascii_lowercase());
		self
	}

	/// Adds several custom void tags.
	pub fn void_tags<I, S>(self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		tags.into_iter().fold(self, |config, tag| config.void_tag(tag))
	}

	/// Makes children on void elements an error.
	pub fn strict_void_children(mut self, strict: bool) -> Self {
		self.strict_void_children = strict;
		self
	}

	/// Returns `true` if `tag` is void under this configuration.
	pub fn is_void(&self, tag: &str) -> bool {
		is_void_tag(tag)
			|| self
				.custom_void_tags
				.iter()
				.any(|custom| custom.eq_ignore_ascii_case(tag))
	}
}

/// Per-call options. `None` defers to the builder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Explicit escape directive for this element's body.
	pub escape_content: Option<bool>,
	/// Explicit attribute validation directive for this call.
	pub validate_attributes: Option<bool>,
}

impl RenderOptions {
	/// Creates options that defer everything to the builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Forces body content to be escaped (`true`) or left raw (`false`).
	pub fn escape(mut self, escape: bool) -> Self {
		self.escape_content = Some(escape);
		self
	}

	/// Forces attribute validation on or off for this call.
	pub fn validate(mut self, validate: bool) -> Self {
		self.validate_attributes = Some(validate);
		self
	}

	/// Resolves whether attributes are validated for this call.
	pub fn should_validate(&self, config: &BuilderConfig) -> bool {
		self.validate_attributes
			.unwrap_or(config.validate_attributes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let config = BuilderConfig::default();
		assert!(config.default_escape);
		assert!(config.validate_attributes);
		assert!(config.custom_void_tags.is_empty());
		assert!(!config.strict_void_children);
	}

	#[rstest]
	fn test_custom_void_tags_merge_with_standard_set() {
		let config = BuilderConfig::new().void_tags(["My-Icon", "spacer"]);
		assert!(config.is_void("my-icon"));
		assert!(config.is_void("SPACER"));
		assert!(config.is_void("br"));
		assert!(!config.is_void("div"));
	}

	#[rstest]
	fn test_from_json_partial_document() {
		let config = BuilderConfig::from_json(
			r#"{ "default_escape": false, "strict_void_children": true }"#,
		)
		.unwrap();
		assert!(!config.default_escape);
		assert!(config.validate_attributes);
		assert!(config.strict_void_children);
	}

	#[rstest]
	fn test_from_json_rejects_wrong_types() {
		assert!(BuilderConfig::from_json(r#"{ "default_escape": "yes" }"#).is_err());
	}

	#[rstest]
	fn test_render_options_override_validation() {
		let config = BuilderConfig::new();
		assert!(RenderOptions::new().should_validate(&config));
		assert!(!RenderOptions::new().validate(false).should_validate(&config));
		let lax = BuilderConfig::new().validate_attributes(false);
		assert!(RenderOptions::new().validate(true).should_validate(&lax));
	}
}
