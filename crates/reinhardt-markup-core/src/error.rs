//! Error types for markup construction.

/// Failure reported by a host DOM primitive.
///
/// Only client-mode builders ever produce this; the server builder never
/// touches a host document.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,
	/// Failed to create an element.
	#[error("Failed to create element <{tag}>")]
	CreateElementFailed {
		/// Tag name passed to the host.
		tag: String,
	},
	/// Failed to set an attribute.
	#[error("Failed to set attribute `{name}`")]
	SetAttributeFailed {
		/// Attribute name passed to the host.
		name: String,
	},
	/// Failed to register an event listener.
	#[error("Failed to add `{event}` listener")]
	AddListenerFailed {
		/// Event name passed to the host.
		event: String,
	},
	/// Failed to append a child node.
	#[error("Failed to append child")]
	AppendChildFailed,
}

/// Errors raised by a render call.
///
/// Attribute failures abort the whole call before any output is produced.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
	/// The attribute key is empty or contains characters that cannot appear
	/// in an HTML attribute name.
	#[error("invalid attribute name: {name:?}")]
	InvalidAttributeName {
		/// The rejected attribute name.
		name: String,
	},
	/// A value under a blocklisted attribute matched a disallowed pattern.
	#[error("unsafe value for attribute `{name}`: contains `{pattern}`")]
	UnsafeAttributeValue {
		/// The attribute name.
		name: String,
		/// The pattern that matched.
		pattern: &'static str,
	},
	/// Children were supplied to a void element while
	/// [`BuilderConfig::strict_void_children`](crate::BuilderConfig::strict_void_children)
	/// is enabled.
	#[error("void element <{tag}> cannot contain children")]
	InvalidChildForVoidTag {
		/// The void tag name.
		tag: String,
	},
	/// A host DOM primitive failed.
	#[error(transparent)]
	Mount(#[from] MountError),
}

/// Result type used throughout the markup crates.
pub type Result<T, E = MarkupError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_attribute_errors_display() {
		let err = MarkupError::InvalidAttributeName {
			name: String::new(),
		};
		assert_eq!(err.to_string(), "invalid attribute name: \"\"");

		let err = MarkupError::UnsafeAttributeValue {
			name: "srcdoc".to_string(),
			pattern: "javascript:",
		};
		assert_eq!(
			err.to_string(),
			"unsafe value for attribute `srcdoc`: contains `javascript:`"
		);
	}

	#[rstest]
	fn test_mount_error_converts_transparently() {
		let err: MarkupError = MountError::AppendChildFailed.into();
		assert_eq!(err.to_string(), "Failed to append child");
		assert_eq!(err, MarkupError::Mount(MountError::AppendChildFailed));
	}
}
