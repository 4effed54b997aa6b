//! Decoding error types.

/// Errors that can occur while decoding an XML response.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input is not a well-formed XML document.
    ///
    /// Raised by the tokenizer before any delegate sees an event, so no
    /// partially decoded graph exists when this is returned.
    #[error("malformed XML document: {0}")]
    MalformedDocument(String),

    /// A leaf value lies outside the domain its field accepts.
    ///
    /// Fields decoded before the offending one stay in the caller's root.
    #[error("unexpected value {value:?} for field {field} (expected {expected})")]
    UnexpectedValue {
        /// Element name of the field.
        field: String,
        /// Text that failed to parse.
        value: String,
        /// Human readable description of the accepted domain.
        expected: &'static str,
    },

    /// The document nests deeper than the configured limit.
    #[error("document nesting exceeds the configured limit of {0} elements")]
    DepthExceeded(usize),

    /// A delegate claimed a child element in `on_open` but could not hand
    /// the same child back from `active_child`.
    #[error("delegate lost track of the child it claimed for <{0}>")]
    DetachedChild(String),
}

impl From<quick_xml::Error> for DecodeError {
    fn from(e: quick_xml::Error) -> Self {
        Self::MalformedDocument(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for DecodeError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::MalformedDocument(e.to_string())
    }
}

/// Convenience result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    /// Build an [`DecodeError::UnexpectedValue`] for the given field.
    #[must_use]
    pub fn unexpected(field: &str, value: &str, expected: &'static str) -> Self {
        Self::UnexpectedValue {
            field: field.to_owned(),
            value: value.to_owned(),
            expected,
        }
    }
}
