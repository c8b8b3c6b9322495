//! Error types for the mapping layer.

/// Why a wire message could not become a domain object, or why a builder
/// refused to finish.
///
/// Decode paths and builder finalization return the same variants for the
/// same broken invariant, so callers can react to one taxonomy regardless
/// of how an object was being constructed. Each variant names the field
/// (or union) it is about.
///
/// ## Matching on errors
///
/// The `name` and `kind` fields are `&'static str` literals chosen by the
/// decoder, so they can be matched directly:
///
/// ```rust
/// use s2bridge_mapping::MappingError;
///
/// fn describe(err: &MappingError) -> String {
///     match err {
///         MappingError::MissingRequiredField { name: "creep" } => {
///             "map state arrived without a creep layer".into()
///         }
///         MappingError::UnknownIdentifier { kind, id } => {
///             format!("catalog is out of date: no {kind} {id}")
///         }
///         other => other.to_string(),
///     }
/// }
///
/// let err = MappingError::InvalidRange { name: "shared port", value: 0 };
/// assert_eq!(describe(&err), "shared port is out of range: 0");
/// assert_eq!(err.subject(), "shared port");
/// ```
///
/// `InvalidRange` and `UnknownIdentifier` carry the offending value as
/// `i64`, which holds every wire integer width (`int32`, `uint32`) without
/// loss.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// A required field was absent on decode, or never supplied to a builder.
    #[error("{name} is required")]
    MissingRequiredField { name: &'static str },

    /// A required collection ended up with zero elements.
    #[error("{name} must not be empty")]
    EmptyRequiredCollection { name: &'static str },

    /// More than one alternative of an exclusive union was set.
    #[error("{name} must have at most one alternative set")]
    ConflictingVariant { name: &'static str },

    /// A numeric value is outside the range its field allows.
    #[error("{name} is out of range: {value}")]
    InvalidRange { name: &'static str, value: i64 },

    /// A lookup table has no entry for the identifier.
    #[error("unknown {kind} identifier: {id}")]
    UnknownIdentifier { kind: &'static str, id: i64 },

    /// The message handed to decode was itself absent.
    #[error("{name} message is absent")]
    NullInput { name: &'static str },
}

impl MappingError {
    /// The field, union, or table the error is about.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { name }
            | Self::EmptyRequiredCollection { name }
            | Self::ConflictingVariant { name }
            | Self::InvalidRange { name, .. }
            | Self::NullInput { name } => name,
            Self::UnknownIdentifier { kind, .. } => kind,
        }
    }
}
