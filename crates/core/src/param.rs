//! Declarative parameter specs, validation, and URI-safe encoding.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::Error;
use crate::value::ParamValue;

/// Bytes escaped when a value is placed in a path segment, query string, or
/// form body. Everything except ASCII alphanumerics and `- . _ ~`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The type a parameter value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamKind {
    /// No constraint.
    #[default]
    Any,
    /// Free-form text.
    Text,
    /// A whole number.
    Integer,
    /// An instant or date with an ISO-8601 rendering.
    Timestamp,
}

impl ParamKind {
    /// Phrase used in type errors, e.g. "an integer".
    pub fn describe(self) -> &'static str {
        match self {
            Self::Any => "any value",
            Self::Text => "a string",
            Self::Integer => "an integer",
            Self::Timestamp => "a timestamp",
        }
    }

    fn accepts(self, value: &ParamValue) -> bool {
        matches!(
            (self, value),
            (Self::Any, _)
                | (Self::Text, ParamValue::Text(_))
                | (Self::Integer, ParamValue::Integer(_))
                | (Self::Timestamp, ParamValue::Timestamp(_))
        )
    }
}

/// One logical argument of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Name used in error messages and as the query/form key.
    pub name: &'static str,
    /// The raw argument, if the caller supplied one.
    pub value: Option<ParamValue>,
    /// Whether a missing value is an error.
    pub required: bool,
    /// Expected type of a present value.
    pub kind: ParamKind,
}

impl ParameterSpec {
    /// An optional, unconstrained parameter.
    ///
    /// Empty text counts as absent.
    pub fn new(name: &'static str, value: Option<ParamValue>) -> Self {
        let value = value.filter(|v| !matches!(v, ParamValue::Text(s) if s.is_empty()));
        Self {
            name,
            value,
            required: false,
            kind: ParamKind::Any,
        }
    }

    /// Mark the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Constrain the type of a present value.
    #[must_use]
    pub fn kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Check a spec and return its value, or `None` for an absent optional value.
pub fn validate(spec: &ParameterSpec) -> Result<Option<&ParamValue>, Error> {
    let Some(value) = spec.value.as_ref() else {
        if spec.required {
            return Err(Error::MissingRequiredParameter(spec.name.to_owned()));
        }
        return Ok(None);
    };

    if !spec.kind.accepts(value) {
        return Err(Error::InvalidParameterType {
            name: spec.name.to_owned(),
            expected: spec.kind.describe(),
        });
    }

    Ok(Some(value))
}

/// A validated parameter rendered and escaped for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedParameter {
    /// Parameter name.
    pub name: &'static str,
    /// Percent-escaped rendering of the value.
    pub encoded: String,
}

impl fmt::Display for EncodedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.encoded)
    }
}

/// Render and escape a value. Never fails.
pub fn encode(name: &'static str, value: &ParamValue) -> EncodedParameter {
    EncodedParameter {
        name,
        encoded: escape(&value.render()),
    }
}

/// Percent-escape a string for a path segment, query string, or form body.
pub fn escape(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Validate every spec and encode the present values, preserving order.
///
/// Fails on the first invalid spec; nothing is encoded in that case.
pub fn prepare(specs: &[ParameterSpec]) -> Result<Vec<EncodedParameter>, Error> {
    let mut validated = Vec::with_capacity(specs.len());
    for spec in specs {
        if let Some(value) = validate(spec)? {
            validated.push((spec.name, value));
        }
    }
    Ok(validated
        .into_iter()
        .map(|(name, value)| encode(name, value))
        .collect())
}
