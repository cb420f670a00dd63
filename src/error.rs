//! Error types for curried operations and pipelines.
//!
//! Arity mismatches are never errors: too few arguments produce a
//! continuation and superfluous ones are ignored. Errors only surface at the
//! final-computation boundary, when the supplied values cannot be used.

use std::borrow::Cow;

/// An argument of the wrong kind reached a final computation.
///
/// # Examples
///
/// ```rust
/// use polycurry::InvalidInputError;
///
/// let error = InvalidInputError {
///     operation: "add",
///     parameter: "a",
///     expected: "number",
///     found: "string",
/// };
/// assert_eq!(format!("{error}"), "add: expected `a` to be a number, found string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputError {
    /// The operation that rejected the argument.
    pub operation: &'static str,
    /// The name of the offending parameter.
    pub parameter: &'static str,
    /// The kind of value the operation needs.
    pub expected: &'static str,
    /// The kind of value that was supplied.
    pub found: &'static str,
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: expected `{}` to be a {}, found {}",
            self.operation, self.parameter, self.expected, self.found
        )
    }
}

impl std::error::Error for InvalidInputError {}

/// A property lookup was attempted on `undefined` or `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullReceiverError {
    /// The operation that performed the lookup.
    pub operation: &'static str,
    /// The kind of the receiver (`"undefined"` or `"null"`).
    pub receiver: &'static str,
}

impl std::fmt::Display for NullReceiverError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: cannot read a property of {}",
            self.operation, self.receiver
        )
    }
}

impl std::error::Error for NullReceiverError {}

/// Errors produced while applying curried operations and pipelines.
///
/// # Examples
///
/// ```rust
/// use polycurry::{CurryError, NullReceiverError};
///
/// let error = CurryError::NullReceiver(NullReceiverError {
///     operation: "prop",
///     receiver: "null",
/// });
/// assert_eq!(error.to_string(), "prop: cannot read a property of null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurryError {
    /// A final computation received a value it cannot work with.
    InvalidInput(InvalidInputError),
    /// `prop` was given an absent receiver.
    NullReceiver(NullReceiverError),
    /// A native callback failed.
    Raised {
        /// Name of the failing function.
        function: Cow<'static, str>,
        /// Human readable failure description.
        message: String,
    },
}

impl CurryError {
    /// Shorthand for building an [`CurryError::InvalidInput`].
    pub const fn invalid_input(
        operation: &'static str,
        parameter: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::InvalidInput(InvalidInputError {
            operation,
            parameter,
            expected,
            found,
        })
    }

    /// Builds a [`CurryError::Raised`] for use inside native callbacks.
    ///
    /// ```rust
    /// use polycurry::{CurryError, Function, Value};
    ///
    /// let fail = Function::native("fail", |_| Err(CurryError::raised("fail", "nope")));
    /// assert!(fail.call(&[Value::Null]).is_err());
    /// ```
    pub fn raised(function: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Raised {
            function: function.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(error) => write!(formatter, "{error}"),
            Self::NullReceiver(error) => write!(formatter, "{error}"),
            Self::Raised { function, message } => write!(formatter, "{function}: {message}"),
        }
    }
}

impl std::error::Error for CurryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(error) => Some(error),
            Self::NullReceiver(error) => Some(error),
            Self::Raised { .. } => None,
        }
    }
}

impl From<InvalidInputError> for CurryError {
    fn from(error: InvalidInputError) -> Self {
        Self::InvalidInput(error)
    }
}

impl From<NullReceiverError> for CurryError {
    fn from(error: NullReceiverError) -> Self {
        Self::NullReceiver(error)
    }
}
