//! Arity-polymorphic currying.
//!
//! Every curried operation follows the same dispatch protocol. Given an
//! operation of arity `N` that already holds `b` bound arguments, a call with
//! `k` arguments:
//!
//! - `k = 0`: returns the callee itself ([`Application::Unapplied`]),
//! - `b + k < N`: returns a continuation binding the arguments so far
//!   ([`Application::Partial`]),
//! - `b + k >= N`: runs the final computation on the first `N` arguments and
//!   returns its result ([`Application::Complete`]). Extra arguments are
//!   ignored.
//!
//! Only the length of the call record matters. An explicit
//! [`Value::Undefined`] counts as a supplied argument.
//!
//! # Laws
//!
//! - **Self identity**: `op()` is `op`, at every partial stage.
//! - **Associativity**: for any split `args1 ++ args2` of `N` arguments,
//!   `op(args1)(args2) == op(args1 ++ args2)`.
//!
//! # Examples
//!
//! ```rust
//! use polycurry::{add, values, Application, Value};
//!
//! let add = add();
//! assert!(matches!(add.apply(&[])?, Application::Unapplied(ref itself) if *itself == add));
//!
//! let add_two = add.call(&values![2])?;
//! assert_eq!(add_two.call(&values![3])?, Value::from(5));
//! assert_eq!(add.call(&values![2, 3, 100])?, Value::from(5));
//! # Ok::<(), polycurry::CurryError>(())
//! ```

mod operations;

pub use operations::{add, filter, map, prop, reduce, subtract};

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::CurryError;
use crate::function::{Body, Function};
use crate::value::Value;

/// The outcome of applying a function to a call record.
///
/// Returning "the function itself" is an explicit variant rather than an
/// incidental reference, so callers can tell an unconfigured operation apart
/// from a continuation or a finished result.
#[derive(Clone, Debug, PartialEq)]
pub enum Application {
    /// No arguments were supplied; carries the callee unchanged.
    Unapplied(Function),
    /// Fewer arguments than the arity; carries a continuation.
    Partial(Function),
    /// The final computation ran; carries its result.
    Complete(Value),
}

impl Application {
    /// Collapses the application into a value, wrapping callables in
    /// [`Value::Function`].
    pub fn into_value(self) -> Value {
        match self {
            Self::Unapplied(function) | Self::Partial(function) => Value::Function(function),
            Self::Complete(value) => value,
        }
    }

    /// Returns the result if the final computation ran.
    pub fn complete(self) -> Option<Value> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Unapplied(_) | Self::Partial(_) => None,
        }
    }

    /// Returns the callable for unapplied and partial applications.
    pub fn into_function(self) -> Option<Function> {
        match self {
            Self::Unapplied(function) | Self::Partial(function) => Some(function),
            Self::Complete(_) => None,
        }
    }

    /// Returns `true` if the final computation ran.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// A named final computation with a fixed arity.
struct Operation {
    name: Cow<'static, str>,
    arity: usize,
    computation: Box<Body>,
}

struct Bound {
    operation: Arc<Operation>,
    arguments: Vec<Value>,
}

/// A curried operation together with the arguments bound so far.
///
/// A freshly created operation binds nothing; continuations produced by
/// partial calls own an independent copy of their bound arguments.
#[derive(Clone)]
pub struct Curried(Arc<Bound>);

impl Curried {
    fn new(operation: Operation) -> Self {
        Self(Arc::new(Bound {
            operation: Arc::new(operation),
            arguments: Vec::new(),
        }))
    }

    /// Name of the underlying operation.
    pub fn name(&self) -> &str {
        &self.0.operation.name
    }

    /// Declared arity of the underlying operation.
    pub fn arity(&self) -> usize {
        self.0.operation.arity
    }

    /// Arguments bound by earlier partial calls.
    pub fn bound(&self) -> &[Value] {
        &self.0.arguments
    }

    /// Number of arguments still missing.
    pub fn remaining(&self) -> usize {
        self.arity() - self.bound().len()
    }

    /// Dispatches on the number of supplied arguments.
    ///
    /// # Errors
    ///
    /// Propagates errors from the final computation.
    pub fn apply(&self, arguments: &[Value]) -> Result<Application, CurryError> {
        if arguments.is_empty() {
            tracing::trace!(operation = %self.name(), bound = self.bound().len(), "unapplied");
            return Ok(Application::Unapplied(Function::Curried(self.clone())));
        }

        let arity = self.arity();
        let bound = self.bound();
        let supplied = bound.len() + arguments.len();

        if supplied < arity {
            tracing::trace!(operation = %self.name(), supplied, arity, "partially applied");
            let mut record = Vec::with_capacity(supplied);
            record.extend_from_slice(bound);
            record.extend_from_slice(arguments);
            let continuation = Self(Arc::new(Bound {
                operation: Arc::clone(&self.0.operation),
                arguments: record,
            }));
            return Ok(Application::Partial(Function::Curried(continuation)));
        }

        tracing::trace!(
            operation = %self.name(),
            supplied,
            arity,
            ignored = supplied - arity,
            "fully applied"
        );
        let missing = arity - bound.len();
        let record: Cow<'_, [Value]> = if bound.is_empty() {
            Cow::Borrowed(&arguments[..missing])
        } else {
            Cow::Owned(bound.iter().chain(&arguments[..missing]).cloned().collect())
        };
        (self.0.operation.computation)(&*record).map(Application::Complete)
    }

    pub(crate) fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .field("bound", &self.bound())
            .finish()
    }
}

/// Turns a final computation into a curried [`Function`] of the given arity.
///
/// The computation always receives exactly `arity` arguments. An arity of
/// zero is treated as one, since a zero-argument call always returns the
/// operation itself.
///
/// # Examples
///
/// ```rust
/// use polycurry::{curry, values, Value};
///
/// let clamp = curry("clamp", 3, |arguments| {
///     let low = arguments[0].expect_number("clamp", "low")?;
///     let high = arguments[1].expect_number("clamp", "high")?;
///     let value = arguments[2].expect_number("clamp", "value")?;
///     Ok(Value::from(value.clamp(low, high)))
/// });
///
/// let unit = clamp.call(&values![0, 1])?;
/// assert_eq!(unit.call(&values![7])?, Value::from(1));
/// assert_eq!(clamp.call(&values![0])?.call(&values![1])?.call(&values![-2])?, Value::from(0));
/// # Ok::<(), polycurry::CurryError>(())
/// ```
pub fn curry<F>(name: impl Into<Cow<'static, str>>, arity: usize, computation: F) -> Function
where
    F: Fn(&[Value]) -> Result<Value, CurryError> + Send + Sync + 'static,
{
    Function::Curried(Curried::new(Operation {
        name: name.into(),
        arity: arity.max(1),
        computation: Box::new(computation),
    }))
}
