//! Callable values.
//!
//! A [`Function`] is anything that can sit in [`Value::Function`]: a native
//! closure, a curried operation (or one of its continuations), the pipe
//! compositor, or a pipeline it built. Functions are cheap to clone and
//! compare by identity, so `map() == map()` while two separately built
//! continuations never compare equal.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::compose::{Compositor, Pipeline};
use crate::curry::{Application, Curried};
use crate::error::CurryError;
use crate::value::Value;

/// Signature shared by native function bodies and final computations.
pub type Body = dyn Fn(&[Value]) -> Result<Value, CurryError> + Send + Sync;

static UNDEFINED: Value = Value::Undefined;

/// Returns the argument at `index`, or [`Value::Undefined`] when the call
/// record is shorter.
///
/// ```rust
/// use polycurry::{function::argument, values, Value};
///
/// let record = values![1];
/// assert_eq!(argument(&record, 0), &Value::from(1));
/// assert_eq!(argument(&record, 3), &Value::Undefined);
/// ```
pub fn argument(arguments: &[Value], index: usize) -> &Value {
    arguments.get(index).unwrap_or(&UNDEFINED)
}

/// A Rust closure exposed as a [`Function`].
pub struct NativeFunction {
    name: Cow<'static, str>,
    body: Box<Body>,
}

/// A callable value.
#[derive(Clone)]
pub enum Function {
    /// A plain closure: always executes, whatever the call record.
    Native(Arc<NativeFunction>),
    /// A curried operation or a continuation of one.
    Curried(Curried),
    /// The `pipe` compositor itself.
    Compositor(Compositor),
    /// A pipeline built by the compositor.
    Pipeline(Pipeline),
}

impl Function {
    /// Wraps a closure over the raw call record.
    ///
    /// The closure sees exactly the arguments that were supplied; use
    /// [`argument`] to read optional positions.
    ///
    /// ```rust
    /// use polycurry::{Function, Value, values};
    ///
    /// let count = Function::native("count", |arguments| Ok(Value::from(arguments.len())));
    /// assert_eq!(count.call(&values![1, 2])?, Value::from(2));
    /// # Ok::<(), polycurry::CurryError>(())
    /// ```
    pub fn native<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        Self::Native(Arc::new(NativeFunction {
            name: name.into(),
            body: Box::new(body),
        }))
    }

    /// Wraps a closure over the first argument only.
    ///
    /// A missing first argument is seen as [`Value::Undefined`]; extra
    /// arguments are ignored.
    pub fn unary<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        Self::native(name, move |arguments| body(argument(arguments, 0)))
    }

    /// Name used in `Display`, `Debug` and error messages.
    pub fn name(&self) -> &str {
        match self {
            Self::Native(native) => &native.name,
            Self::Curried(curried) => curried.name(),
            Self::Compositor(_) => "pipe",
            Self::Pipeline(_) => "pipeline",
        }
    }

    /// Number of arguments still required before a final computation runs.
    ///
    /// `None` for functions that execute on any call record.
    pub fn remaining_arity(&self) -> Option<usize> {
        match self {
            Self::Curried(curried) => Some(curried.remaining()),
            Self::Native(_) | Self::Compositor(_) | Self::Pipeline(_) => None,
        }
    }

    /// Applies the function and reports which call shape was taken.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the final computation or by a callback
    /// it invoked.
    pub fn apply(&self, arguments: &[Value]) -> Result<Application, CurryError> {
        match self {
            Self::Native(native) => (native.body)(arguments).map(Application::Complete),
            Self::Curried(curried) => curried.apply(arguments),
            Self::Compositor(compositor) => compositor.apply(arguments),
            Self::Pipeline(pipeline) => pipeline.run(arguments).map(Application::Complete),
        }
    }

    /// Applies the function and collapses the result into a [`Value`].
    ///
    /// # Errors
    ///
    /// See [`Function::apply`].
    pub fn call(&self, arguments: &[Value]) -> Result<Value, CurryError> {
        self.apply(arguments).map(Application::into_value)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(left), Self::Native(right)) => Arc::ptr_eq(left, right),
            (Self::Curried(left), Self::Curried(right)) => left.same_as(right),
            (Self::Compositor(_), Self::Compositor(_)) => true,
            (Self::Pipeline(left), Self::Pipeline(right)) => left.same_as(right),
            _ => false,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curried(curried) => fmt::Debug::fmt(curried, formatter),
            Self::Pipeline(pipeline) => fmt::Debug::fmt(pipeline, formatter),
            Self::Native(_) | Self::Compositor(_) => {
                formatter.debug_tuple("Function").field(&self.name()).finish()
            }
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[Function: {}]", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn test_native_executes_on_empty_record() {
        let answer = Function::native("answer", |_| Ok(Value::from(42)));
        assert_eq!(answer.call(&[]).unwrap(), Value::from(42));
    }

    #[test]
    fn test_unary_sees_undefined_when_omitted() {
        let describe = Function::unary("describe", |value| Ok(Value::from(value.kind())));
        assert_eq!(describe.call(&[]).unwrap(), Value::from("undefined"));
        assert_eq!(describe.call(&values![1, "x"]).unwrap(), Value::from("number"));
    }

    #[test]
    fn test_identity_equality() {
        let first = Function::native("f", |_| Ok(Value::Null));
        let second = Function::native("f", |_| Ok(Value::Null));
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[test]
    fn test_display_uses_name() {
        let function = Function::native("shout", |_| Ok(Value::Null));
        assert_eq!(function.to_string(), "[Function: shout]");
        assert_eq!(Value::from(function).property("name"), Value::from("shout"));
    }

    #[test]
    fn test_native_has_no_remaining_arity() {
        let function = Function::native("f", |_| Ok(Value::Null));
        assert_eq!(function.remaining_arity(), None);
    }
}
