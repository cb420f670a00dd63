//! Value-level combinators that make handy pipeline stages.
//!
//! - [`identity`]: returns its first argument (I combinator)
//! - [`constant`]: ignores its arguments and returns a fixed value (K combinator)
//! - [`flip`]: swaps the first two arguments of a function (C combinator)

use std::sync::LazyLock;

use crate::function::Function;
use crate::value::Value;

static IDENTITY: LazyLock<Function> =
    LazyLock::new(|| Function::unary("identity", |value| Ok(value.clone())));

/// Returns the first argument unchanged, or `undefined` if there is none.
///
/// Identity is the unit of pipelines: `pipe(identity, f)` and
/// `pipe(f, identity)` both behave like `f` on single arguments.
///
/// ```
/// use polycurry::compose::identity;
/// use polycurry::{values, Value};
///
/// assert_eq!(identity().call(&values![42])?, Value::from(42));
/// assert_eq!(identity().call(&[])?, Value::Undefined);
/// # Ok::<(), polycurry::CurryError>(())
/// ```
pub fn identity() -> Function {
    IDENTITY.clone()
}

/// Creates a function that always returns `value`, whatever it is called
/// with.
///
/// ```
/// use polycurry::compose::constant;
/// use polycurry::{values, Value};
///
/// let always_five = constant(5);
/// assert_eq!(always_five.call(&values!["ignored", 1])?, Value::from(5));
/// # Ok::<(), polycurry::CurryError>(())
/// ```
pub fn constant(value: impl Into<Value>) -> Function {
    let value = value.into();
    Function::native("constant", move |_| Ok(value.clone()))
}

/// Swaps the first two arguments before calling `function`.
///
/// Call records shorter than two arguments are passed through untouched, so
/// flipping a curried operation and calling it with one argument still
/// yields a continuation of the original operation.
///
/// # Laws
///
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
/// - **Double flip identity**: `flip(flip(f))(a, b) == f(a, b)`
///
/// ```
/// use polycurry::compose::flip;
/// use polycurry::{subtract, values, Value};
///
/// let subtract_from = flip(subtract());
/// assert_eq!(subtract_from.call(&values![2, 10])?, Value::from(8));
/// # Ok::<(), polycurry::CurryError>(())
/// ```
pub fn flip(function: Function) -> Function {
    let name = format!("flip({})", function.name());
    Function::native(name, move |arguments| {
        if arguments.len() < 2 {
            return function.call(arguments);
        }
        let mut swapped = arguments.to_vec();
        swapped.swap(0, 1);
        function.call(&swapped)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{add, subtract, values};

    #[test]
    fn test_identity_is_singleton() {
        assert_eq!(identity(), identity());
    }

    #[test]
    fn test_constant_with_no_arguments() {
        assert_eq!(constant("hello").call(&[]).unwrap(), Value::from("hello"));
    }

    #[test]
    fn test_double_flip() {
        let twice = flip(flip(subtract()));
        assert_eq!(twice.call(&values![10, 3]).unwrap(), Value::from(7));
    }

    #[test]
    fn test_flip_short_record_passes_through() {
        let flipped = flip(add());
        let partial = flipped.call(&values![1]).unwrap();
        assert_eq!(partial.call(&values![2]).unwrap(), Value::from(3));
    }

    #[test]
    fn test_flip_name() {
        assert_eq!(flip(subtract()).name(), "flip(subtract)");
    }
}
