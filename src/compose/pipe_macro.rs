//! The `pipe!` macro for building pipelines from expressions.

/// Builds a pipeline from stage expressions.
///
/// Every stage is converted with `Value::from`, so functions, curried
/// operations and their continuations can be mixed freely.
///
/// # Syntax
///
/// - `pipe!()` - the `pipe` compositor itself
/// - `pipe!(f)` - a single-stage pipeline
/// - `pipe!(f, g, h, ...)` - a pipeline computing `...h(g(f(args)))`
///
/// The expansion evaluates to `Result<Value, CurryError>`; it fails when a
/// stage is not a function.
///
/// # Examples
///
/// ```
/// use polycurry::{add, map, pipe, values, Value};
///
/// let increment_all = map().call(&values![add().call(&values![1])?])?;
/// let sum = polycurry::reduce().call(&values![add(), 0])?;
///
/// let pipeline = pipe!(increment_all, sum)?;
/// assert_eq!(pipeline.call(&values![vec![1, 2, 3]])?, Value::from(9));
/// # Ok::<(), polycurry::CurryError>(())
/// ```
///
/// ## The compositor itself
///
/// ```
/// use polycurry::{pipe, Value};
///
/// assert_eq!(pipe!()?, Value::from(polycurry::pipe()));
/// # Ok::<(), polycurry::CurryError>(())
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::pipe().call(&[])
    };

    ($($stage:expr),+ $(,)?) => {
        $crate::compose::pipe().call(&[$($crate::Value::from($stage)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Function, Value, values};

    #[test]
    fn test_pipe_macro_empty() {
        let compositor = pipe!().unwrap();
        assert_eq!(compositor, Value::from(crate::compose::pipe()));
    }

    #[test]
    fn test_pipe_macro_single() {
        let double = Function::unary("double", |value| {
            Ok(Value::from(value.expect_number("double", "value")? * 2.0))
        });
        let pipeline = pipe!(double).unwrap();
        assert_eq!(pipeline.call(&values![5]).unwrap(), Value::from(10));
    }

    #[test]
    fn test_pipe_macro_trailing_comma() {
        let pipeline = pipe!(crate::compose::identity(), crate::compose::identity(),).unwrap();
        assert_eq!(pipeline.call(&values!["x"]).unwrap(), Value::from("x"));
    }

    #[test]
    fn test_pipe_macro_rejects_non_function() {
        assert!(pipe!(1).is_err());
    }
}
