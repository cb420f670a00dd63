//! Property-based tests for the currying and pipeline laws.
//!
//! ## Curry Laws
//! - **Self Identity**: `op()` is `op`, for operations and continuations
//! - **Associativity**: `op(args1)(args2) == op(args1 ++ args2)` for every split
//! - **Truncation**: `op(args ++ extra) == op(args)`
//!
//! ## Pipe Laws
//! - **Sequencing**: `pipe(f, g, h)(x) == h(g(f(x)))`
//! - **Identity**: `pipe(identity, f)(x) == pipe(f, identity)(x) == f(x)`
//! - **Self Identity**: `pipe()` is `pipe`

use polycurry::compose::{flip, identity};
use polycurry::{Function, Value, add, curry, pipe, reduce, subtract, values};
use proptest::prelude::*;

fn number() -> impl Strategy<Value = f64> {
    (-1_000_000i32..1_000_000).prop_map(f64::from)
}

fn offset(amount: f64) -> Function {
    Function::unary("offset", move |value| {
        Ok(Value::from(value.expect_number("offset", "value")? + amount))
    })
}

fn scale(factor: f64) -> Function {
    Function::unary("scale", move |value| {
        Ok(Value::from(value.expect_number("scale", "value")? * factor))
    })
}

fn listing() -> Function {
    curry("listing", 3, |arguments| Ok(Value::from(arguments.to_vec())))
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Associativity for binary operations: op(a)(b) == op(a, b)
    #[test]
    fn prop_binary_associativity(a in number(), b in number()) {
        for operation in [add(), subtract()] {
            let direct = operation.call(&values![a, b]).unwrap();
            let stepwise = operation.call(&values![a]).unwrap().call(&values![b]).unwrap();
            prop_assert_eq!(direct, stepwise);
        }
    }

    /// Associativity for every split of a ternary operation.
    #[test]
    fn prop_ternary_associativity(a in number(), b in number(), c in number()) {
        let operation = listing();
        let direct = operation.call(&values![a, b, c]).unwrap();

        prop_assert_eq!(
            &operation.call(&values![a]).unwrap().call(&values![b, c]).unwrap(),
            &direct
        );
        prop_assert_eq!(
            &operation.call(&values![a, b]).unwrap().call(&values![c]).unwrap(),
            &direct
        );
        prop_assert_eq!(
            &operation
                .call(&values![a]).unwrap()
                .call(&values![b]).unwrap()
                .call(&values![c]).unwrap(),
            &direct
        );
    }

    /// Self identity holds at every partial stage, however it was reached.
    #[test]
    fn prop_continuation_self_identity(a in number(), b in number()) {
        let continuation = listing().call(&values![a, b]).unwrap();
        prop_assert_eq!(continuation.call(&[]).unwrap(), continuation.clone());

        let nested = listing().call(&values![a]).unwrap().call(&values![b]).unwrap();
        prop_assert_eq!(nested.call(&[]).unwrap(), nested.clone());
    }

    /// Excess arguments are ignored.
    #[test]
    fn prop_excess_arguments_truncated(a in number(), b in number(), extra in number()) {
        prop_assert_eq!(
            add().call(&values![a, b, extra]).unwrap(),
            add().call(&values![a, b]).unwrap()
        );
    }

    /// reduce(add, initial, xs) equals the plain sum.
    #[test]
    fn prop_reduce_add_is_sum(
        initial in number(),
        numbers in prop::collection::vec(number(), 0..20)
    ) {
        let expected = numbers.iter().fold(initial, |total, value| total + value);
        let result = reduce()
            .call(&values![add(), initial, numbers])
            .unwrap();
        prop_assert_eq!(result, Value::from(expected));
    }

    /// Flip definition: flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_definition(a in number(), b in number()) {
        prop_assert_eq!(
            flip(subtract()).call(&values![a, b]).unwrap(),
            subtract().call(&values![b, a]).unwrap()
        );
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Sequencing: pipe(f, g, h)(x) == h(g(f(x)))
    #[test]
    fn prop_pipe_sequencing(x in number(), amount in number(), factor in -100i32..100) {
        let f = offset(amount);
        let g = scale(f64::from(factor));
        let h = subtract().call(&values![1_000]).unwrap();

        let pipeline = pipe().call(&values![f.clone(), g.clone(), h.clone()]).unwrap();
        let nested = h.call(&[g.call(&[f.call(&values![x]).unwrap()]).unwrap()]).unwrap();

        prop_assert_eq!(pipeline.call(&values![x]).unwrap(), nested);
    }

    /// Left and right identity.
    #[test]
    fn prop_pipe_identity(x in number(), amount in number()) {
        let f = offset(amount);
        let expected = f.call(&values![x]).unwrap();

        let left = pipe().call(&values![identity(), f.clone()]).unwrap();
        let right = pipe().call(&values![f, identity()]).unwrap();

        prop_assert_eq!(left.call(&values![x]).unwrap(), expected.clone());
        prop_assert_eq!(right.call(&values![x]).unwrap(), expected);
    }

    /// A pipeline gives the same answer however often it runs.
    #[test]
    fn prop_pipeline_reusable(inputs in prop::collection::vec(number(), 1..10)) {
        let pipeline = pipe().call(&values![offset(1.0), scale(3.0)]).unwrap();
        for input in inputs {
            prop_assert_eq!(
                pipeline.call(&values![input]).unwrap(),
                Value::from((input + 1.0) * 3.0)
            );
        }
    }
}

#[test]
fn test_pipe_self_identity() {
    let compositor = pipe();
    assert_eq!(compositor.call(&[]).unwrap(), Value::from(compositor));
}
