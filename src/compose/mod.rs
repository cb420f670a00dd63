//! Function composition.
//!
//! This module provides the pipe compositor and a few combinators that make
//! convenient pipeline stages.
//!
//! # Overview
//!
//! - [`pipe()`]: builds a [`Pipeline`] from stage functions
//! - [`pipe!`](crate::pipe!): the same from arbitrary `Into<Value>` expressions
//! - [`identity`], [`constant`], [`flip`]: combinators
//!
//! # Pipeline
//!
//! A pipeline reads left to right:
//!
//! ```text
//! pipe(f, g, h)(a, b) = h(g(f(a, b)))
//! ```
//!
//! Only the first stage may take several arguments. Every later stage
//! receives the previous stage's single result, and results are never spread
//! across several arguments. The number of stages is unbounded.
//!
//! # Examples
//!
//! ```
//! use polycurry::{filter, map, pipe, values, Function, Value};
//!
//! let is_even = Function::unary("is_even", |value| {
//!     Ok(Value::from(value.expect_number("is_even", "value")? % 2.0 == 0.0))
//! });
//! let square = Function::unary("square", |value| {
//!     let number = value.expect_number("square", "value")?;
//!     Ok(Value::from(number * number))
//! });
//!
//! let even_squares = pipe().call(&values![
//!     filter().call(&values![is_even])?,
//!     map().call(&values![square])?,
//! ])?;
//! assert_eq!(
//!     even_squares.call(&values![vec![1, 2, 3, 4]])?,
//!     Value::from(vec![4, 16])
//! );
//! # Ok::<(), polycurry::CurryError>(())
//! ```
//!
//! # Laws
//!
//! - **Sequencing**: `pipe(f, g, h)(x) == h(g(f(x)))`
//! - **Self identity**: `pipe()` is `pipe`
//! - **Left/right identity**: `pipe(identity, f)(x) == pipe(f, identity)(x) == f(x)`

mod pipe_macro;
mod pipeline;
mod utils;

pub use pipeline::{Compositor, Pipeline};
pub use utils::{constant, flip, identity};

use crate::function::Function;

/// The `pipe` compositor.
///
/// Calling it with no arguments returns itself; calling it with stages
/// returns a pipeline. Every stage must be a function.
pub const fn pipe() -> Function {
    Function::Compositor(Compositor)
}
