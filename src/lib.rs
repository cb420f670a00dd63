//! # polycurry
//!
//! Arity-polymorphic curried operations and pipelines over dynamic values.
//!
//! ## Overview
//!
//! Every operation exported here behaves according to how many arguments it
//! actually receives:
//!
//! - **no arguments**: it returns itself,
//! - **fewer than its arity**: it returns a continuation awaiting the rest,
//! - **its full arity**: it runs and returns the result (extra arguments are
//!   ignored).
//!
//! The operations are [`map`], [`filter`], [`reduce`], [`add`], [`subtract`]
//! and [`prop`]; [`curry`] builds new ones. [`pipe()`] composes functions
//! left to right into a reusable [`Pipeline`].
//!
//! Arguments travel as a call record `&[Value]`, so leaving an argument out
//! and passing [`Value::Undefined`] explicitly are different calls.
//!
//! ## Feature Flags
//!
//! - `strings`: string case utilities
//! - `stats`: descriptive statistics helpers
//! - `date`: date details and formatting
//! - `serde`: `Serialize`/`Deserialize` for [`date::DateDetails`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use polycurry::{add, map, pipe, reduce, values, Value};
//!
//! // map(add(10)) is a continuation waiting for the list.
//! let add_ten_to_all = map().call(&values![add().call(&values![10])?])?;
//! let total = reduce().call(&values![add(), 0])?;
//!
//! let pipeline = pipe!(add_ten_to_all, total)?;
//! assert_eq!(pipeline.call(&values![vec![1, 2, 3]])?, Value::from(36));
//! # Ok::<(), polycurry::CurryError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use polycurry::prelude::*;
///
/// assert_eq!(add().call(&values![1, 2])?, Value::from(3));
/// # Ok::<(), polycurry::CurryError>(())
/// ```
pub mod prelude {
    pub use crate::compose::{Pipeline, constant, flip, identity};
    pub use crate::curry::{Application, add, curry, filter, map, prop, reduce, subtract};
    pub use crate::error::CurryError;
    pub use crate::function::Function;
    pub use crate::value::{Object, Value};
    pub use crate::{pipe, values};
}

pub mod compose;
pub mod curry;
pub mod error;
pub mod function;
pub mod value;

#[cfg(feature = "date")]
pub mod date;

#[cfg(feature = "stats")]
pub mod stats;

#[cfg(feature = "strings")]
pub mod strings;

pub use compose::{Pipeline, pipe};
pub use curry::{Application, add, curry, filter, map, prop, reduce, subtract};
pub use error::{CurryError, InvalidInputError, NullReceiverError};
pub use function::Function;
pub use value::{Object, Value};
