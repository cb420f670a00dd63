//! The dynamic value model shared by every curried operation.
//!
//! Curried operations accept arguments of any shape and dispatch on how many
//! were supplied, so they work over a single dynamic [`Value`] type instead of
//! per-call generics. A call record is a plain `&[Value]`; its length is the
//! number of arguments actually passed, which keeps an omitted argument
//! distinguishable from an explicit [`Value::Undefined`].
//!
//! # Examples
//!
//! ```rust
//! use polycurry::{Value, values};
//!
//! let list = Value::from(vec![1, 2, 3]);
//! assert_eq!(list.property("length"), Value::from(3));
//! assert!(list.is_truthy());
//!
//! let args = values![1, "two", true];
//! assert_eq!(args.len(), 3);
//! ```

mod convert;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::CurryError;
use crate::function::Function;

/// Property bag backing [`Value::Object`].
pub type Object = BTreeMap<String, Value>;

/// A dynamically typed value.
///
/// Functions compare by identity; every other variant compares structurally.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The missing value: absent properties and unset results.
    #[default]
    Undefined,
    /// An explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence. Shared, so callbacks can receive the whole list
    /// without copying it.
    List(Arc<[Value]>),
    /// A string-keyed property bag.
    Object(Object),
    /// A callable.
    Function(Function),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for [`Value::Undefined`] and [`Value::Null`].
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// JavaScript-style truthiness.
    ///
    /// `undefined`, `null`, `false`, `0`, `NaN` and the empty string are
    /// falsy; everything else, including empty lists and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::String(value) => !value.is_empty(),
            Self::List(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Returns the number if this is a [`Value::Number`].
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(values) => Some(&values[..]),
            _ => None,
        }
    }

    /// Returns the properties if this is a [`Value::Object`].
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the callable if this is a [`Value::Function`].
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Calls this value with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::InvalidInput`] when the value is not a function,
    /// and whatever the function itself returns otherwise.
    ///
    /// ```rust
    /// use polycurry::{add, values, Value};
    ///
    /// let add_two = Value::from(add()).call(&values![2])?;
    /// assert_eq!(add_two.call(&values![3])?, Value::from(5));
    /// # Ok::<(), polycurry::CurryError>(())
    /// ```
    pub fn call(&self, arguments: &[Self]) -> Result<Self, CurryError> {
        self.expect_function("call", "callee")?.call(arguments)
    }

    /// Borrows the callable or reports `parameter` of `operation` as invalid.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::InvalidInput`] when the value is not a function.
    pub fn expect_function(
        &self,
        operation: &'static str,
        parameter: &'static str,
    ) -> Result<&Function, CurryError> {
        self.as_function().ok_or_else(|| {
            CurryError::invalid_input(operation, parameter, "function", self.kind())
        })
    }

    /// Borrows the elements or reports `parameter` of `operation` as invalid.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::InvalidInput`] when the value is not a list.
    pub fn expect_list(
        &self,
        operation: &'static str,
        parameter: &'static str,
    ) -> Result<&[Self], CurryError> {
        self.as_list()
            .ok_or_else(|| CurryError::invalid_input(operation, parameter, "list", self.kind()))
    }

    /// Reads the number or reports `parameter` of `operation` as invalid.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::InvalidInput`] when the value is not a number.
    pub fn expect_number(
        &self,
        operation: &'static str,
        parameter: &'static str,
    ) -> Result<f64, CurryError> {
        self.as_number()
            .ok_or_else(|| CurryError::invalid_input(operation, parameter, "number", self.kind()))
    }

    /// Looks up a property by name.
    ///
    /// Missing properties, and any lookup on a nullish receiver, yield
    /// [`Value::Undefined`]. Lists and strings expose `length` and integer
    /// indices; functions expose `name`.
    pub fn property(&self, name: &str) -> Self {
        match self {
            Self::Object(object) => object.get(name).cloned().unwrap_or_default(),
            Self::List(values) => match name {
                "length" => Self::from(values.len()),
                _ => index_of(name)
                    .and_then(|index| values.get(index))
                    .cloned()
                    .unwrap_or_default(),
            },
            Self::String(text) => match name {
                "length" => Self::from(text.chars().count()),
                _ => index_of(name)
                    .and_then(|index| text.chars().nth(index))
                    .map(|character| Self::String(character.to_string()))
                    .unwrap_or_default(),
            },
            Self::Function(function) if name == "name" => Self::String(function.name().to_owned()),
            _ => Self::Undefined,
        }
    }
}

/// Parses a canonical array index: `"0"`, `"12"`, but not `"01"` or `"-1"`.
fn index_of(name: &str) -> Option<usize> {
    name.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == name)
}

fn write_number(formatter: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_infinite() {
        let sign = if number.is_sign_negative() { "-" } else { "" };
        write!(formatter, "{sign}Infinity")
    } else {
        write!(formatter, "{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Number(value) => write_number(formatter, *value),
            Self::String(value) => formatter.write_str(value),
            Self::List(values) => {
                formatter.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                formatter.write_str("]")
            }
            Self::Object(object) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in object.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

/// Builds a call record (an array of [`Value`]s) from convertible expressions.
///
/// ```rust
/// use polycurry::{values, Value};
///
/// let record = values![1, "a", Value::Undefined];
/// assert_eq!(record[1], Value::from("a"));
///
/// let empty = values![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! values {
    () => {{
        let record: [$crate::Value; 0] = [];
        record
    }};
    ($($argument:expr),+ $(,)?) => {
        [$($crate::Value::from($argument)),+]
    };
}
