//! The built-in curried operations.
//!
//! Each operation is created once per process and handed out by cloning, so
//! repeated calls to e.g. [`map()`] return the identical function.
//!
//! Callbacks receive the argument lists of the corresponding JavaScript array
//! methods: `(value, index, list)` for mappers and predicates and
//! `(accumulator, value, index, list)` for reducers. A curried callback simply
//! ignores what it does not need, so `map(add(1))` increments every element.

use std::sync::LazyLock;

use crate::curry::curry;
use crate::error::{CurryError, NullReceiverError};
use crate::function::Function;
use crate::value::Value;

static MAP: LazyLock<Function> = LazyLock::new(|| curry("map", 2, map_list));
static FILTER: LazyLock<Function> = LazyLock::new(|| curry("filter", 2, filter_list));
static REDUCE: LazyLock<Function> = LazyLock::new(|| curry("reduce", 3, reduce_list));
static ADD: LazyLock<Function> = LazyLock::new(|| curry("add", 2, add_numbers));
static SUBTRACT: LazyLock<Function> = LazyLock::new(|| curry("subtract", 2, subtract_numbers));
static PROP: LazyLock<Function> = LazyLock::new(|| curry("prop", 2, read_property));

/// `map(mapper, list)`: applies `mapper` to every element, preserving order.
///
/// ```rust
/// use polycurry::{map, Function, Value, values};
///
/// let double = Function::unary("double", |value| {
///     Ok(Value::from(value.expect_number("double", "value")? * 2.0))
/// });
/// let doubled = map().call(&values![double, vec![1, 2, 3]])?;
/// assert_eq!(doubled, Value::from(vec![2, 4, 6]));
/// # Ok::<(), polycurry::CurryError>(())
/// ```
pub fn map() -> Function {
    MAP.clone()
}

/// `filter(predicate, list)`: keeps the elements for which `predicate`
/// returns a truthy value, preserving their relative order.
pub fn filter() -> Function {
    FILTER.clone()
}

/// `reduce(reducer, initial, list)`: left fold starting from `initial`.
///
/// An empty list yields `initial` without calling the reducer.
pub fn reduce() -> Function {
    REDUCE.clone()
}

/// `add(a, b)`: numeric sum.
pub fn add() -> Function {
    ADD.clone()
}

/// `subtract(a, b)`: `a` minus `b`.
pub fn subtract() -> Function {
    SUBTRACT.clone()
}

/// `prop(object, name)`: reads the property `name` of `object`.
///
/// Missing properties read as [`Value::Undefined`]. Reading from
/// `undefined` or `null` fails with [`CurryError::NullReceiver`].
///
/// ```rust
/// use polycurry::{prop, Value, values};
///
/// let object: Value = [("a", Value::from(1))].into_iter().collect();
/// assert_eq!(prop().call(&values![object.clone(), "a"])?, Value::from(1));
/// assert_eq!(prop().call(&values![object])?.call(&values!["b"])?, Value::Undefined);
/// # Ok::<(), polycurry::CurryError>(())
/// ```
pub fn prop() -> Function {
    PROP.clone()
}

fn map_list(arguments: &[Value]) -> Result<Value, CurryError> {
    let mapper = arguments[0].expect_function("map", "mapper")?;
    let list = &arguments[1];
    list.expect_list("map", "input")?
        .iter()
        .enumerate()
        .map(|(index, value)| mapper.call(&[value.clone(), Value::from(index), list.clone()]))
        .collect()
}

fn filter_list(arguments: &[Value]) -> Result<Value, CurryError> {
    let predicate = arguments[0].expect_function("filter", "predicate")?;
    let list = &arguments[1];
    let mut kept = Vec::new();
    for (index, value) in list.expect_list("filter", "input")?.iter().enumerate() {
        if predicate
            .call(&[value.clone(), Value::from(index), list.clone()])?
            .is_truthy()
        {
            kept.push(value.clone());
        }
    }
    Ok(Value::from(kept))
}

fn reduce_list(arguments: &[Value]) -> Result<Value, CurryError> {
    let reducer = arguments[0].expect_function("reduce", "reducer")?;
    let list = &arguments[2];
    list.expect_list("reduce", "input")?
        .iter()
        .enumerate()
        .try_fold(arguments[1].clone(), |accumulator, (index, value)| {
            reducer.call(&[accumulator, value.clone(), Value::from(index), list.clone()])
        })
}

fn add_numbers(arguments: &[Value]) -> Result<Value, CurryError> {
    let first = arguments[0].expect_number("add", "a")?;
    let second = arguments[1].expect_number("add", "b")?;
    Ok(Value::Number(first + second))
}

fn subtract_numbers(arguments: &[Value]) -> Result<Value, CurryError> {
    let first = arguments[0].expect_number("subtract", "a")?;
    let second = arguments[1].expect_number("subtract", "b")?;
    Ok(Value::Number(first - second))
}

fn read_property(arguments: &[Value]) -> Result<Value, CurryError> {
    let receiver = &arguments[0];
    if receiver.is_nullish() {
        return Err(NullReceiverError {
            operation: "prop",
            receiver: receiver.kind(),
        }
        .into());
    }
    match &arguments[1] {
        Value::String(name) => Ok(receiver.property(name)),
        number @ Value::Number(_) => Ok(receiver.property(&number.to_string())),
        other => Err(CurryError::invalid_input(
            "prop",
            "name",
            "string or number",
            other.kind(),
        )),
    }
}
