//! String case utilities.
//!
//! Pure `&str -> String` transforms. They know nothing about currying; use
//! [`transform`] to turn one into a unary [`Function`] when it should run as
//! a pipeline stage.
//!
//! # Examples
//!
//! ```rust
//! use polycurry::strings::{str_invert_case, str_reverse};
//!
//! assert_eq!(str_reverse("abc"), "cba");
//! assert_eq!(str_invert_case("Hello"), "hELLO");
//! ```

use rand::Rng;

use crate::error::CurryError;
use crate::function::Function;
use crate::value::Value;

/// Reverses the characters of `value`.
pub fn str_reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Lower-cases `value`.
pub fn str_to_lower(value: &str) -> String {
    value.to_lowercase()
}

/// Upper-cases `value`.
pub fn str_to_upper(value: &str) -> String {
    value.to_uppercase()
}

/// Swaps the case of every cased character.
pub fn str_invert_case(value: &str) -> String {
    value
        .chars()
        .flat_map(|character| {
            let swapped: Vec<char> = if character.is_uppercase() {
                character.to_lowercase().collect()
            } else {
                character.to_uppercase().collect()
            };
            swapped
        })
        .collect()
}

/// Randomly upper- or lower-cases each character, using the thread RNG.
pub fn str_randomize(value: &str) -> String {
    str_randomize_with(value, &mut rand::thread_rng())
}

/// Randomly upper- or lower-cases each character, using `rng`.
///
/// ```rust
/// use polycurry::strings::str_randomize_with;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let randomized = str_randomize_with("hello", &mut rng);
/// assert_eq!(randomized.to_lowercase(), "hello");
/// ```
pub fn str_randomize_with<R: Rng>(value: &str, rng: &mut R) -> String {
    value
        .chars()
        .flat_map(|character| {
            let cased: Vec<char> = if rng.gen_bool(0.5) {
                character.to_uppercase().collect()
            } else {
                character.to_lowercase().collect()
            };
            cased
        })
        .collect()
}

/// The available transforms, for building pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrTransform {
    /// [`str_reverse`]
    Reverse,
    /// [`str_to_lower`]
    ToLower,
    /// [`str_to_upper`]
    ToUpper,
    /// [`str_randomize`]
    Randomize,
    /// [`str_invert_case`]
    InvertCase,
}

impl StrTransform {
    /// Name of the wrapped function.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reverse => "str_reverse",
            Self::ToLower => "str_to_lower",
            Self::ToUpper => "str_to_upper",
            Self::Randomize => "str_randomize",
            Self::InvertCase => "str_invert_case",
        }
    }

    /// Applies the transform.
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Reverse => str_reverse(value),
            Self::ToLower => str_to_lower(value),
            Self::ToUpper => str_to_upper(value),
            Self::Randomize => str_randomize(value),
            Self::InvertCase => str_invert_case(value),
        }
    }
}

/// Wraps a transform as a unary [`Function`].
///
/// The function fails with [`CurryError::InvalidInput`] when its first
/// argument is not a string.
///
/// ```rust
/// use polycurry::strings::{transform, StrTransform};
/// use polycurry::{pipe, values, Value};
///
/// let shout_backwards = pipe().call(&values![
///     transform(StrTransform::Reverse),
///     transform(StrTransform::ToUpper),
/// ])?;
/// assert_eq!(shout_backwards.call(&values!["abc"])?, Value::from("CBA"));
/// # Ok::<(), polycurry::CurryError>(())
/// ```
pub fn transform(kind: StrTransform) -> Function {
    let name = kind.name();
    Function::unary(name, move |value| {
        value
            .as_str()
            .map(|text| Value::String(kind.apply(text)))
            .ok_or_else(|| CurryError::invalid_input(name, "value", "string", value.kind()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rstest::rstest;

    #[rstest]
    #[case(StrTransform::Reverse, "Hello", "olleH")]
    #[case(StrTransform::ToLower, "HeLLo", "hello")]
    #[case(StrTransform::ToUpper, "HeLLo", "HELLO")]
    #[case(StrTransform::InvertCase, "HeLLo 1", "hEllO 1")]
    #[case(StrTransform::Reverse, "", "")]
    fn test_transforms(#[case] kind: StrTransform, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(kind.apply(input), expected);
    }

    #[test]
    fn test_randomize_only_changes_case() {
        let mut rng = SmallRng::seed_from_u64(42);
        let randomized = str_randomize_with("Functional Rust", &mut rng);
        assert_eq!(randomized.to_lowercase(), "functional rust");
    }

    #[test]
    fn test_randomize_is_deterministic_for_a_seed() {
        let first = str_randomize_with("abcdefgh", &mut SmallRng::seed_from_u64(1));
        let second = str_randomize_with("abcdefgh", &mut SmallRng::seed_from_u64(1));
        assert_eq!(first, second);
    }

    #[test]
    fn test_transform_rejects_non_string() {
        let error = transform(StrTransform::ToUpper).call(&[Value::from(1)]).unwrap_err();
        assert_eq!(
            error,
            CurryError::invalid_input("str_to_upper", "value", "string", "number")
        );
    }
}
