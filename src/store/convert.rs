use std::fmt::Display;

use crate::error::{Result, StoreError};

use super::{Profile, Store};

/// ### -> `Convertible Trait`.
///
/// Marks element types that support numeric and textual conversion, and
/// gates [`Store::to_int`], [`Store::to_double`], [`Store::to_char`] and
/// [`Store::average`]. Element types without an implementation are rejected
/// at compile time.
///
/// ### -> `Provided Implementations`
/// - **Integers and floats**: `as` casts. Float to int saturates and maps `NaN` to `0`.
/// - **`bool`**: `0` / `1`.
/// - **`char`**: its Unicode scalar value.
/// - **`String` / `str`**: parsed from the longest valid prefix after leading
///   whitespace. When nothing parses the element falls back to `0` / `0.0`; a
///   bad element never fails the whole conversion.
/// - **`&T`** for any `T: Convertible`.
pub trait Convertible {
    fn to_int(&self) -> i32;

    fn to_double(&self) -> f64;

    fn to_char(&self) -> char;
}

fn char_from_code(code: u32) -> char {
    char::from_u32(code).unwrap_or('\0')
}

macro_rules! convertible_integer {
    ($($kind:ty),* $(,)?) => {
        $(
            impl Convertible for $kind {
                #[inline]
                fn to_int(&self) -> i32 {
                    *self as i32
                }

                #[inline]
                fn to_double(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn to_char(&self) -> char {
                    u32::try_from(*self).map_or('\0', char_from_code)
                }
            }
        )*
    };
}

macro_rules! convertible_float {
    ($($kind:ty),* $(,)?) => {
        $(
            impl Convertible for $kind {
                #[inline]
                fn to_int(&self) -> i32 {
                    *self as i32
                }

                #[inline]
                fn to_double(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn to_char(&self) -> char {
                    if *self < 0.0 || self.is_nan() {
                        return '\0';
                    }
                    char_from_code(*self as u32)
                }
            }
        )*
    };
}

convertible_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
convertible_float!(f32, f64);

impl Convertible for bool {
    fn to_int(&self) -> i32 {
        i32::from(*self)
    }

    fn to_double(&self) -> f64 {
        f64::from(u8::from(*self))
    }

    fn to_char(&self) -> char {
        char_from_code(u32::from(*self))
    }
}

impl Convertible for char {
    fn to_int(&self) -> i32 {
        *self as i32
    }

    fn to_double(&self) -> f64 {
        f64::from(u32::from(*self))
    }

    fn to_char(&self) -> char {
        *self
    }
}

impl Convertible for str {
    fn to_int(&self) -> i32 {
        parse_int_prefix(self).unwrap_or_else(|| {
            tracing::debug!(input = self, conversion = "int", "unparsable element, falling back to 0");
            0
        })
    }

    fn to_double(&self) -> f64 {
        parse_double_prefix(self).unwrap_or_else(|| {
            tracing::debug!(input = self, conversion = "double", "unparsable element, falling back to 0.0");
            0.0
        })
    }

    fn to_char(&self) -> char {
        self.chars().next().unwrap_or('\0')
    }
}

impl Convertible for String {
    fn to_int(&self) -> i32 {
        self.as_str().to_int()
    }

    fn to_double(&self) -> f64 {
        self.as_str().to_double()
    }

    fn to_char(&self) -> char {
        self.as_str().to_char()
    }
}

impl <T: Convertible + ?Sized> Convertible for &T {
    fn to_int(&self) -> i32 {
        (**self).to_int()
    }

    fn to_double(&self) -> f64 {
        (**self).to_double()
    }

    fn to_char(&self) -> char {
        (**self).to_char()
    }
}

fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(bytes: &[u8], mut cursor: usize) -> usize {
    while cursor < bytes.len() && is_c_space(bytes[cursor]) {
        cursor += 1;
    }
    cursor
}

fn skip_sign(bytes: &[u8], cursor: usize) -> usize {
    match bytes.get(cursor) {
        Some(b'+') | Some(b'-') => cursor + 1,
        _ => cursor,
    }
}

fn skip_digits(bytes: &[u8], mut cursor: usize) -> usize {
    while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
        cursor += 1;
    }
    cursor
}

/// Parses the longest `[+-]digits` prefix after leading whitespace.
/// `None` when there are no digits or the value does not fit an `i32`.
pub(crate) fn parse_int_prefix(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let start = skip_space(bytes, 0);
    let digits = skip_sign(bytes, start);
    let end = skip_digits(bytes, digits);

    if end == digits {
        return None;
    }

    text[start..end].parse().ok()
}

/// Parses the longest decimal prefix (`[+-]digits[.digits][e[+-]digits]`) or an
/// `inf` / `infinity` / `nan` literal after leading whitespace.
/// `None` when nothing parses or a finite literal overflows `f64`.
pub(crate) fn parse_double_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = skip_space(bytes, 0);
    let body = skip_sign(bytes, start);

    let rest = text[body..].to_ascii_lowercase();
    for literal in ["infinity", "inf", "nan"] {
        if rest.starts_with(literal) {
            return text[start..body + literal.len()].parse().ok();
        }
    }

    let integral = skip_digits(bytes, body);
    let mut end = integral;
    let mut digit_count = integral - body;

    if bytes.get(end) == Some(&b'.') {
        let fraction = skip_digits(bytes, end + 1);
        digit_count += fraction - (end + 1);
        end = fraction;
    }

    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exponent = skip_sign(bytes, end + 1);
        let exponent_end = skip_digits(bytes, exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    let value: f64 = text[start..end].parse().ok()?;
    value.is_finite().then_some(value)
}

// Conversions
impl <T, P: Profile> Store<T, P> {
    fn convert<U, F>(&self, target: &'static str, function: F) -> Result<Store<U, P>>
    where
        F: FnMut(&T) -> U,
    {
        if self.length_of() == 0 {
            return Err(StoreError::Runtime(format!("cannot convert an empty store to {target}")));
        }

        Ok(self.map(function))
    }

    /// A new store of `i32`, one per element, in order.
    ///
    /// Fails with `StoreError::Runtime` when the store is empty.
    ///
    /// ```
    /// use advance_store::prelude::*;
    ///
    /// # fn main() -> Result<(), StoreError> {
    /// let texts: Store<String> = store!["65".to_string(), " -7px".to_string(), "abc".to_string()];
    /// assert_eq!(texts.to_int()?.as_slice(), &[65, -7, 0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_int(&self) -> P::Outcome<Store<i32, P>>
    where
        T: Convertible,
    {
        P::settle(self.convert("int", Convertible::to_int))
    }

    /// A new store of `f64`, one per element, in order.
    pub fn to_double(&self) -> P::Outcome<Store<f64, P>>
    where
        T: Convertible,
    {
        P::settle(self.convert("double", Convertible::to_double))
    }

    /// A new store of `char`, one per element, in order.
    ///
    /// Text contributes its first character (`'\0'` when empty); numbers are
    /// read as Unicode scalar values, invalid ones become `'\0'`.
    pub fn to_char(&self) -> P::Outcome<Store<char, P>>
    where
        T: Convertible,
    {
        P::settle(self.convert("char", Convertible::to_char))
    }

    /// A new store holding each element's `Display` rendering.
    ///
    /// Numbers render in canonical decimal form, a `char` becomes a
    /// one-character string and a `String` passes through unchanged.
    pub fn to_strings(&self) -> P::Outcome<Store<String, P>>
    where
        T: Display,
    {
        P::settle(self.convert("string", |element| element.to_string()))
    }
}
