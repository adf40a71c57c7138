//! Message rendering strategies
//!
//! The emission forms differ only in how their arguments become text:
//!
//! - plain: [`Concat`] writes the parts back to back, with a space between
//!   two adjacent parts only when neither is text
//! - `ln`: [`Spaced`] joins the parts with single spaces, [`Line`] adds the newline
//! - `f`: `format_args!` output is used as is
//! - `j`: [`to_json`] serializes one payload
//!
//! All of them implement [`Display`] lazily, so nothing is rendered for a
//! call that the severity gate rejects.

use super::error::Result;
use serde::Serialize;
use std::fmt::{self, Display};
use std::ops::Deref;

/// One argument of a plain-form call, tagged with whether it is text
#[derive(Clone, Copy)]
pub struct Operand<'a> {
    value: &'a dyn Display,
    is_text: bool,
}

impl<'a> Operand<'a> {
    pub fn text(value: &'a dyn Display) -> Self {
        Self {
            value,
            is_text: true,
        }
    }

    pub fn other(value: &'a dyn Display) -> Self {
        Self {
            value,
            is_text: false,
        }
    }

    pub fn is_text(&self) -> bool {
        self.is_text
    }
}

/// Fallback classification: any `Display` value is a non-text operand.
#[doc(hidden)]
pub struct AnyArg<'a, T: ?Sized>(pub &'a T);

impl<'a, T: Display> AnyArg<'a, T> {
    pub fn operand(&self) -> Operand<'a> {
        Operand::other(self.0)
    }
}

/// Text classification for string arguments.
///
/// `TextArg(AnyArg(&x)).operand()` resolves to the inherent method below when
/// `x` is a string type and falls through `Deref` to [`AnyArg`] otherwise.
#[doc(hidden)]
pub struct TextArg<'a, T: ?Sized>(pub AnyArg<'a, T>);

impl<'a, T: ?Sized> Deref for TextArg<'a, T> {
    type Target = AnyArg<'a, T>;

    fn deref(&self) -> &AnyArg<'a, T> {
        &self.0
    }
}

impl<'a, 'b> TextArg<'a, &'b str> {
    pub fn operand(&self) -> Operand<'a> {
        Operand::text(self.0 .0)
    }
}

impl<'a> TextArg<'a, String> {
    pub fn operand(&self) -> Operand<'a> {
        Operand::text(self.0 .0)
    }
}

impl<'a, 'b> TextArg<'a, &'b String> {
    pub fn operand(&self) -> Operand<'a> {
        Operand::text(self.0 .0)
    }
}

/// Parts written back to back; a space separates two adjacent non-text parts
pub struct Concat<'a>(pub &'a [Operand<'a>]);

impl Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev_is_text = true;
        for part in self.0 {
            if !prev_is_text && !part.is_text {
                f.write_str(" ")?;
            }
            write!(f, "{}", part.value)?;
            prev_is_text = part.is_text;
        }
        Ok(())
    }
}

/// Parts joined by a single space
pub struct Spaced<'a>(pub &'a [&'a dyn Display]);

impl Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// A message followed by a newline
pub struct Line<D>(pub D);

impl<D: Display> Display for Line<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0)
    }
}

/// Serialize a payload to compact JSON text
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
