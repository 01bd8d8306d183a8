//! Inputs an axis value can be resolved from
//!
//! [`AxisInput`] is the closed set of input kinds accepted by
//! `Latitude::try_parse` / `Longitude::try_parse`. Most callers never name it
//! directly and rely on the `From` conversions instead.

use super::{Coordinate, Latitude, Longitude};
use std::borrow::Cow;

/// Values that may have a textual representation
///
/// Returning `None` means the value has no usable string form, which makes
/// resolution fail instead of guessing.
pub trait StringForm {
    fn string_form(&self) -> Option<String>;
}

impl StringForm for str {
    fn string_form(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl StringForm for String {
    fn string_form(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl StringForm for char {
    fn string_form(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl StringForm for bool {
    fn string_form(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl StringForm for i32 {
    fn string_form(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl StringForm for i64 {
    fn string_form(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl StringForm for u32 {
    fn string_form(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl StringForm for u64 {
    fn string_form(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl StringForm for f32 {
    fn string_form(&self) -> Option<String> {
        self.is_finite().then(|| self.to_string())
    }
}

impl StringForm for f64 {
    fn string_form(&self) -> Option<String> {
        self.is_finite().then(|| self.to_string())
    }
}

impl<T: StringForm> StringForm for Option<T> {
    fn string_form(&self) -> Option<String> {
        self.as_ref().and_then(StringForm::string_form)
    }
}

impl<T: StringForm + ?Sized> StringForm for &T {
    fn string_form(&self) -> Option<String> {
        (**self).string_form()
    }
}

/// Everything an axis of type `A` can be resolved from
pub enum AxisInput<'a, A> {
    /// Already the target axis type
    Axis(A),
    /// A coordinate pair; the matching member is extracted
    Coordinate(&'a Coordinate),
    /// Signed decimal degrees
    Decimal(f64),
    /// Text in any supported format
    Text(Cow<'a, str>),
    /// Any other value, parsed through its string form
    Other(Box<dyn StringForm + 'a>),
    /// Absent value
    Null,
}

impl<'a, A> AxisInput<'a, A> {
    /// Wrap an arbitrary value that has (or may have) a string form
    pub fn other(value: impl StringForm + 'a) -> Self {
        AxisInput::Other(Box::new(value))
    }

    /// Short name of the input kind, used in log output
    pub fn kind_name(&self) -> &'static str {
        match self {
            AxisInput::Axis(_) => "axis",
            AxisInput::Coordinate(_) => "coordinate",
            AxisInput::Decimal(_) => "decimal",
            AxisInput::Text(_) => "text",
            AxisInput::Other(_) => "other",
            AxisInput::Null => "null",
        }
    }
}

impl<'a> From<Latitude> for AxisInput<'a, Latitude> {
    fn from(value: Latitude) -> Self {
        AxisInput::Axis(value)
    }
}

impl<'a> From<&Latitude> for AxisInput<'a, Latitude> {
    fn from(value: &Latitude) -> Self {
        AxisInput::Axis(*value)
    }
}

impl<'a> From<Longitude> for AxisInput<'a, Longitude> {
    fn from(value: Longitude) -> Self {
        AxisInput::Axis(value)
    }
}

impl<'a> From<&Longitude> for AxisInput<'a, Longitude> {
    fn from(value: &Longitude) -> Self {
        AxisInput::Axis(*value)
    }
}

impl<'a, A> From<&'a Coordinate> for AxisInput<'a, A> {
    fn from(value: &'a Coordinate) -> Self {
        AxisInput::Coordinate(value)
    }
}

impl<'a, A> From<f64> for AxisInput<'a, A> {
    fn from(value: f64) -> Self {
        AxisInput::Decimal(value)
    }
}

impl<'a, A> From<&'a str> for AxisInput<'a, A> {
    fn from(value: &'a str) -> Self {
        AxisInput::Text(Cow::Borrowed(value))
    }
}

impl<'a, A> From<&'a String> for AxisInput<'a, A> {
    fn from(value: &'a String) -> Self {
        AxisInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl<'a, A> From<String> for AxisInput<'a, A> {
    fn from(value: String) -> Self {
        AxisInput::Text(Cow::Owned(value))
    }
}

impl<'a, A> From<i32> for AxisInput<'a, A> {
    fn from(value: i32) -> Self {
        AxisInput::other(value)
    }
}

impl<'a, A> From<i64> for AxisInput<'a, A> {
    fn from(value: i64) -> Self {
        AxisInput::other(value)
    }
}

impl<'a, A> From<u32> for AxisInput<'a, A> {
    fn from(value: u32) -> Self {
        AxisInput::other(value)
    }
}

impl<'a, A, T> From<Option<T>> for AxisInput<'a, A>
where
    T: Into<AxisInput<'a, A>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(AxisInput::Null, Into::into)
    }
}
