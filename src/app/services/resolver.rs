//! Resolve any accepted input kind to an axis value
//!
//! Inputs are checked in priority order: an existing axis value is returned
//! as is, a coordinate yields its matching member, a decimal goes through
//! the decimal conversion, and text (or anything with a string form) goes
//! through the format parser. `Null` and values without a string form fail.

use crate::app::models::{Axis, AxisInput};
use crate::app::services::format_parser;
use tracing::{debug, trace};

/// Resolve `input` to an axis value of type `A`, `None` on failure
pub fn resolve<A: Axis>(input: AxisInput<'_, A>) -> Option<A> {
    let axis = A::KIND;
    trace!(input_kind = input.kind_name(), axis = %axis, "resolving axis input");

    match input {
        AxisInput::Axis(value) => Some(value),
        AxisInput::Coordinate(coordinate) => Some(A::from_coordinate(coordinate)),
        AxisInput::Decimal(value) => match A::build_from_decimal(value) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                debug!(value, kind = %error.kind(), "Rejected decimal degrees: {}", error);
                None
            }
        },
        AxisInput::Text(text) => format_parser::try_parse_str(&text),
        AxisInput::Other(value) => match value.string_form() {
            Some(text) => format_parser::try_parse_str(&text),
            None => {
                trace!("input has no string form");
                None
            }
        },
        AxisInput::Null => None,
    }
}
