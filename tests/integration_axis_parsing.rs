//! Integration tests for axis parsing through the public API
//!
//! These tests cover the conversion laws (decimal round-trip, canonical text
//! round-trip) and the documented scenarios end to end.

use gps_axis::{
    Axis, AxisElement, AxisInput, AxisKind, Coordinate, Direction, GpsErrorKind, Latitude,
    Longitude,
};

/// Test that decimal degrees survive decimal -> DMS -> decimal
///
/// Purpose: Validate the conversion round-trip across both axes
/// Benefit: Catches drift in the floor/remainder arithmetic
#[test]
fn test_decimal_round_trip() {
    for step in -3600..=3600 {
        let latitude_decimal = f64::from(step) * 0.025;
        let latitude = Latitude::from_decimal(latitude_decimal).unwrap();
        assert!(
            (latitude.decimal() - latitude_decimal).abs() < 1e-6,
            "latitude {latitude_decimal} came back as {}",
            latitude.decimal()
        );

        let longitude_decimal = f64::from(step) * 0.05 + 0.000123;
        if longitude_decimal.abs() <= 180.0 {
            let longitude = Longitude::from_decimal(longitude_decimal).unwrap();
            assert!(
                (longitude.decimal() - longitude_decimal).abs() < 1e-6,
                "longitude {longitude_decimal} came back as {}",
                longitude.decimal()
            );
        }
    }
}

/// Test that canonical text parses back to identical canonical text
#[test]
fn test_canonical_text_round_trip() {
    for decimal in [0.0, 0.5, -0.0001, 12.999999, -45.123456, 89.9999999, -90.0, 90.0] {
        let latitude = Latitude::from_decimal(decimal).unwrap();
        let text = latitude.to_string();
        let reparsed = Latitude::try_parse_string(&text)
            .unwrap_or_else(|| panic!("canonical text {text} did not parse"));
        assert_eq!(reparsed.to_string(), text);
        assert_eq!(reparsed, latitude);
    }

    for decimal in [179.9999999, -179.5, 0.000001, -0.4614, 151.2093] {
        let longitude = Longitude::from_decimal(decimal).unwrap();
        let text = longitude.to_string();
        let reparsed = Longitude::try_parse_string(&text).unwrap();
        assert_eq!(reparsed.to_string(), text);
    }
}

#[test]
fn test_direction_axis_mismatch() {
    for direction in ["E", "W"] {
        let error = Latitude::new(direction, 10, 0, 0).unwrap_err();
        assert_eq!(error.kind(), GpsErrorKind::Direction);
    }
    for direction in ["N", "S"] {
        let error = Longitude::new(direction, 10, 0, 0).unwrap_err();
        assert_eq!(error.kind(), GpsErrorKind::Direction);
    }
}

#[test]
fn test_range_validation() {
    let kind = |result: Result<Latitude, gps_axis::GpsError>| result.unwrap_err().kind();
    assert_eq!(kind(Latitude::new("N", 91, 0, 0)), GpsErrorKind::Degrees);
    assert_eq!(kind(Latitude::new("N", 10, 60, 0)), GpsErrorKind::Minutes);
    assert_eq!(kind(Latitude::new("N", 10, 0, 60)), GpsErrorKind::Seconds);
    assert_eq!(
        Longitude::new("E", 181, 0, 0).unwrap_err().kind(),
        GpsErrorKind::Degrees
    );
}

#[test]
fn test_error_contract() {
    let error = Latitude::new("N", "ninety", 0, 0).unwrap_err();
    assert_eq!(error.kind(), GpsErrorKind::Degrees);
    assert_eq!(error.code(), 256);
    assert!(
        error
            .to_string()
            .starts_with("Invalid or unknown value for a geo coordinate \"degrees\" element/part!")
    );
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_equality_via_multiple_formats() {
    let latitude = Latitude::new("N", 40, 26, 46.302).unwrap();
    let parsed = Latitude::try_parse_string("40°26'46.302\"N").unwrap();
    assert_eq!(latitude, parsed);
    assert!(latitude.equals("40°26'46.302\"N"));
    assert!(latitude.equals(40.446195));
}

#[test]
fn test_decimal_to_dms_scenarios() {
    let latitude = Latitude::from_decimal(40.446195).unwrap();
    assert_eq!(latitude.direction(), Direction::North);
    assert_eq!(latitude.degrees(), 40);
    assert_eq!(latitude.minutes(), 26);
    assert!((latitude.seconds() - 46.302).abs() < 1e-3);

    let longitude = Longitude::from_decimal(-79.948862).unwrap();
    assert_eq!(longitude.direction(), Direction::West);
    assert_eq!(longitude.degrees(), 79);
    assert_eq!(longitude.minutes(), 56);
    assert!((longitude.seconds() - 55.903).abs() < 1e-3);

    let parts = AxisElement::decimal_to_dms(-79.948862, AxisKind::Longitude);
    assert_eq!(parts.direction, Direction::West);
    assert_eq!(parts.degrees, 79.0);
}

#[test]
fn test_malformed_input_is_none() {
    assert!(Latitude::try_parse_string("not a coordinate").is_none());
    assert!(Longitude::try_parse_string("not a coordinate").is_none());
    assert!(Latitude::try_parse(AxisInput::Null).is_none());
}

#[test]
fn test_try_parse_priority() {
    let coordinate = Coordinate::from_decimal(-33.8688, 151.2093).unwrap();

    let latitude = Latitude::try_parse(&coordinate).unwrap();
    assert_eq!(latitude.to_string(), "33°52'7.680\"S");

    let longitude = Longitude::try_parse(*coordinate.longitude()).unwrap();
    assert_eq!(longitude, *coordinate.longitude());

    let from_integer = Longitude::try_parse(151).unwrap();
    assert_eq!(from_integer.to_string(), "151°0'0.000\"E");

    assert_eq!(Latitude::KIND, AxisKind::Latitude);
    assert_eq!(Longitude::KIND, AxisKind::Longitude);
}

mod cli {
    use std::process::Command;

    fn gps_axis(args: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO_BIN_EXE_gps-axis"))
            .args(args)
            .env_remove("GPS_AXIS_DEFAULT_AXIS")
            .env_remove("GPS_AXIS_OUTPUT_FORMAT")
            .env_remove("GPS_AXIS_LOG_LEVEL")
            .output()
            .expect("failed to run gps-axis")
    }

    #[test]
    fn test_parse_json() {
        let output = gps_axis(&["parse", "N 40d26'46.302", "--format", "json"]);
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["canonical"], "40°26'46.302\"N");
        assert_eq!(report["axis"], "latitude");
    }

    #[test]
    fn test_compare_exit_codes() {
        let equal = gps_axis(&["compare", "40.446195", "40°26'46.302\"N", "--no-color"]);
        assert_eq!(equal.status.code(), Some(0));

        let different = gps_axis(&["compare", "40.446195", "40°26'46.302\"S", "--no-color"]);
        assert_eq!(different.status.code(), Some(2));
    }

    #[test]
    fn test_unparseable_input_fails() {
        let output = gps_axis(&["parse", "95°N"]);
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unable to parse '95°N' as a latitude"));
    }

    #[test]
    fn test_convert_negative_longitude() {
        let output = gps_axis(&[
            "convert",
            "-79.948862",
            "--axis",
            "longitude",
            "--format",
            "json",
        ]);
        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["canonical"], "79°56'55.903\"W");
    }
}
