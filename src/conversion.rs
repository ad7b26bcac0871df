//! Unit conversion and formatting helpers
//!
//! Raw stream integers are scaled here, and coordinates are rendered in the
//! nautical degree/minute notation used for crossing labels.

use crate::geodesic::Axis;

/// Raw coordinates are transmitted in units of 1e-5 degree
pub const COORD_SCALE: f64 = 100_000.0;

/// Divisor of the absolute auxiliary channel value
pub const AUX_ABSOLUTE_SCALE: f64 = 21_000_000.0;

/// Divisor of the delta-encoded auxiliary channel value
pub const AUX_DELTA_SCALE: f64 = 32_000.0;

/// Convert an accumulated raw coordinate to decimal degrees
pub fn convert_coordinate(raw_value: i64) -> f64 {
    raw_value as f64 / COORD_SCALE
}

/// Convert an absolute auxiliary channel value
pub fn convert_aux_absolute(raw_value: i32) -> f64 {
    raw_value as f64 / AUX_ABSOLUTE_SCALE
}

/// Convert a delta auxiliary channel value
pub fn convert_aux_delta(raw_value: i16) -> f64 {
    raw_value as f64 / AUX_DELTA_SCALE
}

/// Precision of the minutes part in [`format_coordinate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinuteFormat {
    /// Degrees only
    #[default]
    None,
    /// Whole minutes
    Whole,
    /// Minutes with one decimal
    Tenths,
}

/// Format a coordinate like `"045° 30W"` or `"07° 12.5N"`
///
/// Degrees are zero-padded to two digits for latitudes and three for
/// longitudes. Zero carries no hemisphere suffix, so a degrees-only zero
/// ends in the separating space (`"00° "`).
pub fn format_coordinate(value: f64, axis: Axis, minutes: MinuteFormat) -> String {
    let abs = value.abs();
    let mut degrees = abs.floor();
    let mut mins = (abs - degrees) * 60.0;

    let decimals = match minutes {
        MinuteFormat::Tenths => 1,
        _ => 0,
    };
    let factor = 10f64.powi(decimals);
    mins = (mins * factor).round() / factor;
    if mins >= 60.0 {
        degrees += 1.0;
        mins = 0.0;
    }

    let (width, hemisphere) = match axis {
        Axis::Latitude => (2, if value < 0.0 { 'S' } else { 'N' }),
        Axis::Longitude => (3, if value < 0.0 { 'W' } else { 'E' }),
    };

    let mut s = format!("{:0width$}° ", degrees as u32, width = width);
    match minutes {
        MinuteFormat::None => {}
        MinuteFormat::Whole => s.push_str(&format!("{:02.0}", mins)),
        MinuteFormat::Tenths => s.push_str(&format!("{:04.1}", mins)),
    }
    if value != 0.0 {
        s.push(hemisphere);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_conversions() {
        assert_eq!(convert_coordinate(1_000_000), 10.0);
        assert!((convert_coordinate(999_990) - 9.9999).abs() < 1e-12);
        assert!((convert_coordinate(-2_000_020) + 20.0002).abs() < 1e-12);
        assert_eq!(convert_aux_absolute(21_000_000), 1.0);
        assert_eq!(convert_aux_delta(16_000), 0.5);
        assert_eq!(convert_aux_delta(-32_000), -1.0);
    }

    #[test]
    fn test_format_degrees_only() {
        assert_eq!(format_coordinate(0.0, Axis::Latitude, MinuteFormat::None), "00° ");
        assert_eq!(format_coordinate(0.0, Axis::Longitude, MinuteFormat::None), "000° ");
        assert_eq!(format_coordinate(180.0, Axis::Longitude, MinuteFormat::None), "180° E");
        assert_eq!(format_coordinate(-5.0, Axis::Latitude, MinuteFormat::None), "05° S");
        assert_eq!(format_coordinate(-45.9, Axis::Longitude, MinuteFormat::None), "045° W");
    }

    #[test]
    fn test_format_with_minutes() {
        assert_eq!(format_coordinate(-33.5, Axis::Latitude, MinuteFormat::Whole), "33° 30S");
        assert_eq!(format_coordinate(5.25, Axis::Longitude, MinuteFormat::Tenths), "005° 15.0E");
        assert_eq!(format_coordinate(7.1, Axis::Latitude, MinuteFormat::Whole), "07° 06N");
        assert_eq!(format_coordinate(7.09, Axis::Latitude, MinuteFormat::Tenths), "07° 05.4N");
    }

    #[test]
    fn test_format_minutes_carry_into_degrees() {
        assert_eq!(format_coordinate(12.999, Axis::Latitude, MinuteFormat::Whole), "13° 00N");
        assert_eq!(format_coordinate(0.0, Axis::Latitude, MinuteFormat::Whole), "00° 00");
    }
}
