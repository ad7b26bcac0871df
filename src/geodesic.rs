//! Great-circle primitives on the reference sphere
//!
//! Distances are in nautical miles (one arc-minute of central angle) and
//! bearings in degrees clockwise from true north.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anything that sits at a geographic position in decimal degrees
pub trait GeoPoint {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

/// Plain latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint for Coordinate {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

/// Latitude or longitude dimension of a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn of<P: GeoPoint + ?Sized>(self, point: &P) -> f64 {
        match self {
            Axis::Latitude => point.lat(),
            Axis::Longitude => point.lon(),
        }
    }
}

/// Bearing and distance from one position to another
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Leg {
    pub bearing: f64,
    pub dist: f64,
}

/// Calculate bearing and orthodrome distance from `src` to `dst`
///
/// The bearing uses a mean-latitude plane approximation, the distance the
/// spherical law of cosines. Identical positions yield a zero leg.
pub fn coord_diff<S, D>(src: &S, dst: &D) -> Leg
where
    S: GeoPoint + ?Sized,
    D: GeoPoint + ?Sized,
{
    let (lat1, lon1, lat2, lon2) = (src.lat(), src.lon(), dst.lat(), dst.lon());

    // acos() is not safe against round-off at exactly 1.0
    if lat1 == lat2 && lon1 == lon2 {
        return Leg::default();
    }

    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1) * ((lat1 + lat2) / 2.0).to_radians().cos();
    let bearing = normalize_bearing(dlon.atan2(dlat).to_degrees());

    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let cos_angle =
        lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon2 - lon1).to_radians().cos();
    let dist = 60.0 * cos_angle.clamp(-1.0, 1.0).acos().to_degrees();

    Leg { bearing, dist }
}

/// Reduce a bearing into [0, 360)
pub fn normalize_bearing(bearing: f64) -> f64 {
    let b = bearing.rem_euclid(360.0);
    // rem_euclid rounds tiny negative values up to exactly 360
    if b >= 360.0 {
        b - 360.0
    } else {
        b
    }
}

/// Signed difference `a - b` folded into (-180, 180]
pub fn diff_bearing(a: f64, b: f64) -> f64 {
    let d = normalize_bearing(a - b);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// True if `bearing` deviates less than 90 degrees to either side of `reference`
pub fn is_ahead(bearing: f64, reference: f64) -> bool {
    diff_bearing(bearing, reference).abs() < 90.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_coord_diff_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);

        let north = coord_diff(&origin, &Coordinate::new(1.0, 0.0));
        assert!((north.bearing - 0.0).abs() < EPS);
        assert!((north.dist - 60.0).abs() < EPS);

        let east = coord_diff(&origin, &Coordinate::new(0.0, 1.0));
        assert!((east.bearing - 90.0).abs() < EPS);
        assert!((east.dist - 60.0).abs() < EPS);

        let south = coord_diff(&origin, &Coordinate::new(-1.0, 0.0));
        assert!((south.bearing - 180.0).abs() < EPS);

        let west = coord_diff(&origin, &Coordinate::new(0.0, -1.0));
        assert!((west.bearing - 270.0).abs() < EPS);
    }

    #[test]
    fn test_coord_diff_same_point_is_zero() {
        for p in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(47.123456, -12.5),
            Coordinate::new(-89.99999, 179.99999),
        ] {
            assert_eq!(coord_diff(&p, &p), Leg::default());
        }
    }

    #[test]
    fn test_coord_diff_distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(43.0, -9.5), Coordinate::new(-34.4, 18.5)),
            (Coordinate::new(-50.0, 170.0), Coordinate::new(-52.0, -175.0)),
            (Coordinate::new(10.0, 20.0), Coordinate::new(9.9999, 20.0002)),
        ];
        for (a, b) in pairs {
            let ab = coord_diff(&a, &b).dist;
            let ba = coord_diff(&b, &a).dist;
            assert!((ab - ba).abs() < 1e-9, "{ab} != {ba}");
        }
    }

    #[test]
    fn test_normalize_bearing_range() {
        assert_eq!(normalize_bearing(-90.0), 270.0);
        assert_eq!(normalize_bearing(720.0), 0.0);
        assert_eq!(normalize_bearing(359.5), 359.5);
        for x in [-1e-20, -720.25, 1e6, -0.0, 360.0, 12345.678] {
            let b = normalize_bearing(x);
            assert!((0.0..360.0).contains(&b), "{x} -> {b}");
        }
    }

    #[test]
    fn test_diff_bearing_range() {
        assert_eq!(diff_bearing(10.0, 350.0), 20.0);
        assert_eq!(diff_bearing(350.0, 10.0), -20.0);
        assert_eq!(diff_bearing(180.0, 0.0), 180.0);
        assert_eq!(diff_bearing(0.0, 180.0), 180.0);
        let mut a = -400.0;
        while a < 400.0 {
            let d = diff_bearing(a, 37.5);
            assert!(d > -180.0 && d <= 180.0, "{a} -> {d}");
            a += 7.25;
        }
    }

    #[test]
    fn test_is_ahead() {
        assert!(is_ahead(45.0, 0.0));
        assert!(is_ahead(350.0, 10.0));
        assert!(!is_ahead(90.0, 0.0));
        assert!(!is_ahead(270.0, 0.0));
        assert!(!is_ahead(180.0, 0.0));
    }
}
