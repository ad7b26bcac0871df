use crate::geodesic::{Coordinate, GeoPoint};

/// Rotations `(theta, phi)` in degrees moving the oceans to the map centre
pub const SPILHAUS_ROTATIONS: [(f64, f64); 4] = [
    (0.0, 66.94970198),
    (40.43628322, 0.0),
    (0.0, 40.18),
    (-90.0, 0.0),
];

/// Bring a longitude into (-180, 180]
pub fn normalize_longitude(lon: f64) -> f64 {
    let lon = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if lon <= -180.0 {
        lon + 360.0
    } else {
        lon
    }
}

/// Rotate a position on the sphere by `theta` degrees about the y axis,
/// then by `phi` degrees about the polar axis
pub fn rotate_sphere<P: GeoPoint>(theta: f64, phi: f64, point: &P) -> Coordinate {
    let lat = point.lat().to_radians();
    let lon = point.lon().to_radians();
    let (sin_t, cos_t) = theta.to_radians().sin_cos();

    // rounding can push the argument just outside asin's domain near the poles
    let z = (cos_t * lat.sin() - lon.cos() * sin_t * lat.cos()).clamp(-1.0, 1.0);
    let new_lat = z.asin();
    let new_lon = lon.sin().atan2(lat.tan() * sin_t + lon.cos() * cos_t) - phi.to_radians();

    Coordinate::new(new_lat.to_degrees(), normalize_longitude(new_lon.to_degrees()))
}

/// Re-centre the globe on the world ocean, see [`SPILHAUS_ROTATIONS`]
pub fn trans_spilhaus<P: GeoPoint>(point: &P) -> Coordinate {
    SPILHAUS_ROTATIONS
        .iter()
        .fold(Coordinate::new(point.lat(), point.lon()), |c, &(theta, phi)| {
            rotate_sphere(theta, phi, &c)
        })
}
