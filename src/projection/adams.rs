use super::elliptic::elliptic_f;
use super::rotate::trans_spilhaus;
use crate::geodesic::GeoPoint;
use std::f64::consts::FRAC_1_SQRT_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest |y| of the raw projection, reached at the poles
pub const A2_PHI_SCALE: f64 = 2.62181347;
/// Largest |x| of the raw projection, reached at ±180° on the equator
pub const A2_LAM_SCALE: f64 = 2.62205760;

/// Position on the projected plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

/// Adams "World in a Square II" projection of `lambda`/`phi` in radians
///
/// Returns raw plane coordinates, roughly within ±[`A2_LAM_SCALE`] by
/// ±[`A2_PHI_SCALE`].
pub fn adams_square_ii(lambda: f64, phi: f64) -> PlanePoint {
    let sp = (0.5 * phi).tan();
    let a = sp.asin().cos() * (0.5 * lambda).sin();
    let sm = sp + a < 0.0;
    let sn = sp - a < 0.0;
    let b = sp.acos();
    let a = a.acos();

    let mut u = (1.0 + (a + b).cos().min(0.0)).sqrt().asin();
    if sm {
        u = -u;
    }
    let mut v = (1.0 - (a - b).cos().max(0.0)).abs().sqrt().asin();
    if sn {
        v = -v;
    }

    let fu = elliptic_f(u, 0.5);
    let fv = elliptic_f(v, 0.5);
    PlanePoint {
        x: FRAC_1_SQRT_2 * (fu - fv),
        y: FRAC_1_SQRT_2 * (fu + fv),
    }
}

/// Scale raw projection output into `[0, scale]`, y growing downwards
pub fn coords_to_square(scale: f64, p: PlanePoint) -> PlanePoint {
    let x = (p.x + A2_LAM_SCALE) * scale / (2.0 * A2_LAM_SCALE);
    let y = scale - (p.y + A2_PHI_SCALE) * scale / (2.0 * A2_PHI_SCALE);
    PlanePoint {
        x: x.clamp(0.0, scale),
        y: y.clamp(0.0, scale),
    }
}

/// Full map pipeline: ocean-centred rotation, projection and scaling
pub fn project<P: GeoPoint>(point: &P, scale: f64) -> PlanePoint {
    let c = trans_spilhaus(point);
    coords_to_square(scale, adams_square_ii(c.lon.to_radians(), c.lat.to_radians()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::Coordinate;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-6;

    #[test]
    fn test_centre_and_edges() {
        let p = adams_square_ii(0.0, 0.0);
        assert!(p.x.abs() < EPS && p.y.abs() < EPS);

        let north = adams_square_ii(0.0, FRAC_PI_2);
        assert!(north.x.abs() < EPS);
        assert!((north.y - 2.621813413539112).abs() < EPS);

        let south = adams_square_ii(0.0, -FRAC_PI_2);
        assert!((south.y + 2.621813413539112).abs() < EPS);

        let east = adams_square_ii(PI, 0.0);
        assert!((east.x - 2.6220575392634053).abs() < EPS);
        assert!(east.y.abs() < EPS);

        let west = adams_square_ii(-PI, 0.0);
        assert!((west.x + 2.6220575392634053).abs() < EPS);
    }

    #[test]
    fn test_interior_point() {
        let p = adams_square_ii(FRAC_PI_2, PI / 4.0);
        assert!((p.x - 0.7789856892170284).abs() < EPS);
        assert!((p.y - 0.505178025068575).abs() < EPS);
    }

    #[test]
    fn test_output_is_bounded() {
        for i in -18..=18 {
            for j in -35..=36 {
                let p = adams_square_ii((j as f64 * 5.0).to_radians(), (i as f64 * 5.0).to_radians());
                assert!(p.x.is_finite() && p.y.is_finite());
                assert!(p.x.abs() <= 2.6221, "x out of range at {i}/{j}: {}", p.x);
                assert!(p.y.abs() <= 2.6221, "y out of range at {i}/{j}: {}", p.y);

                let s = coords_to_square(500.0, p);
                assert!((0.0..=500.0).contains(&s.x));
                assert!((0.0..=500.0).contains(&s.y));
            }
        }
    }

    #[test]
    fn test_coords_to_square() {
        let c = coords_to_square(1000.0, PlanePoint::default());
        assert!((c.x - 500.0).abs() < EPS && (c.y - 500.0).abs() < EPS);

        let top_right = coords_to_square(100.0, PlanePoint { x: A2_LAM_SCALE, y: A2_PHI_SCALE });
        assert!((top_right.x - 100.0).abs() < EPS);
        assert!(top_right.y.abs() < EPS);

        let clamped = coords_to_square(100.0, PlanePoint { x: -3.0, y: 3.0 });
        assert_eq!(clamped, PlanePoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_project_reference_points() {
        let cases = [
            ((0.0, 0.0), (373.3863465420866, 540.7427175937386)),
            ((45.0, -30.0), (261.33603885254735, 521.8092994554869)),
            ((-60.0, 150.0), (576.795058005666, 507.3357581037602)),
            ((-56.0, -67.0), (546.1237833146452, 634.916149295799)),
        ];
        for ((lat, lon), (x, y)) in cases {
            let p = project(&Coordinate::new(lat, lon), 1000.0);
            assert!((p.x - x).abs() < 1e-4, "x {} != {x} for {lat}/{lon}", p.x);
            assert!((p.y - y).abs() < 1e-4, "y {} != {y} for {lat}/{lon}", p.y);
        }
    }
}
