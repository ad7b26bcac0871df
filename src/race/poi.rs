use crate::conversion::{format_coordinate, MinuteFormat};
use crate::geodesic::{coord_diff, diff_bearing, Axis};
use crate::types::{Moment, Poi};

/// A landmark further away than this from every track point was not reached
pub const POI_RANGE_NM: f64 = 100.0;

/// Label the track point closest to each landmark with the landmark's name
///
/// Only landmarks that came within [`POI_RANGE_NM`] of the track are
/// labelled. On equal distances the older point wins.
pub fn calc_poi(moments: &mut [Moment], pois: &[Poi]) {
    for poi in pois {
        let closest = moments
            .iter()
            .enumerate()
            .rev()
            .map(|(i, m)| (i, coord_diff(m, poi).dist))
            .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((i, d)),
            });

        match closest {
            Some((i, dist)) if dist < POI_RANGE_NM => {
                log::debug!("{} passed at {} ({:.1} nm)", poi.name, moments[i].at, dist);
                moments[i].name = Some(poi.name.clone());
            }
            _ => {}
        }
    }
}

/// Label the point at which the track crosses `value` in the given dimension
///
/// Longitudes are compared on the branch around `value`, so a jump across
/// the antimeridian is a crossing of ±180° and not of the meridian in
/// between. Every crossing labels the later point of the pair.
pub fn find_pass(moments: &mut [Moment], axis: Axis, value: f64) -> usize {
    let label = format_coordinate(value, axis, MinuteFormat::None);
    let mut passes = 0;

    for i in (1..moments.len()).rev() {
        let earlier = axis.of(&moments[i]);
        let later = axis.of(&moments[i - 1]);

        let (before, after) = match axis {
            Axis::Latitude => (earlier - value, later - value),
            Axis::Longitude => {
                // shortest signed step, then fold relative to the crossing value
                let step = diff_bearing(later, earlier);
                let before = diff_bearing(earlier, value);
                (before, before + step)
            }
        };

        if (before >= 0.0 && after < 0.0) || (before <= 0.0 && after > 0.0) {
            moments[i - 1].name = Some(label.clone());
            passes += 1;
        }
    }

    passes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(points: &[(f64, f64)]) -> Vec<Moment> {
        let n = points.len() as i64;
        points
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| Moment::new((n - i as i64) * 3600, lat, lon))
            .collect()
    }

    #[test]
    fn test_poi_labels_nearest_point() {
        let mut moments = track(&[(0.0, 6.0), (0.0, 3.0), (0.0, 1.0)]);
        let pois = vec![Poi::new(0.0, 3.5, "Mark"), Poi::new(50.0, 50.0, "Far away")];
        calc_poi(&mut moments, &pois);

        assert_eq!(moments[1].name.as_deref(), Some("Mark"));
        assert!(moments[0].name.is_none());
        assert!(moments[2].name.is_none());
    }

    #[test]
    fn test_poi_out_of_range() {
        let mut moments = track(&[(0.0, 0.0)]);
        calc_poi(&mut moments, &[Poi::new(0.0, 1.7, "Just outside")]);
        assert!(moments[0].name.is_none());

        calc_poi(&mut moments, &[Poi::new(0.0, 1.6, "Just inside")]);
        assert_eq!(moments[0].name.as_deref(), Some("Just inside"));
    }

    #[test]
    fn test_poi_tie_prefers_older_point() {
        let mut moments = track(&[(0.0, 2.0), (0.0, 0.0)]);
        calc_poi(&mut moments, &[Poi::new(0.0, 1.0, "Midway")]);
        assert_eq!(moments[1].name.as_deref(), Some("Midway"));
        assert!(moments[0].name.is_none());
    }

    #[test]
    fn test_equator_crossing() {
        let mut moments = track(&[(-2.0, -25.0), (-0.5, -25.0), (0.5, -25.0), (2.0, -25.0)]);
        assert_eq!(find_pass(&mut moments, Axis::Latitude, 0.0), 1);
        assert_eq!(moments[1].name.as_deref(), Some("00° "));
        assert!(moments[2].name.is_none());
    }

    #[test]
    fn test_touching_the_line_counts_once() {
        let mut moments = track(&[(1.0, 0.0), (0.0, 0.0), (-1.0, 0.0)]);
        assert_eq!(find_pass(&mut moments, Axis::Latitude, 0.0), 1);
        assert_eq!(moments[0].name.as_deref(), Some("00° "));
    }

    #[test]
    fn test_dateline_crossing() {
        let mut moments = vec![Moment::new(1, -50.0, -179.9), Moment::new(0, -50.0, 179.9)];
        assert_eq!(find_pass(&mut moments, Axis::Longitude, 180.0), 1);
        assert_eq!(moments[0].name.as_deref(), Some("180° E"));

        let mut moments = vec![Moment::new(1, -50.0, -179.9), Moment::new(0, -50.0, 179.9)];
        assert_eq!(find_pass(&mut moments, Axis::Longitude, 0.0), 0);
    }

    #[test]
    fn test_meridian_crossing_westbound() {
        let mut moments = track(&[(45.0, -0.2), (45.0, 0.3)]);
        assert_eq!(find_pass(&mut moments, Axis::Longitude, 0.0), 1);
        assert_eq!(moments[0].name.as_deref(), Some("000° "));
        assert_eq!(find_pass(&mut moments, Axis::Longitude, 180.0), 0);
    }
}
