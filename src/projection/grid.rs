use super::adams::{adams_square_ii, coords_to_square};
use super::rotate::trans_spilhaus;
use crate::geodesic::{Coordinate, GeoPoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Projected vertex of a polyline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    /// The segment arriving at this point wraps around the map edge and
    /// must not be drawn
    pub split: bool,
}

/// Project a polyline, flagging segments that cross the map edge
pub fn project_path<P: GeoPoint>(points: &[P], scale: f64) -> Vec<PathPoint> {
    let mut prev_lon: Option<f64> = None;

    points
        .iter()
        .map(|point| {
            let c = trans_spilhaus(point);
            let xy = coords_to_square(scale, adams_square_ii(c.lon.to_radians(), c.lat.to_radians()));
            let split = prev_lon.is_some_and(|lon| (c.lon - lon).abs() > 180.0);
            prev_lon = Some(c.lon);
            PathPoint {
                x: xy.x,
                y: xy.y,
                split,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GridLineKind {
    Equator,
    Meridian,
}

/// Reference line in geographic coordinates
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridLine {
    pub kind: GridLineKind,
    pub nodes: Vec<Coordinate>,
}

/// The equator and the ring formed by the 0° and 180° meridians
///
/// Nodes are 10° apart. The meridian ring runs north along 0° and back
/// south along 180°.
pub fn graticule() -> Vec<GridLine> {
    let equator = (-18..=18)
        .map(|e| Coordinate::new(0.0, f64::from(e) * 10.0))
        .collect();

    let north = (-9..=9).map(|n| Coordinate::new(f64::from(n) * 10.0, 0.0));
    let south = (-9..=9)
        .rev()
        .map(|n| Coordinate::new(f64::from(n) * 10.0, 180.0));
    let meridian = north.chain(south).collect();

    vec![
        GridLine {
            kind: GridLineKind::Equator,
            nodes: equator,
        },
        GridLine {
            kind: GridLineKind::Meridian,
            nodes: meridian,
        },
    ]
}
