use crate::geodesic::coord_diff;
use crate::types::CoursePoint;

/// Fill leg distance, cumulative distance and bearing of every course node
///
/// Nodes are ordered start first. Each node gets the bearing of the leg
/// leaving it. The finish node has no outbound leg and its bearing is left
/// as `None`, unless it is also the start. Returns the total course length
/// in nm.
pub fn calc_course(points: &mut [CoursePoint]) -> f64 {
    let Some(first) = points.first_mut() else {
        return 0.0;
    };
    first.dist = 0.0;
    first.dist_tot = 0.0;
    first.bearing = Some(0.0);

    for i in 1..points.len() {
        let leg = coord_diff(&points[i - 1], &points[i]);
        let prev_tot = points[i - 1].dist_tot;
        points[i - 1].bearing = Some(leg.bearing);
        points[i].dist = leg.dist;
        points[i].dist_tot = prev_tot + leg.dist;
        points[i].bearing = None;
    }

    points.last().map(|p| p.dist_tot).unwrap_or(0.0)
}
