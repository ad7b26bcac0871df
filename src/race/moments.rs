use crate::geodesic::coord_diff;
use crate::types::Moment;

/// Average speed in knots over `dist` nm sailed in `td` seconds, 0 if `td` is 0
pub fn avg_speed(dist: f64, td: i64) -> f64 {
    if td == 0 {
        0.0
    } else {
        dist / td as f64 * 3600.0
    }
}

/// Annotate every moment with leg distance, bearing, time delta, cumulative
/// distance and average speed relative to its next-older neighbour
///
/// Moments are ordered newest first. The moment ending the fastest leg is
/// flagged with `v_avg_max`. Legs slower than `min_avg` knots are treated as
/// stationary and left out of the returned moving time in seconds. Returns 0
/// if no leg has a positive speed.
pub fn calc_moments(moments: &mut [Moment], min_avg: f64) -> i64 {
    for m in moments.iter_mut() {
        m.v_avg_max = false;
    }

    let Some(oldest) = moments.last_mut() else {
        return 0;
    };
    oldest.td = 0;
    oldest.dist = 0.0;
    oldest.dist_tot = 0.0;
    oldest.bearing = 0.0;
    oldest.v_avg = 0.0;

    let mut fastest: Option<usize> = None;
    let mut v_max = 0.0;
    let mut t_move = 0;

    for i in (1..moments.len()).rev() {
        let leg = coord_diff(&moments[i], &moments[i - 1]);
        let (prev_at, prev_tot) = (moments[i].at, moments[i].dist_tot);

        let m = &mut moments[i - 1];
        m.dist = leg.dist;
        m.bearing = leg.bearing;
        m.dist_tot = prev_tot + leg.dist;
        m.td = m.at - prev_at;
        m.v_avg = avg_speed(m.dist, m.td);

        if m.v_avg > v_max {
            v_max = m.v_avg;
            fastest = Some(i - 1);
        }

        if m.v_avg >= min_avg {
            t_move += m.td;
        }
    }

    match fastest {
        Some(ix) => {
            moments[ix].v_avg_max = true;
            t_move
        }
        None => 0,
    }
}
