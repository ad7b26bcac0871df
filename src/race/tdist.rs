use crate::race::moments::avg_speed;
use crate::types::{DistSample, Moment};

/// Check whether `a` is within `p` (fraction, e.g. 0.01 = 1 %) of `b`
pub fn approx(a: f64, b: f64, p: f64) -> bool {
    a >= b * (1.0 - p) && a <= b * (1.0 + p)
}

/// Record the distance sailed over a time window of `window` seconds
///
/// Starting from every moment, leg distances are summed walking forward in
/// time for as long as the elapsed time stays within the window. If the
/// elapsed time reached is within `tolerance` of the window, a
/// [`DistSample`] is stored on the moment reached. A moment keeps at most one
/// sample per window, the one covering the longest elapsed time.
///
/// Leg distances must have been filled in by [`crate::race::calc_moments`].
pub fn calc_tdist(moments: &mut [Moment], window: i64, tolerance: f64) {
    if window <= 0 {
        return;
    }

    for start in (1..moments.len()).rev() {
        let origin = moments[start].at;
        let mut dist = 0.0;
        let mut reached: Option<(usize, i64)> = None;

        for j in (0..start).rev() {
            let elapsed = moments[j].at - origin;
            if elapsed > window {
                break;
            }
            dist += moments[j].dist;
            reached = Some((j, elapsed));
        }

        let Some((end, elapsed)) = reached else {
            continue;
        };
        if !approx(elapsed as f64, window as f64, tolerance) {
            continue;
        }

        let sample = DistSample {
            t: elapsed,
            t_exp: window,
            dist,
            v_avg: avg_speed(dist, elapsed),
        };
        let samples = &mut moments[end].dist_t;
        match samples.iter_mut().find(|s| s.t_exp == window) {
            Some(existing) => {
                if existing.t < elapsed {
                    *existing = sample;
                }
            }
            None => samples.push(sample),
        }
    }
}
