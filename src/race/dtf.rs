use crate::geodesic::{coord_diff, is_ahead};
use crate::types::{CoursePoint, Moment};

/// Assign distance-to-finish and distance-made-good along the course
///
/// Merge-style sweep: course nodes are visited from the second node on,
/// track moments from the oldest on. A moment is attributed to the current
/// node while that node still lies ahead of it, i.e. the bearing towards the
/// node deviates less than 90° from the node's own course bearing. Once a
/// moment has passed the node the sweep advances to the next node without
/// rewinding the track. This assumes progress along the course never goes
/// backwards. The sweep stops at the finish node, which has no course
/// bearing, so moments on the final leg and beyond get no values.
///
/// `course` must have been prepared by [`crate::race::calc_course`].
pub fn calc_dtf(moments: &mut [Moment], course: &[CoursePoint]) {
    let Some(finish) = course.last() else {
        return;
    };
    let dist_tot = finish.dist_tot;

    // index one past the next moment to visit
    let mut remaining = moments.len();

    // the first node is skipped: at the start line every boat is "behind" it
    for node in course.iter().skip(1) {
        let Some(course_bearing) = node.bearing else {
            break;
        };
        while remaining > 0 {
            let m = &mut moments[remaining - 1];
            let leg = coord_diff(&*m, node);
            if !is_ahead(leg.bearing, course_bearing) {
                break;
            }
            m.dtf = Some(dist_tot - node.dist_tot + leg.dist);
            m.dmg = Some(node.dist_tot - leg.dist);
            remaining -= 1;
        }
        if remaining == 0 {
            break;
        }
    }
}
