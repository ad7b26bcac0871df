//! Track trimming and consistency checks
//!
//! Position streams routinely contain reports from before the start gun
//! (delivery trips, warm-up sailing) and after a boat finished or retired.
//! These helpers cut a [`Track`] down to the part that belongs to the race
//! before any race metrics are computed.

use crate::types::Track;

/// Keep only moments with `t_min <= at <= t_max`
///
/// Tracks are newest first, so older reports are popped from the tail and
/// newer ones drained from the head. Returns the number of moments removed.
pub fn clean_moments(track: &mut Track, t_min: i64, t_max: i64) -> usize {
    let before = track.moments.len();

    while track.moments.last().is_some_and(|m| m.at < t_min) {
        track.moments.pop();
    }

    let too_new = track
        .moments
        .iter()
        .take_while(|m| m.at > t_max)
        .count();
    track.moments.drain(..too_new);

    let removed = before - track.moments.len();
    if removed > 0 {
        log::debug!(
            "Vessel {}: trimmed {} of {} moment(s) outside {}..={}",
            track.id,
            removed,
            before,
            t_min,
            t_max
        );
    }
    removed
}

/// Drop every moment reported after the vessel retired at `retired_at`
pub fn remove_retired_moments(track: &mut Track, retired_at: i64) -> usize {
    let removed = track
        .moments
        .iter()
        .take_while(|m| m.at > retired_at)
        .count();
    track.moments.drain(..removed);

    if removed > 0 {
        log::debug!(
            "Vessel {}: dropped {} moment(s) after retirement at {}",
            track.id,
            removed,
            retired_at
        );
    }
    removed
}

/// Vessel ids present in the stream but missing from `expected_ids`
///
/// Mismatches are only reported; the caller decides what to do with them.
pub fn unmatched_ids(tracks: &[Track], expected_ids: &[u16]) -> Vec<u16> {
    let unmatched: Vec<u16> = tracks
        .iter()
        .map(|t| t.id)
        .filter(|id| !expected_ids.contains(id))
        .collect();

    for id in &unmatched {
        log::warn!("Vessel {id} in position stream has no entry in the race setup");
    }
    unmatched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Moment;

    fn track_at(times: &[i64]) -> Track {
        Track::new(
            9,
            times
                .iter()
                .map(|&t| Moment::new(t, 0.0, t as f64 / 100.0))
                .collect(),
        )
    }

    fn times(track: &Track) -> Vec<i64> {
        track.moments.iter().map(|m| m.at).collect()
    }

    #[test]
    fn test_clean_moments_trims_both_ends() {
        let mut track = track_at(&[50, 40, 30, 20, 10]);
        assert_eq!(clean_moments(&mut track, 15, 45), 2);
        assert_eq!(times(&track), vec![40, 30, 20]);
    }

    #[test]
    fn test_clean_moments_bounds_are_inclusive() {
        let mut track = track_at(&[50, 40, 30, 20, 10]);
        assert_eq!(clean_moments(&mut track, 10, 50), 0);
        assert_eq!(track.len(), 5);
    }

    #[test]
    fn test_clean_moments_can_empty_track() {
        let mut track = track_at(&[50, 40]);
        clean_moments(&mut track, 100, 200);
        assert!(track.is_empty());

        let mut track = track_at(&[50, 40]);
        clean_moments(&mut track, 0, 10);
        assert!(track.is_empty());

        let mut empty = track_at(&[]);
        assert_eq!(clean_moments(&mut empty, 0, 10), 0);
    }

    #[test]
    fn test_remove_retired_moments() {
        let mut track = track_at(&[50, 40, 30, 20, 10]);
        assert_eq!(remove_retired_moments(&mut track, 30), 2);
        assert_eq!(times(&track), vec![30, 20, 10]);

        assert_eq!(remove_retired_moments(&mut track, 1_000), 0);
        assert_eq!(track.len(), 3);
    }

    #[test]
    fn test_unmatched_ids() {
        let tracks = vec![track_at(&[1]), Track::new(4, Vec::new()), Track::new(12, Vec::new())];
        assert_eq!(unmatched_ids(&tracks, &[4, 9, 30]), vec![12]);
        assert!(unmatched_ids(&tracks, &[4, 9, 12]).is_empty());
        assert!(unmatched_ids(&[], &[1]).is_empty());
    }
}
