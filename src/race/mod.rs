//! Race progress calculations
//!
//! Every function in here annotates the [`Moment`]s of a track in place.
//! The order matters: [`calc_moments`] fills leg distances that
//! [`calc_tdist`] sums up, and [`calc_course`] must have run on the course
//! before [`calc_dtf`] can use it. [`analyze_track`] runs the whole pass in
//! the right order.

pub mod course;
pub mod dtf;
pub mod moments;
pub mod poi;
pub mod tdist;

pub use course::*;
pub use dtf::*;
pub use moments::*;
pub use poi::*;
pub use tdist::*;

use crate::filters::{clean_moments, remove_retired_moments, unmatched_ids};
use crate::geodesic::Axis;
use crate::types::{CoursePoint, Moment, Poi, Track};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning knobs for the per-track analysis
#[derive(Debug, Clone, PartialEq)]
pub struct RaceOptions {
    /// Legs slower than this (knots) do not count as moving time
    pub min_moving_speed: f64,
    /// Time windows in seconds for [`calc_tdist`]
    pub distance_windows: Vec<i64>,
    /// Accepted relative deviation from a window length
    pub window_tolerance: f64,
    /// Lines whose crossings get labelled, see [`find_pass`]
    pub passes: Vec<(Axis, f64)>,
}

impl Default for RaceOptions {
    fn default() -> Self {
        Self {
            min_moving_speed: 0.0,
            distance_windows: Vec::new(),
            window_tolerance: 0.01,
            passes: vec![(Axis::Latitude, 0.0)],
        }
    }
}

/// A vessel that stopped racing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Retirement {
    pub id: u16,
    pub at: i64,
}

/// A registered vessel with its own start time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    pub id: u16,
    /// Start gun for this vessel, unix seconds
    pub start: i64,
}

/// Everything about a race that does not come from the position stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaceSetup {
    /// Course nodes, start first, prepared by [`calc_course`]
    pub course: Vec<CoursePoint>,
    pub pois: Vec<Poi>,
    /// Start gun, unix seconds. Used for vessels without a [`Team`] entry
    pub start: i64,
    pub teams: Vec<Team>,
    /// Reports after this are ignored
    pub end: Option<i64>,
    pub retired: Vec<Retirement>,
}

impl RaceSetup {
    /// Build a setup from raw course nodes, computing the course legs
    pub fn new(mut course: Vec<CoursePoint>, start: i64) -> Self {
        let length = calc_course(&mut course);
        log::debug!("Course of {} node(s), {:.1} nm", course.len(), length);
        Self {
            course,
            start,
            ..Default::default()
        }
    }

    pub fn with_pois(mut self, pois: Vec<Poi>) -> Self {
        self.pois = pois;
        self
    }

    pub fn with_end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_team(mut self, id: u16, start: i64) -> Self {
        self.teams.push(Team { id, start });
        self
    }

    /// Start time of vessel `id`, falling back to the race start
    pub fn start_of(&self, id: u16) -> i64 {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.start)
            .unwrap_or(self.start)
    }

    pub fn team_ids(&self) -> Vec<u16> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn with_retirement(mut self, id: u16, at: i64) -> Self {
        self.retired.push(Retirement { id, at });
        self
    }

    /// Total course length in nm
    pub fn course_length(&self) -> f64 {
        self.course.last().map(|p| p.dist_tot).unwrap_or(0.0)
    }

    pub fn retirement(&self, id: u16) -> Option<i64> {
        self.retired.iter().find(|r| r.id == id).map(|r| r.at)
    }
}

/// Per-vessel result of [`analyze_track`]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackSummary {
    pub id: u16,
    pub points: usize,
    /// Distance sailed in nm
    pub distance: f64,
    /// Seconds spent above the minimum moving speed
    pub moving_time: i64,
    /// Knots over the moving time
    pub average_speed: f64,
    /// Fastest leg in knots
    pub max_speed: f64,
}

/// Trim a track to the race and compute every derived metric
pub fn analyze_track(track: &mut Track, setup: &RaceSetup, options: &RaceOptions) -> TrackSummary {
    clean_moments(track, setup.start_of(track.id), setup.end.unwrap_or(i64::MAX));
    if let Some(at) = setup.retirement(track.id) {
        remove_retired_moments(track, at);
    }

    let moments = &mut track.moments;
    moments.iter_mut().for_each(Moment::clear_derived);

    let moving_time = calc_moments(moments, options.min_moving_speed);
    calc_dtf(moments, &setup.course);
    calc_poi(moments, &setup.pois);
    for &(axis, value) in &options.passes {
        find_pass(moments, axis, value);
    }
    for &window in &options.distance_windows {
        calc_tdist(moments, window, options.window_tolerance);
    }

    let distance = track.distance();
    let summary = TrackSummary {
        id: track.id,
        points: track.len(),
        distance,
        moving_time,
        average_speed: avg_speed(distance, moving_time),
        max_speed: track.fastest().map(|m| m.v_avg).unwrap_or(0.0),
    };
    log::debug!(
        "Vessel {}: {} point(s), {:.1} nm, {:.2} kn avg",
        summary.id,
        summary.points,
        summary.distance,
        summary.average_speed
    );
    summary
}

/// Run [`analyze_track`] on every track
///
/// When the setup lists teams, stream vessels without a team entry are
/// logged as warnings and analysed against the race start.
pub fn analyze_race(tracks: &mut [Track], setup: &RaceSetup, options: &RaceOptions) -> Vec<TrackSummary> {
    if !setup.teams.is_empty() {
        unmatched_ids(tracks, &setup.team_ids());
    }
    tracks
        .iter_mut()
        .map(|track| analyze_track(track, setup, options))
        .collect()
}
