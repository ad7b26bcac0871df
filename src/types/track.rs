use crate::types::Moment;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All position reports of one vessel, newest first
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Track {
    pub id: u16,
    pub moments: Vec<Moment>,
}

impl Track {
    pub fn new(id: u16, moments: Vec<Moment>) -> Self {
        Self { id, moments }
    }

    pub fn len(&self) -> usize {
        self.moments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    /// Most recent position report
    pub fn newest(&self) -> Option<&Moment> {
        self.moments.first()
    }

    /// Earliest position report
    pub fn oldest(&self) -> Option<&Moment> {
        self.moments.last()
    }

    /// Seconds between the oldest and the newest report
    pub fn duration(&self) -> i64 {
        match (self.newest(), self.oldest()) {
            (Some(newest), Some(oldest)) => newest.at - oldest.at,
            _ => 0,
        }
    }

    /// Total distance sailed in nm, valid after [`crate::race::calc_moments`]
    pub fn distance(&self) -> f64 {
        self.newest().map(|m| m.dist_tot).unwrap_or(0.0)
    }

    /// Moment flagged as the end of the fastest leg, if any
    pub fn fastest(&self) -> Option<&Moment> {
        self.moments.iter().find(|m| m.v_avg_max)
    }

    /// Check that timestamps never increase from newest to oldest
    pub fn is_time_sorted(&self) -> bool {
        self.moments.windows(2).all(|w| w[0].at >= w[1].at)
    }
}
