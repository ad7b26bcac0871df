use crate::geodesic::GeoPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance covered over a requested time window, ending at the owning moment
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistSample {
    /// Elapsed seconds actually covered
    pub t: i64,
    /// Requested window in seconds
    pub t_exp: i64,
    /// Nautical miles sailed in `t`
    pub dist: f64,
    /// Average speed over `t` in knots
    pub v_avg: f64,
}

/// One timestamped position report of a vessel
///
/// The first block of fields comes straight from the position stream, the
/// rest is filled in by the race calculations in [`crate::race`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Moment {
    /// Unix timestamp in seconds
    pub at: i64,
    pub lat: f64,
    pub lon: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alt: Option<i16>,
    /// Distance-to-finish as transmitted by the tracker, uninterpreted
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reported_dtf: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lap: Option<u8>,
    /// Auxiliary channel (unknown unit)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub aux: Option<f64>,

    /// Leg distance to the previous (older) moment in nm
    #[cfg_attr(feature = "serde", serde(default))]
    pub dist: f64,
    /// Bearing from the previous moment in degrees
    #[cfg_attr(feature = "serde", serde(default))]
    pub bearing: f64,
    /// Distance sailed since the oldest moment in nm
    #[cfg_attr(feature = "serde", serde(default))]
    pub dist_tot: f64,
    /// Seconds since the previous moment
    #[cfg_attr(feature = "serde", serde(default))]
    pub td: i64,
    /// Average speed over the leg in knots
    #[cfg_attr(feature = "serde", serde(default))]
    pub v_avg: f64,
    /// Set on the single moment with the highest leg speed of a track
    #[cfg_attr(feature = "serde", serde(default))]
    pub v_avg_max: bool,
    /// Distance-to-finish along the course in nm
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub dtf: Option<f64>,
    /// Distance made good along the course in nm
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub dmg: Option<f64>,
    /// Landmark or crossing label
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub dist_t: Vec<DistSample>,
}

impl Moment {
    pub fn new(at: i64, lat: f64, lon: f64) -> Self {
        Self {
            at,
            lat,
            lon,
            ..Default::default()
        }
    }

    /// Look up the distance sample for a window, if one was recorded
    pub fn dist_sample(&self, window: i64) -> Option<&DistSample> {
        self.dist_t.iter().find(|s| s.t_exp == window)
    }

    /// Reset every derived field, keeping what was decoded from the stream
    pub fn clear_derived(&mut self) {
        self.dist = 0.0;
        self.bearing = 0.0;
        self.dist_tot = 0.0;
        self.td = 0;
        self.v_avg = 0.0;
        self.v_avg_max = false;
        self.dtf = None;
        self.dmg = None;
        self.name = None;
        self.dist_t.clear();
    }
}

impl GeoPoint for Moment {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}
