use crate::geodesic::GeoPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node of the intended race course, start first
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoursePoint {
    pub lat: f64,
    pub lon: f64,
    /// Leg distance from the previous node in nm
    #[cfg_attr(feature = "serde", serde(default))]
    pub dist: f64,
    /// Course distance from the start in nm
    #[cfg_attr(feature = "serde", serde(default))]
    pub dist_tot: f64,
    /// Bearing of the leg leaving this node, `None` for the finish
    #[cfg_attr(feature = "serde", serde(default))]
    pub bearing: Option<f64>,
}

impl CoursePoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Default::default()
        }
    }
}

impl GeoPoint for CoursePoint {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

/// Landmark used to label the nearest track point
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Poi {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

impl Poi {
    pub fn new(lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            name: name.into(),
        }
    }
}

impl GeoPoint for Poi {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}
