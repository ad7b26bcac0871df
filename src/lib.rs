//! YB Tracking Position Stream Library
//!
//! A Rust library for decoding the binary position streams published by YB
//! ocean race trackers and for turning them into race statistics and an
//! ocean-centred world map.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export of annotated tracks
//! - **`json`** (default): Enable JSON export of tracks
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Decode a stream and compute race metrics:
//! ```rust,no_run
//! use decyb::{analyze_race, decode_file, CoursePoint, RaceOptions, RaceSetup};
//! use std::path::Path;
//!
//! let mut tracks = decode_file(Path::new("AllPositions3")).unwrap();
//! let setup = RaceSetup::new(
//!     vec![CoursePoint::new(46.47, -1.79), CoursePoint::new(46.49, -1.80)],
//!     1_604_840_400,
//! );
//! for summary in analyze_race(&mut tracks, &setup, &RaceOptions::default()) {
//!     println!("{}: {:.1} nm at {:.2} kn", summary.id, summary.distance, summary.average_speed);
//! }
//! ```
//!
//! Project a position onto a 1000×1000 map:
//! ```rust
//! use decyb::{project, Coordinate};
//!
//! let p = project(&Coordinate::new(-33.9, 18.4), 1000.0);
//! assert!(p.x >= 0.0 && p.x <= 1000.0);
//! ```
//!
//! # Public API
//!
//! ## Decoding
//! - [`decode`] - Decode a position stream held in memory
//! - [`decode_file`] - Read and decode a position stream file
//!
//! ## Data Types
//! - [`Track`] - All position reports of one vessel, newest first
//! - [`Moment`] - One position report plus derived race metrics
//! - [`CoursePoint`] / [`Poi`] - Race course and landmarks
//! - [`RaceSetup`] / [`Team`] / [`RaceOptions`] - Race description and analysis settings
//!
//! ## Race Metrics
//! - [`calc_course`], [`calc_moments`], [`calc_dtf`], [`calc_poi`],
//!   [`find_pass`], [`calc_tdist`] - Individual passes
//! - [`analyze_track`] / [`analyze_race`] - Full analysis in data-flow order
//! - [`clean_moments`], [`remove_retired_moments`] - Trim tracks to the race
//!
//! ## Map Projection
//! - [`trans_spilhaus`] - Re-centre the globe on the world ocean
//! - [`adams_square_ii`] - Adams World in a Square II
//! - [`project`] / [`project_path`] - Complete pipeline for points and polylines

// Module declarations
pub mod conversion;
pub mod error;
pub mod export;
pub mod filters;
pub mod geodesic;
pub mod parser;
pub mod projection;
pub mod race;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use conversion::*;
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use filters::*;
#[allow(ambiguous_glob_reexports)]
pub use geodesic::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use projection::*;
#[allow(ambiguous_glob_reexports)]
pub use race::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

// Re-export Result type for convenience
pub use anyhow::Result;
