//! Ocean-centred square world map
//!
//! Geographic positions are first rotated so the world ocean sits in the
//! middle of the globe (after Athelstan Spilhaus) and then projected with
//! Adams' "World in a Square II". Everything here is pure math and can be
//! applied to track points, landmarks and grid lines alike.

pub mod adams;
pub mod elliptic;
pub mod grid;
pub mod rotate;

pub use adams::*;
pub use elliptic::*;
pub use grid::*;
pub use rotate::*;
