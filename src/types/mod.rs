pub mod course;
pub mod header;
pub mod moment;
pub mod track;

pub use course::*;
pub use header::*;
pub use moment::*;
pub use track::*;
