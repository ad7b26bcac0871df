pub mod decoder;
pub mod header;
pub mod main;
pub mod record;
pub mod stream;

pub use decoder::*;
pub use header::*;
pub use main::*;
pub use record::*;
pub use stream::*;
