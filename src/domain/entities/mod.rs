pub mod references;
pub mod video;

pub use references::*;
pub use video::*;
