pub mod journal;
pub mod mood;
pub mod resources;

pub use journal::*;
pub use mood::*;
pub use resources::*;
