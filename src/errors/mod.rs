pub mod types;
pub mod classification;

pub use types::MindwellError;
pub use classification::ErrorClassification;
