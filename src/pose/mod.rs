pub mod frame;
pub mod landmark;

pub use frame::{DetectionResult, PoseFrame};
pub use landmark::{Landmark, LandmarkIndex, Side};
