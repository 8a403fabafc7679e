pub mod lunge;

pub use lunge::{Feedback, FrameUpdate, LungeCounter};
