pub mod counter;
pub mod progress;
pub mod reveal;
