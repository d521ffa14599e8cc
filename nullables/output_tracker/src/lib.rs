mod output_tracker;

pub use output_tracker::{OutputListener, OutputTracker};
