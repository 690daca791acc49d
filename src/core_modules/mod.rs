pub mod centroid;
pub mod classifier;
pub mod difference_engine;
pub mod frame;
pub mod utils;
pub mod window_sum;
