pub mod config;
pub mod counter;
pub mod geometry;
pub mod pose;
