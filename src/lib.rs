//! outfitcast library
//!
//! Turns a weather reading into a clothing recommendation and keeps the last
//! good reading around for when the network is not.

pub mod cache;
pub mod cli;
pub mod data;
pub mod outfit;
pub mod refresh;
pub mod report;
pub mod units;
