//! Stats module - polarity score statistics

mod polarity;

pub use polarity::PolarityStats;
