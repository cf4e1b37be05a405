#![forbid(unsafe_code)]

pub mod aggregate;
pub mod model;
pub mod seed;
pub mod time;

pub use aggregate::ProgressData;
pub use time::Clock;
