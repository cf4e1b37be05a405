#![forbid(unsafe_code)]

pub mod progress_service;

pub use curriculum_core::Clock;
pub use progress_service::ProgressService;
