mod day;
mod ids;
mod phase;
mod week;

pub use day::Day;
pub use ids::{DayId, PhaseId, WeekId};
pub use phase::Phase;
pub use week::Week;
