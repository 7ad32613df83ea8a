//! Timetable engine.
//!
//! Two read-only indexes over the schedule:
//!
//! - [`InvertedTimetable`]: `(route, stop) → vehicles by time`, answering
//!   "which vehicle do I catch here next?"
//! - [`ForwardTimetable`]: `(vehicle, stop) → arrival`, answering "when does
//!   my vehicle get there?"

mod forward;
mod inverted;

pub use forward::ForwardTimetable;
pub use inverted::{InvertedTimetable, InvertedTimetableBuilder};
