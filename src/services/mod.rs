pub mod channel;
pub mod scheduler;
pub mod timetable;

pub use channel::{LoggingChannel, ScheduleChannel, ScheduleEvent};
pub use scheduler::ScheduleTicker;
pub use timetable::TimetableService;
