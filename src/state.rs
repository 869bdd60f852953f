use std::sync::Arc;

use tokio::sync::RwLock;

use crate::db::Store;
use crate::models::ShellState;
use crate::services::{LoggingChannel, ScheduleChannel, TimetableService};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<RwLock<Store>>,
    pub shell: Arc<RwLock<ShellState>>,
    pub channel: Arc<dyn ScheduleChannel>,
}

impl AppState {
    pub fn new(store: Store, channel: Arc<dyn ScheduleChannel>) -> Self {
        Self {
            db: Arc::new(RwLock::new(store)),
            shell: Arc::new(RwLock::new(ShellState::default())),
            channel,
        }
    }

    /// Seed data plus a logging channel.
    pub fn seeded() -> Self {
        Self::new(Store::seeded(), Arc::new(LoggingChannel::new()))
    }

    pub fn timetable(&self) -> TimetableService {
        TimetableService::new(self.db.clone(), self.channel.clone())
    }
}
