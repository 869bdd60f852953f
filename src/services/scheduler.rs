use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{ShellState, ViewKey};
use crate::services::channel::{ScheduleChannel, ScheduleEvent};

/// Periodic "schedule updated" ping, the stand-in for a live schedule feed.
/// Only fires while the timetable view is the active one.
pub struct ScheduleTicker {
    channel: Arc<dyn ScheduleChannel>,
    shell: Arc<RwLock<ShellState>>,
    interval: Duration,
}

impl ScheduleTicker {
    pub fn new(
        channel: Arc<dyn ScheduleChannel>,
        shell: Arc<RwLock<ShellState>>,
        interval_secs: u64,
    ) -> Self {
        Self {
            channel,
            shell,
            interval: Duration::from_secs(interval_secs),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs until the task is aborted.
    pub async fn start(self) {
        info!("Starting schedule ticker (interval: {:?})", self.interval);

        loop {
            tokio::time::sleep(self.interval).await;
            self.tick().await;
        }
    }

    /// Returns whether an update was emitted.
    pub async fn tick(&self) -> bool {
        let active_view = self.shell.read().await.active_view;
        if active_view != ViewKey::Timetable {
            debug!("skipping schedule ping, active view is {:?}", active_view);
            return false;
        }

        let event = ScheduleEvent::new(
            "scheduleUpdate",
            "Schedule Update",
            "Schedule updated",
            json!({ "type": "update", "message": "Schedule updated" }),
        );
        self.channel.emit(event).await;
        true
    }
}
