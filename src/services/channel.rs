use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

/// How many past events `recent` keeps around.
pub const RECENT_CAPACITY: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEvent {
    pub id: Uuid,
    pub event: String,
    pub title: String,
    pub message: String,
    pub payload: serde_json::Value,
    pub at: DateTime<Utc>,
}

impl ScheduleEvent {
    pub fn new(event: &str, title: &str, message: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event: event.to_string(),
            title: title.to_string(),
            message: message.into(),
            payload,
            at: Utc::now(),
        }
    }
}

/// Publish/subscribe seam for schedule notifications. Nothing behind it talks
/// to a remote endpoint.
#[async_trait]
pub trait ScheduleChannel: Send + Sync {
    async fn emit(&self, event: ScheduleEvent);
    fn subscribe(&self) -> broadcast::Receiver<ScheduleEvent>;
    fn recent(&self) -> Vec<ScheduleEvent>;
}

pub struct LoggingChannel {
    sender: broadcast::Sender<ScheduleEvent>,
    recent: Mutex<VecDeque<ScheduleEvent>>,
}

impl LoggingChannel {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self {
            sender,
            recent: Mutex::new(VecDeque::with_capacity(RECENT_CAPACITY)),
        }
    }
}

impl Default for LoggingChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleChannel for LoggingChannel {
    async fn emit(&self, event: ScheduleEvent) {
        info!("Emitted: {} {}", event.event, event.payload);

        if let Ok(mut recent) = self.recent.lock() {
            if recent.len() == RECENT_CAPACITY {
                recent.pop_front();
            }
            recent.push_back(event.clone());
        }

        // No subscribers is fine.
        if self.sender.send(event).is_err() {
            debug!("no schedule subscribers");
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<ScheduleEvent> {
        self.sender.subscribe()
    }

    fn recent(&self) -> Vec<ScheduleEvent> {
        match self.recent.lock() {
            Ok(recent) => recent.iter().rev().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_reaches_subscribers_and_recent() {
        let channel = LoggingChannel::new();
        let mut rx = channel.subscribe();

        channel
            .emit(ScheduleEvent::new("scheduleUpdate", "Schedule Update", "Schedule updated", serde_json::Value::Null))
            .await;

        let received = rx.recv().await.unwrap();
        assert_eq!(received.message, "Schedule updated");
        assert_eq!(channel.recent().len(), 1);
    }

    #[tokio::test]
    async fn test_recent_is_bounded_newest_first() {
        let channel = LoggingChannel::new();
        for i in 0..(RECENT_CAPACITY + 5) {
            channel
                .emit(ScheduleEvent::new("scheduleUpdate", "Schedule Update", format!("#{}", i), serde_json::Value::Null))
                .await;
        }

        let recent = channel.recent();
        assert_eq!(recent.len(), RECENT_CAPACITY);
        assert_eq!(recent[0].message, format!("#{}", RECENT_CAPACITY + 4));
    }
}
