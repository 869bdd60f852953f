use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use unischedule::models::{ShellState, ViewKey};
use unischedule::services::{LoggingChannel, ScheduleChannel, ScheduleTicker};

fn shell_on(view: ViewKey) -> Arc<RwLock<ShellState>> {
    Arc::new(RwLock::new(ShellState {
        active_view: view,
        ..Default::default()
    }))
}

#[tokio::test]
async fn test_ticker_initialization() {
    let channel = Arc::new(LoggingChannel::new());

    let ticker = ScheduleTicker::new(channel.clone(), shell_on(ViewKey::Timetable), 10);

    assert_eq!(ticker.interval(), Duration::from_secs(10));
    assert!(channel.recent().is_empty());
}

#[tokio::test]
async fn test_ticker_short_interval() {
    let channel = Arc::new(LoggingChannel::new());
    let mut rx = channel.subscribe();

    let ticker = ScheduleTicker::new(channel.clone(), shell_on(ViewKey::Timetable), 1);

    let ticker_task = tokio::spawn(async move {
        ticker.start().await;
    });

    let first = tokio::time::timeout(Duration::from_secs(3), rx.recv())
        .await
        .expect("ticker did not fire in time")
        .expect("channel closed");

    ticker_task.abort();

    assert_eq!(first.event, "scheduleUpdate");
    assert_eq!(first.message, "Schedule updated");
    assert_eq!(first.payload["type"], "update");
    assert!(!channel.recent().is_empty());
}

#[tokio::test]
async fn test_manual_tick_is_recorded() {
    let channel = Arc::new(LoggingChannel::new());
    let ticker = ScheduleTicker::new(channel.clone(), shell_on(ViewKey::Timetable), 60);

    assert!(ticker.tick().await);
    assert!(ticker.tick().await);

    assert_eq!(channel.recent().len(), 2);
}

#[tokio::test]
async fn test_ticker_only_fires_on_timetable_view() {
    let channel = Arc::new(LoggingChannel::new());
    let shell = shell_on(ViewKey::Dashboard);
    let ticker = ScheduleTicker::new(channel.clone(), shell.clone(), 60);

    assert!(!ticker.tick().await);
    assert!(channel.recent().is_empty());

    shell.write().await.active_view = ViewKey::Timetable;
    assert!(ticker.tick().await);

    shell.write().await.active_view = ViewKey::Courses;
    assert!(!ticker.tick().await);
    assert_eq!(channel.recent().len(), 1);
}
