use std::sync::Arc;

use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::db::Store;
use crate::error::AppError;
use crate::models::session::{DAYS, HOURS};
use crate::models::{ClassSession, GridCell, GridRow, UpdateSessionRequest};
use crate::services::channel::{ScheduleChannel, ScheduleEvent};

/// Remove at `from`, insert at `to`.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Moves `active` to the position of `over` in the flat list. Day and hour are
/// left untouched, so the grid only changes in the order within a cell.
pub fn reorder(sessions: &mut Vec<ClassSession>, active: &str, over: &str) -> bool {
    if active == over {
        return false;
    }
    let old_index = sessions.iter().position(|s| s.id == active);
    let new_index = sessions.iter().position(|s| s.id == over);
    match (old_index, new_index) {
        (Some(from), Some(to)) => {
            array_move(sessions, from, to);
            true
        }
        _ => false,
    }
}

pub fn grid(sessions: &[ClassSession]) -> Vec<GridRow> {
    HOURS
        .map(|hour| GridRow {
            hour,
            cells: DAYS
                .map(|day| GridCell {
                    day,
                    hour,
                    sessions: sessions
                        .iter()
                        .filter(|s| s.day == day && s.hour == hour)
                        .cloned()
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

fn validate(req: &UpdateSessionRequest) -> Result<(), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }
    if req.room.trim().is_empty() {
        return Err(AppError::BadRequest("room is required".to_string()));
    }
    if !DAYS.contains(&req.day) {
        return Err(AppError::BadRequest(format!("day must be between 1 and 5, got {}", req.day)));
    }
    if !HOURS.contains(&req.hour) {
        return Err(AppError::BadRequest(format!("hour must be between 9 and 16, got {}", req.hour)));
    }
    Ok(())
}

pub struct TimetableService {
    store: Arc<RwLock<Store>>,
    channel: Arc<dyn ScheduleChannel>,
}

impl TimetableService {
    pub fn new(store: Arc<RwLock<Store>>, channel: Arc<dyn ScheduleChannel>) -> Self {
        Self { store, channel }
    }

    pub async fn reorder(&self, active: &str, over: &str) -> Vec<ClassSession> {
        let (moved, sessions) = {
            let mut db = self.store.write().await;
            let moved = reorder(&mut db.sessions, active, over);
            (moved, db.sessions.clone())
        };

        if moved {
            info!("Moved session {} to the slot of {}", active, over);
            self.channel
                .emit(ScheduleEvent::new(
                    "updateSchedule",
                    "Schedule Reordered",
                    format!("Session {} moved", active),
                    json!({ "classSessions": sessions }),
                ))
                .await;
        } else {
            debug!("reorder {} -> {} left the timetable unchanged", active, over);
        }

        sessions
    }

    pub async fn update_session(&self, id: &str, req: UpdateSessionRequest) -> Result<ClassSession, AppError> {
        validate(&req)?;

        let (updated, sessions) = {
            let mut db = self.store.write().await;
            let session = db
                .sessions
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(AppError::NotFound)?;
            session.title = req.title;
            session.room = req.room;
            session.day = req.day;
            session.hour = req.hour;
            let updated = session.clone();
            (updated, db.sessions.clone())
        };

        self.channel
            .emit(ScheduleEvent::new(
                "updateSchedule",
                "Session Updated",
                format!("{} has been updated.", updated.title),
                json!({ "classSessions": sessions }),
            ))
            .await;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::channel::LoggingChannel;

    fn ids(sessions: &[ClassSession]) -> Vec<&str> {
        sessions.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_reorder_moves_within_flat_list() {
        let mut sessions = Store::seeded().sessions;
        assert!(reorder(&mut sessions, "1", "3"));
        assert_eq!(ids(&sessions), vec!["2", "3", "1"]);

        assert!(reorder(&mut sessions, "1", "2"));
        assert_eq!(ids(&sessions), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_reorder_keeps_day_and_hour() {
        let mut sessions = Store::seeded().sessions;
        let before = grid(&sessions);
        reorder(&mut sessions, "3", "1");

        let cs101 = sessions.iter().find(|s| s.id == "1").unwrap();
        assert_eq!((cs101.day, cs101.hour), (1, 9));
        let after = grid(&sessions);
        for (row_before, row_after) in before.iter().zip(after.iter()) {
            for (a, b) in row_before.cells.iter().zip(row_after.cells.iter()) {
                assert_eq!(a.sessions, b.sessions);
            }
        }
    }

    #[test]
    fn test_reorder_noops() {
        let mut sessions = Store::seeded().sessions;
        assert!(!reorder(&mut sessions, "2", "2"));
        assert!(!reorder(&mut sessions, "2", "9"));
        assert!(!reorder(&mut sessions, "9", "2"));
        assert_eq!(ids(&sessions), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_grid_shape_and_placement() {
        let sessions = Store::seeded().sessions;
        let rows = grid(&sessions);
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|r| r.cells.len() == 5));

        let nine = &rows[0];
        assert_eq!(nine.hour, 9);
        assert_eq!(nine.cells[0].sessions[0].title, "CS101");
        let placed: usize = rows.iter().flat_map(|r| r.cells.iter()).map(|c| c.sessions.len()).sum();
        assert_eq!(placed, 3);
    }

    #[tokio::test]
    async fn test_update_session_validates_and_emits() {
        let store = Arc::new(RwLock::new(Store::seeded()));
        let channel = Arc::new(LoggingChannel::new());
        let service = TimetableService::new(store.clone(), channel.clone());

        let bad = UpdateSessionRequest { title: "CS101".to_string(), room: "Room 301".to_string(), day: 6, hour: 9 };
        assert!(matches!(service.update_session("1", bad).await, Err(AppError::BadRequest(_))));

        let req = UpdateSessionRequest { title: "CS102".to_string(), room: "Room 302".to_string(), day: 4, hour: 16 };
        let updated = service.update_session("1", req).await.unwrap();
        assert_eq!((updated.day, updated.hour), (4, 16));
        assert_eq!(store.read().await.sessions[0].title, "CS102");

        let recent = channel.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].message, "CS102 has been updated.");

        let missing = UpdateSessionRequest { title: "X".to_string(), room: "Y".to_string(), day: 1, hour: 9 };
        assert!(matches!(service.update_session("42", missing).await, Err(AppError::NotFound)));
    }
}
