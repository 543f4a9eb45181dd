//! # Event Commands
//!
//! The events page and the admin event editor.
//!
//! The events page shows two lists: what's coming up (soonest first) and
//! what already happened (most recent first). Ongoing and cancelled events
//! appear only in `all`, which the admin table uses.

use bella_core::{Event, EventDraft};
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use crate::commands::require_admin;
use crate::error::ApiResult;
use crate::state::{CatalogState, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
    /// Every event in insertion order.
    pub all: Vec<Event>,
}

pub fn list_events(catalog: &CatalogState) -> EventsResponse {
    debug!("list_events command");

    catalog.read(|c| EventsResponse {
        upcoming: c.upcoming_events().into_iter().cloned().collect(),
        past: c.past_events().into_iter().cloned().collect(),
        all: c.events().to_vec(),
    })
}

pub fn admin_add_event(
    session: &SessionState,
    catalog: &CatalogState,
    draft: EventDraft,
) -> ApiResult<Event> {
    debug!(title = %draft.title, "admin_add_event command");
    let admin = require_admin(session, "admin_add_event")?;

    let event = catalog.write(|c| c.add_event(draft).cloned())?;
    info!(event_id = %event.id, admin = %admin.id, "Event added");
    Ok(event)
}

/// Replaces an event's fields. Sending new media replaces the old one,
/// whether it was an image or a video.
pub fn admin_update_event(
    session: &SessionState,
    catalog: &CatalogState,
    event_id: String,
    draft: EventDraft,
) -> ApiResult<Event> {
    debug!(event_id = %event_id, "admin_update_event command");
    let admin = require_admin(session, "admin_update_event")?;

    let event = catalog.write(|c| c.update_event(&event_id, draft).cloned())?;
    info!(event_id = %event.id, admin = %admin.id, "Event updated");
    Ok(event)
}

pub fn admin_delete_event(
    session: &SessionState,
    catalog: &CatalogState,
    event_id: String,
) -> ApiResult<Event> {
    debug!(event_id = %event_id, "admin_delete_event command");
    let admin = require_admin(session, "admin_delete_event")?;

    let event = catalog.write(|c| c.remove_event(&event_id))?;
    info!(event_id = %event.id, admin = %admin.id, "Event deleted");
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{admin_session, anonymous_session};
    use crate::error::ErrorCode;
    use bella_core::{EventCategory, EventMedia, EventStatus};
    use chrono::{NaiveDate, NaiveTime};

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: "Live quartet on the terrace".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
            location: "Terrace".to_string(),
            category: EventCategory::Music,
            status: EventStatus::Upcoming,
            media: Some(EventMedia::Image("https://example.com/jazz.jpg".to_string())),
        }
    }

    #[test]
    fn test_list_seeded_events() {
        let response = list_events(&CatalogState::seeded());

        let upcoming: Vec<&str> = response.upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(upcoming, vec!["event1", "event2"]);
        assert_eq!(response.past.len(), 1);
        assert_eq!(response.past[0].id, "event3");
        assert_eq!(response.all.len(), 3);
    }

    #[tokio::test]
    async fn test_anonymous_cannot_edit() {
        let session = anonymous_session();
        let catalog = CatalogState::seeded();

        let err = admin_add_event(&session, &catalog, draft("Jazz Night")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        let err = admin_delete_event(&session, &catalog, "event1".to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(list_events(&catalog).all.len(), 3);
    }

    #[tokio::test]
    async fn test_video_replaces_image() {
        let session = admin_session().await;
        let catalog = CatalogState::seeded();

        let event = admin_add_event(&session, &catalog, draft("Jazz Night")).unwrap();
        assert!(event.id.starts_with("event-"));

        let mut edit = draft("Jazz Night");
        edit.media = Some(EventMedia::Video("https://example.com/jazz.mp4".to_string()));
        let updated = admin_update_event(&session, &catalog, event.id.clone(), edit).unwrap();

        assert_eq!(
            updated.media,
            Some(EventMedia::Video("https://example.com/jazz.mp4".to_string()))
        );
        assert_eq!(list_events(&catalog).upcoming.last().map(|e| e.id.clone()), Some(event.id));
    }

    #[tokio::test]
    async fn test_unknown_event() {
        let session = admin_session().await;
        let catalog = CatalogState::seeded();

        let err =
            admin_update_event(&session, &catalog, "event9".to_string(), draft("Ghost")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        admin_delete_event(&session, &catalog, "event3".to_string()).unwrap();
        assert!(list_events(&catalog).past.is_empty());
    }
}
